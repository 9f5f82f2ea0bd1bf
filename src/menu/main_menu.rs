use crate::config::save::save_settings;
use crate::config::types::{Config, Language};
use crate::menu::handlers::{run_directory, run_single_sequence};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_single"),
        t!("main_menu.opt_directory"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_single_sequence(term, config)?;
            Ok(true)
        }
        Some(1) => {
            run_directory(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(2) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(3) | None => Ok(false), // ESC - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());
        println!(
            "\n{} {} / {} / {}\n",
            style(t!("settings.current")).dim(),
            config.settings.default_columns,
            config.settings.continue_on_error,
            config.settings.language
        );

        let options = vec![
            t!("settings.opt_columns"),
            t!("settings.opt_continue"),
            t!("settings.opt_language"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => edit_default_columns(config)?,
            Some(1) => edit_continue_on_error(config)?,
            Some(2) => show_language_menu(term, config)?,
            Some(3) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn edit_default_columns(config: &mut Config) -> Result<()> {
    let columns: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.columns_prompt"))
        .default(config.settings.default_columns)
        .validate_with(|value: &usize| {
            if *value >= 1 {
                Ok(())
            } else {
                Err("columns must be at least 1")
            }
        })
        .interact_text()?;

    if columns != config.settings.default_columns {
        config.settings.default_columns = columns;
        save_settings(&config.settings)?;
        println!("\n{} {}", style(t!("settings.saved")).green(), columns);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

fn edit_continue_on_error(config: &mut Config) -> Result<()> {
    let Some(enabled) = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.continue_prompt"))
        .default(config.settings.continue_on_error)
        .interact_opt()?
    else {
        return Ok(());
    };

    if enabled != config.settings.continue_on_error {
        config.settings.continue_on_error = enabled;
        save_settings(&config.settings)?;
        println!("\n{} {}", style(t!("settings.saved")).green(), enabled);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [Language::EnUs, Language::ZhTw];

    let items: Vec<String> = languages.iter().map(|l: &Language| l.to_string()).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_lang
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
