use crate::component::{BatchDriver, FrameSheetBuilder};
use crate::config::{Config, add_recent_path, save_settings};
use crate::pause;
use crate::report::{print_batch_report, print_sheet_report};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Input;
use log::warn;
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_single_sequence(term: &Term, config: &mut Config) -> Result<()> {
    if let Err(e) = build_single_sequence(config) {
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_directory(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    if let Err(e) = build_directory(shutdown_signal, config) {
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

fn build_single_sequence(config: &mut Config) -> Result<()> {
    let base = prompt_path(t!("prompt.sequence").to_string(), config)?;

    let output: String = Input::new()
        .with_prompt(t!("prompt.output"))
        .allow_empty(true)
        .interact_text()?;
    let output = output.trim();
    let output = (!output.is_empty()).then(|| PathBuf::from(output));

    let columns = prompt_columns(config.settings.default_columns)?;

    let builder = FrameSheetBuilder::from_settings(&config.settings);
    let report = builder.build(Path::new(&base), output.as_deref(), columns)?;
    print_sheet_report(&report);

    remember_path(config, &base);
    Ok(())
}

fn build_directory(shutdown_signal: &Arc<AtomicBool>, config: &mut Config) -> Result<()> {
    let prompt = t!("prompt.directory", ext = &config.settings.descriptor_extension).to_string();
    let directory = prompt_path(prompt, config)?;
    let columns = prompt_columns(config.settings.default_columns)?;

    let driver = BatchDriver::from_settings(&config.settings, Arc::clone(shutdown_signal));
    let report = driver.build_all(Path::new(&directory), columns)?;
    print_batch_report(
        &report,
        Path::new(&directory),
        &config.settings.descriptor_extension,
    );

    remember_path(config, &directory);
    Ok(())
}

/// 以最近使用的路徑作為預設值
fn prompt_path(prompt: String, config: &Config) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(recent) = config.settings.recent_paths.first() {
        input = input.default(recent.clone());
    }
    Ok(input.interact_text()?.trim().to_string())
}

fn prompt_columns(default_columns: usize) -> Result<usize> {
    let columns: usize = Input::new()
        .with_prompt(t!("prompt.columns"))
        .default(default_columns)
        .validate_with(|value: &usize| {
            if *value >= 1 {
                Ok(())
            } else {
                Err("columns must be at least 1")
            }
        })
        .interact_text()?;
    Ok(columns)
}

fn remember_path(config: &mut Config, path: &str) {
    add_recent_path(&mut config.settings, path);
    if let Err(e) = save_settings(&config.settings) {
        warn!("無法儲存最近使用的路徑: {e:#}");
    }
}
