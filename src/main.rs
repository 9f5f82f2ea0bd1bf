use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use frame_sheet_maker::cli::{Cli, run_command};
use frame_sheet_maker::config::types::Config;
use frame_sheet_maker::init;
use frame_sheet_maker::menu::show_main_menu;
use frame_sheet_maker::signal::setup_shutdown_signal;
use log::{info, warn};
use rust_i18n::t;

rust_i18n::i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    let cli = Cli::parse();
    init::init(&cli.log_level);

    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    let shutdown_signal = setup_shutdown_signal()?;

    if let Some(input) = cli.input.as_deref() {
        if let Err(e) = run_command(&cli, input, &config, &shutdown_signal) {
            eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let term = Term::stdout();
    loop {
        match show_main_menu(&term, &shutdown_signal, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
