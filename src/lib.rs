pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod init;
pub mod menu;
pub mod report;
pub mod signal;
pub mod tools;

use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;

rust_i18n::i18n!("locales", fallback = "en-US");

pub use error::{FrameSheetError, FrameSheetResult};

pub fn pause(term: &Term) -> Result<()> {
    println!("\n{}", style(t!("common.press_enter")).dim());
    term.read_line()?;
    Ok(())
}
