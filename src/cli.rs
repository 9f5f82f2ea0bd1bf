use crate::component::{BatchDriver, FrameSheetBuilder};
use crate::config::Config;
use crate::report::{print_batch_report, print_sheet_report};
use crate::tools::{InputKind, resolve_input};
use anyhow::Result;
use clap::Parser;
use console::style;
use log::warn;
use rust_i18n::t;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 將連續編號的影格（`name000.tga`、`name001.tga`…）合併為動畫貼圖用的影格表
#[derive(Parser, Debug)]
#[command(name = "frame_sheet_maker", version, about, long_about = None)]
pub struct Cli {
    /// 序列名稱（不含編號與副檔名）或含有描述檔的資料夾；省略時進入互動選單
    pub input: Option<String>,

    /// 輸出影格表名稱，只適用於單一序列
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// 影格表欄數，預設取自設定檔
    #[arg(short = 'c', long = "columns", value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: Option<u32>,

    /// 日誌等級：error、warn、info、debug、trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// 命令列欄數，未指定時使用設定值
    #[must_use]
    pub fn columns_or(&self, default_columns: usize) -> usize {
        self.columns.map_or(default_columns, |c| c as usize)
    }
}

/// 依輸入類型執行單一序列或批次建立
pub fn run_command(cli: &Cli, input: &str, config: &Config, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    let settings = &config.settings;
    let columns = cli.columns_or(settings.default_columns);

    match resolve_input(input, &settings.descriptor_extension)? {
        InputKind::Sequence(base) => {
            let builder = FrameSheetBuilder::from_settings(settings);
            let report = builder.build(&base, cli.output.as_deref(), columns)?;
            print_sheet_report(&report);
        }
        InputKind::Directory(directory) => {
            if cli.output.is_some() {
                warn!("批次模式忽略 -o 參數");
                println!("{}", style(t!("report.output_ignored")).yellow());
            }

            let driver = BatchDriver::from_settings(settings, Arc::clone(shutdown_signal));
            let report = driver.build_all(&directory, columns)?;
            print_batch_report(&report, &directory, &settings.descriptor_extension);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_single_sequence_arguments() {
        let cli = Cli::parse_from(["frame_sheet_maker", "fx/fire", "-o", "out/fire", "-c", "8"]);
        assert_eq!(cli.input.as_deref(), Some("fx/fire"));
        assert_eq!(cli.output, Some(PathBuf::from("out/fire")));
        assert_eq!(cli.columns_or(1), 8);
    }

    #[test]
    fn test_columns_default_from_settings() {
        let cli = Cli::parse_from(["frame_sheet_maker", "fx"]);
        assert_eq!(cli.columns_or(4), 4);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(Cli::try_parse_from(["frame_sheet_maker", "fx", "-c", "0"]).is_err());
    }

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::parse_from(["frame_sheet_maker"]);
        assert!(cli.input.is_none());
    }
}
