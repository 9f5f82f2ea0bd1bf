use crate::component::frame_sheet_builder::{FrameSheetBuilder, SheetReport};
use crate::config::UserSettings;
use crate::error::FrameSheetError;
use crate::tools::{scan_descriptors, validate_directory_exists};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 建立失敗的序列
#[derive(Debug)]
pub struct BatchFailure {
    pub base: PathBuf,
    pub error: FrameSheetError,
}

/// 批次處理結果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 依序列名稱排序的成功結果
    pub sheets: Vec<SheetReport>,
    pub failures: Vec<BatchFailure>,
    /// 收到中斷訊號而提前結束
    pub interrupted: bool,
}

impl BatchReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty() && self.failures.is_empty()
    }
}

/// 批次建立資料夾內所有序列的影格表
///
/// 每個描述檔對應一個序列，影格表寫在影格旁，檔名與序列相同。
pub struct BatchDriver {
    builder: FrameSheetBuilder,
    descriptor_extension: String,
    continue_on_error: bool,
    shutdown_signal: Arc<AtomicBool>,
}

impl BatchDriver {
    pub fn new(
        builder: FrameSheetBuilder,
        descriptor_extension: impl Into<String>,
        continue_on_error: bool,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            builder,
            descriptor_extension: descriptor_extension.into(),
            continue_on_error,
            shutdown_signal,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &UserSettings, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::new(
            FrameSheetBuilder::from_settings(settings),
            settings.descriptor_extension.clone(),
            settings.continue_on_error,
            shutdown_signal,
        )
    }

    pub fn build_all(&self, directory: &Path, requested_columns: usize) -> Result<BatchReport> {
        validate_directory_exists(directory)?;

        let bases = scan_descriptors(directory, &self.descriptor_extension)
            .with_context(|| format!("無法掃描資料夾: {}", directory.display()))?;

        let mut report = BatchReport::default();
        if bases.is_empty() {
            info!(
                "{} 中沒有 .{} 描述檔",
                directory.display(),
                self.descriptor_extension
            );
            return Ok(report);
        }

        let progress_bar = ProgressBar::new(bases.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for base in bases {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                progress_bar.abandon();
                report.interrupted = true;
                return Ok(report);
            }

            let name = base
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            progress_bar.set_message(name);

            match self.builder.build(&base, None, requested_columns) {
                Ok(sheet) => report.sheets.push(sheet),
                Err(e) if self.continue_on_error => {
                    error!("影格表建立失敗 {}: {e}", base.display());
                    report.failures.push(BatchFailure { base, error: e });
                }
                Err(e) => {
                    progress_bar.abandon();
                    let context = format!("影格表建立失敗: {}", base.display());
                    return Err(anyhow::Error::new(e).context(context));
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        info!(
            "批次處理完成 - 成功: {}, 失敗: {}",
            report.sheets.len(),
            report.failures.len()
        );

        Ok(report)
    }
}
