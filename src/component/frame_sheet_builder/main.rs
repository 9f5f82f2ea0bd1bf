use super::compositor::compose_sheet;
use super::grid_shape::GridShape;
use crate::config::UserSettings;
use crate::error::{FrameSheetError, FrameSheetResult};
use crate::tools::{
    FileFrameSource, FrameSource, Raster, count_frames, ensure_parent_exists, save_raster,
    with_suffix,
};
use log::info;
use std::path::{Path, PathBuf};

/// 記憶體中完成合成的影格表
#[derive(Debug, Clone)]
pub struct FrameSheet {
    pub raster: Raster,
    pub grid: GridShape,
    pub frame_count: usize,
}

/// 單一影格表的建立結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    /// 序列路徑（不含索引與副檔名）
    pub base: PathBuf,
    pub output_path: PathBuf,
    pub frame_count: usize,
    pub columns: usize,
    pub rows: usize,
}

impl SheetReport {
    /// 輸出貼圖的檔名
    #[must_use]
    pub fn texture_name(&self) -> String {
        self.output_path
            .file_name()
            .map_or_else(
                || self.output_path.display().to_string(),
                |name| name.to_string_lossy().to_string(),
            )
    }
}

/// 影格表建立器
///
/// 流程：
/// 1. 確認第 0 張影格存在並計算連續影格數
/// 2. 計算動畫網格
/// 3. 逐格複製影格
/// 4. 以影格相同的格式寫出
#[derive(Debug, Clone)]
pub struct FrameSheetBuilder {
    frame_extension: String,
    grid_limit: usize,
}

impl FrameSheetBuilder {
    pub fn new(frame_extension: impl Into<String>, grid_limit: usize) -> Self {
        Self {
            frame_extension: frame_extension.into(),
            grid_limit,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self::new(settings.frame_extension.clone(), settings.grid_limit)
    }

    /// 建立 `base` 序列的影格表並寫到 `<output 或 base>.<副檔名>`
    ///
    /// 第 0 張影格不存在、影格尺寸不一致或網格超出上限時不會寫出任何檔案。
    pub fn build(
        &self,
        base: &Path,
        output: Option<&Path>,
        requested_columns: usize,
    ) -> FrameSheetResult<SheetReport> {
        let source = FileFrameSource::new(base, self.frame_extension.as_str());
        let sheet = self.compose(&source, requested_columns)?;

        let output_path = with_suffix(output.unwrap_or(base), &format!(".{}", self.frame_extension));
        ensure_parent_exists(&output_path)?;
        save_raster(&output_path, &sheet.raster)?;

        info!(
            "影格表已建立: {} ({} x {}, {} 格)",
            output_path.display(),
            sheet.grid.columns,
            sheet.grid.rows,
            sheet.frame_count
        );

        Ok(SheetReport {
            base: base.to_path_buf(),
            output_path,
            frame_count: sheet.frame_count,
            columns: sheet.grid.columns,
            rows: sheet.grid.rows,
        })
    }

    /// 從任意影格來源合成影格表，不寫入磁碟
    pub fn compose<S: FrameSource + ?Sized>(
        &self,
        source: &S,
        requested_columns: usize,
    ) -> FrameSheetResult<FrameSheet> {
        if !source.contains(0) {
            return Err(FrameSheetError::MissingFrameZero {
                path: source.locate(0),
            });
        }

        let frame_count = count_frames(source);
        let grid = GridShape::compute(frame_count, requested_columns, self.grid_limit)?;
        let first = source.load(0)?;
        let raster = compose_sheet(source, first, frame_count, grid)?;

        Ok(FrameSheet {
            raster,
            grid,
            frame_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GRID_LIMIT;

    fn builder() -> FrameSheetBuilder {
        FrameSheetBuilder::new("tga", DEFAULT_GRID_LIMIT)
    }

    fn frames(count: u8) -> Vec<Raster> {
        (0..count)
            .map(|v| Raster::from_raw(2, 2, 1, vec![v + 1; 4]).unwrap())
            .collect()
    }

    #[test]
    fn test_compose_from_memory() {
        let frames = frames(5);
        let sheet = builder().compose(frames.as_slice(), 2).unwrap();

        assert_eq!(sheet.frame_count, 5);
        assert_eq!(sheet.grid, GridShape { columns: 2, rows: 3 });
        assert_eq!(sheet.raster.shape(), (4, 6, 1));
        assert_eq!(sheet.raster.crop(0, 4, 2, 2), frames[4]);
        assert!(sheet.raster.crop(2, 4, 2, 2).as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_compose_without_frames() {
        let err = builder().compose(frames(0).as_slice(), 1).unwrap_err();
        assert!(matches!(err, FrameSheetError::MissingFrameZero { .. }));
    }

    #[test]
    fn test_compose_respects_grid_limit() {
        let small_limit = FrameSheetBuilder::new("tga", 4);
        let sheet = small_limit.compose(frames(9).as_slice(), 1).unwrap();
        assert_eq!(sheet.grid, GridShape { columns: 3, rows: 3 });

        let err = small_limit.compose(frames(10).as_slice(), 1).unwrap_err();
        assert!(matches!(err, FrameSheetError::GridOverflow { .. }));
    }

    #[test]
    fn test_compose_rejects_empty_frames() {
        let frames = vec![Raster::zeroed(0, 4, 4); 3];
        let err = builder().compose(frames.as_slice(), 2).unwrap_err();
        assert!(matches!(err, FrameSheetError::InvalidRaster { width: 0, .. }));
    }

    #[test]
    fn test_texture_name() {
        let report = SheetReport {
            base: PathBuf::from("fx/fire"),
            output_path: PathBuf::from("fx/fire.tga"),
            frame_count: 3,
            columns: 3,
            rows: 1,
        };
        assert_eq!(report.texture_name(), "fire.tga");
    }
}
