//! 影格序列：`<base><三位數索引>.<副檔名>`
//!
//! 影格一律從 0 開始且必須連續，第一個缺少的索引即為序列結尾。

use crate::error::FrameSheetResult;
use crate::tools::raster::{Raster, load_raster};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 依索引提供影格的來源
pub trait FrameSource {
    /// 索引對應的影格是否存在
    fn contains(&self, index: usize) -> bool;

    /// 載入索引對應的影格
    fn load(&self, index: usize) -> FrameSheetResult<Raster>;

    /// 錯誤訊息中用來指出影格的位置
    fn locate(&self, index: usize) -> PathBuf;
}

/// 計算從索引 0 開始連續存在的影格數
pub fn count_frames<S: FrameSource + ?Sized>(source: &S) -> usize {
    let count = (0..).take_while(|&index| source.contains(index)).count();
    debug!("影格數: {count}");
    count
}

/// 組出影格檔名，例如 `fx` + 7 + `tga` → `fx007.tga`
#[must_use]
pub fn frame_path(base: &Path, index: usize, extension: &str) -> PathBuf {
    with_suffix(base, &format!("{index:03}.{extension}"))
}

/// 在路徑後直接接上字串（不插入分隔符）
#[must_use]
pub fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// 磁碟上的影格序列
#[derive(Debug, Clone)]
pub struct FileFrameSource {
    base: PathBuf,
    extension: String,
}

impl FileFrameSource {
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }
}

impl FrameSource for FileFrameSource {
    fn contains(&self, index: usize) -> bool {
        self.locate(index).is_file()
    }

    fn load(&self, index: usize) -> FrameSheetResult<Raster> {
        load_raster(&self.locate(index))
    }

    fn locate(&self, index: usize) -> PathBuf {
        frame_path(&self.base, index, &self.extension)
    }
}

/// 記憶體中的影格，主要供測試與程式內組裝使用
impl FrameSource for [Raster] {
    fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    fn load(&self, index: usize) -> FrameSheetResult<Raster> {
        Ok(self[index].clone())
    }

    fn locate(&self, index: usize) -> PathBuf {
        PathBuf::from(format!("<memory>[{index}]"))
    }
}
