//! 掃描資料夾中的序列描述檔（例如 `explosion.mks`）

use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 找出資料夾第一層中副檔名為 `extension` 的描述檔，回傳去掉副檔名的序列路徑
///
/// 結果依檔名排序，批次報告因此可重現。
pub fn scan_descriptors(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut bases = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == extension);

        if matches {
            debug!("找到描述檔: {}", path.display());
            bases.push(path.with_extension(""));
        }
    }

    bases.sort();
    Ok(bases)
}
