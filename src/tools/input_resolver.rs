use crate::error::{FrameSheetError, FrameSheetResult};
use crate::tools::frame_sequence::with_suffix;
use std::path::{Path, PathBuf};

/// 命令列輸入所代表的工作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// 單一序列，內容為序列路徑（不含索引與副檔名）
    Sequence(PathBuf),
    /// 批次處理資料夾
    Directory(PathBuf),
}

/// 判斷輸入是序列還是資料夾
///
/// 先檢查 `<input>.<descriptor>` 描述檔，再檢查資料夾，兩者皆無則回傳 `InputNotFound`。
pub fn resolve_input(input: &str, descriptor_extension: &str) -> FrameSheetResult<InputKind> {
    let path = Path::new(input);

    if with_suffix(path, &format!(".{descriptor_extension}")).is_file() {
        return Ok(InputKind::Sequence(path.to_path_buf()));
    }

    if path.is_dir() {
        return Ok(InputKind::Directory(path.to_path_buf()));
    }

    Err(FrameSheetError::input_not_found(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_descriptor_wins_over_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("fire");
        fs::create_dir(&base).unwrap();
        fs::write(temp_dir.path().join("fire.mks"), "").unwrap();

        let kind = resolve_input(base.to_str().unwrap(), "mks").unwrap();
        assert_eq!(kind, InputKind::Sequence(base));
    }

    #[test]
    fn test_directory_input() {
        let temp_dir = TempDir::new().unwrap();
        let kind = resolve_input(temp_dir.path().to_str().unwrap(), "mks").unwrap();
        assert_eq!(kind, InputKind::Directory(temp_dir.path().to_path_buf()));
    }

    #[test]
    fn test_unknown_input() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nothing");
        let err = resolve_input(missing.to_str().unwrap(), "mks").unwrap_err();
        assert!(matches!(err, FrameSheetError::InputNotFound { .. }));
    }
}
