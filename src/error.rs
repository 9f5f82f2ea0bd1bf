use std::path::PathBuf;

pub type FrameSheetResult<T> = Result<T, FrameSheetError>;

/// 影格形狀，依序為 (寬, 高, 通道數)
pub type FrameShape = (u32, u32, u8);

#[derive(thiserror::Error, Debug)]
pub enum FrameSheetError {
    #[error("找不到第 0 張影格: {}，至少需要一張影格才能建立影格表", path.display())]
    MissingFrameZero { path: PathBuf },

    #[error("找不到資料夾或貼圖: '{input}'")]
    InputNotFound { input: String },

    #[error(
        "影格 {index} 尺寸不符（寬x高x通道）: 預期 {}x{}x{}，實際 {}x{}x{}",
        expected.0, expected.1, expected.2, found.0, found.1, found.2
    )]
    DimensionMismatch {
        index: usize,
        expected: FrameShape,
        found: FrameShape,
    },

    #[error("{frame_count} 張影格無法排入 {limit}x{limit} 以下的網格")]
    GridOverflow { frame_count: usize, limit: usize },

    #[error("影格表尺寸超出範圍: {columns} 欄 x {rows} 列，每格 {tile_width}x{tile_height}")]
    SheetTooLarge {
        columns: usize,
        rows: usize,
        tile_width: u32,
        tile_height: u32,
    },

    #[error("影格序列是空的")]
    EmptySequence,

    #[error("點陣資料長度錯誤: {width}x{height}x{channels} 需要 {expected} 位元組，實際 {actual}")]
    InvalidRaster {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },

    #[error("無法讀取影像 {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("無法寫入影像 {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FrameSheetError {
    pub fn input_not_found(input: impl Into<String>) -> Self {
        Self::InputNotFound {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_frame_message_names_path() {
        let err = FrameSheetError::MissingFrameZero {
            path: PathBuf::from("fx000.tga"),
        };
        assert!(err.to_string().contains("fx000.tga"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = FrameSheetError::DimensionMismatch {
            index: 3,
            expected: (4, 4, 4),
            found: (8, 4, 3),
        };
        let message = err.to_string();
        assert!(message.contains("4x4x4"));
        assert!(message.contains("8x4x3"));
        assert!(message.contains("寬x高x通道"));
    }

    #[test]
    fn test_io_preserves_source() {
        let err = FrameSheetError::from(std::io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
    }
}
