//! 8 位元點陣資料與影像讀寫
//!
//! 影像編解碼交給 `image`，這裡只保留 (高, 寬, 通道) 的原始位元組。

use crate::error::{FrameSheetError, FrameSheetResult, FrameShape};
use image::{ColorType, DynamicImage};
use log::debug;
use std::path::Path;

/// 以列優先、通道交錯方式存放的 8 位元點陣
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl Raster {
    /// 建立全部為 0 的點陣（黑色／透明）
    #[must_use]
    pub fn zeroed(width: u32, height: u32, channels: u8) -> Self {
        let len = width as usize * height as usize * usize::from(channels);
        Self {
            width,
            height,
            channels,
            data: vec![0; len],
        }
    }

    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> FrameSheetResult<Self> {
        let expected = width as usize * height as usize * usize::from(channels);
        if width == 0 || height == 0 || !(1..=4).contains(&channels) || data.len() != expected {
            return Err(FrameSheetError::InvalidRaster {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn channels(&self) -> u8 {
        self.channels
    }

    #[must_use]
    pub const fn shape(&self) -> FrameShape {
        (self.width, self.height, self.channels)
    }

    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    const fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// 將 `src` 逐列複製到 (x, y) 位置
    ///
    /// 呼叫端需保證通道數相同且 `src` 完整落在範圍內。
    pub fn blit(&mut self, src: &Self, x: u32, y: u32) {
        debug_assert_eq!(self.channels, src.channels);
        debug_assert!(x + src.width <= self.width && y + src.height <= self.height);

        let dst_row_len = self.row_len();
        let src_row_len = src.row_len();
        let x_offset = x as usize * usize::from(self.channels);

        for (row, src_row) in src.data.chunks_exact(src_row_len).enumerate() {
            let start = (y as usize + row) * dst_row_len + x_offset;
            self.data[start..start + src_row_len].copy_from_slice(src_row);
        }
    }

    /// 取出 (x, y) 起始、大小 width x height 的區塊
    #[must_use]
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let mut out = Self::zeroed(width, height, self.channels);
        let src_row_len = self.row_len();
        let out_row_len = out.row_len();
        let x_offset = x as usize * usize::from(self.channels);

        for (row, out_row) in out.data.chunks_exact_mut(out_row_len).enumerate() {
            let start = (y as usize + row) * src_row_len + x_offset;
            out_row.copy_from_slice(&self.data[start..start + out_row_len]);
        }
        out
    }

    const fn color_type(&self) -> ColorType {
        match self.channels {
            1 => ColorType::L8,
            2 => ColorType::La8,
            3 => ColorType::Rgb8,
            _ => ColorType::Rgba8,
        }
    }
}

impl From<DynamicImage> for Raster {
    fn from(image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (channels, data) = match image {
            DynamicImage::ImageLuma8(buffer) => (1, buffer.into_raw()),
            DynamicImage::ImageLumaA8(buffer) => (2, buffer.into_raw()),
            DynamicImage::ImageRgb8(buffer) => (3, buffer.into_raw()),
            DynamicImage::ImageRgba8(buffer) => (4, buffer.into_raw()),
            // 16 位元與浮點格式統一降為 RGBA8
            other => (4, other.to_rgba8().into_raw()),
        };
        Self {
            width,
            height,
            channels,
            data,
        }
    }
}

/// 讀取影像檔為點陣
pub fn load_raster(path: &Path) -> FrameSheetResult<Raster> {
    let image = image::open(path).map_err(|source| FrameSheetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let raster = Raster::from(image);
    debug!(
        "讀取 {}: {}x{}x{}",
        path.display(),
        raster.width,
        raster.height,
        raster.channels
    );
    Ok(raster)
}

/// 依副檔名決定格式寫出點陣
pub fn save_raster(path: &Path, raster: &Raster) -> FrameSheetResult<()> {
    image::save_buffer(
        path,
        &raster.data,
        raster.width,
        raster.height,
        raster.color_type(),
    )
    .map_err(|source| FrameSheetError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
