use super::grid_shape::GridShape;
use crate::error::{FrameSheetError, FrameSheetResult};
use crate::tools::{FrameSource, Raster};
use log::debug;

/// 依列優先順序把影格逐一複製進影格表
///
/// `first` 為已載入的第 0 張影格，決定每格的尺寸與通道數；
/// 其餘影格尺寸不同時立即回傳 `DimensionMismatch`。
/// 未使用的尾端格子保持為 0。
pub fn compose_sheet<S: FrameSource + ?Sized>(
    source: &S,
    first: Raster,
    frame_count: usize,
    grid: GridShape,
) -> FrameSheetResult<Raster> {
    let (tile_width, tile_height, channels) = first.shape();
    if tile_width == 0 || tile_height == 0 {
        return Err(FrameSheetError::InvalidRaster {
            width: tile_width,
            height: tile_height,
            channels,
            expected: 0,
            actual: first.as_raw().len(),
        });
    }
    let (sheet_width, sheet_height) = sheet_size(tile_width, tile_height, grid)?;

    debug!(
        "合成影格表 {sheet_width}x{sheet_height}x{channels}（{} x {}）",
        grid.columns, grid.rows
    );

    let mut sheet = Raster::zeroed(sheet_width, sheet_height, channels);
    let expected = first.shape();

    for index in 0..frame_count {
        let loaded;
        let frame = if index == 0 {
            &first
        } else {
            loaded = source.load(index)?;
            &loaded
        };

        if frame.shape() != expected {
            return Err(FrameSheetError::DimensionMismatch {
                index,
                expected,
                found: frame.shape(),
            });
        }

        let (row, col) = grid.tile_position(index);
        // sheet_size 已確認整張表的尺寸放得進 u32
        sheet.blit(frame, col as u32 * tile_width, row as u32 * tile_height);
    }

    Ok(sheet)
}

fn sheet_size(tile_width: u32, tile_height: u32, grid: GridShape) -> FrameSheetResult<(u32, u32)> {
    let width = u32::try_from(grid.columns)
        .ok()
        .and_then(|columns| columns.checked_mul(tile_width));
    let height = u32::try_from(grid.rows)
        .ok()
        .and_then(|rows| rows.checked_mul(tile_height));

    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(FrameSheetError::SheetTooLarge {
            columns: grid.columns,
            rows: grid.rows,
            tile_width,
            tile_height,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(width: u32, height: u32, channels: u8, value: u8) -> Raster {
        let len = width as usize * height as usize * usize::from(channels);
        Raster::from_raw(width, height, channels, vec![value; len]).unwrap()
    }

    fn compose(frames: &[Raster], grid: GridShape) -> FrameSheetResult<Raster> {
        compose_sheet(frames, frames[0].clone(), frames.len(), grid)
    }

    #[test]
    fn test_tiles_follow_row_major_order() {
        let frames: Vec<Raster> = (1..=10).map(|v| constant(2, 3, 3, v * 10)).collect();
        let grid = GridShape { columns: 3, rows: 4 };

        let sheet = compose(&frames, grid).unwrap();

        assert_eq!(sheet.shape(), (6, 12, 3));
        for (index, frame) in frames.iter().enumerate() {
            let (row, col) = grid.tile_position(index);
            let tile = sheet.crop(col as u32 * 2, row as u32 * 3, 2, 3);
            assert_eq!(&tile, frame, "影格 {index} 位置錯誤");
        }
    }

    #[test]
    fn test_padding_tiles_are_zero() {
        let frames: Vec<Raster> = (1..=10).map(|v| constant(2, 2, 4, v)).collect();
        let grid = GridShape { columns: 3, rows: 4 };

        let sheet = compose(&frames, grid).unwrap();

        for index in 10..grid.cell_count() {
            let (row, col) = grid.tile_position(index);
            let tile = sheet.crop(col as u32 * 2, row as u32 * 2, 2, 2);
            assert!(tile.as_raw().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_frames_with_texture_survive_byte_for_byte() {
        let frames: Vec<Raster> = (0..4u8)
            .map(|seed| {
                let data = (0..3 * 2 * 4).map(|i| seed.wrapping_mul(31).wrapping_add(i)).collect();
                Raster::from_raw(3, 2, 4, data).unwrap()
            })
            .collect();
        let grid = GridShape { columns: 4, rows: 1 };

        let sheet = compose(&frames, grid).unwrap();

        for (index, frame) in frames.iter().enumerate() {
            assert_eq!(&sheet.crop(index as u32 * 3, 0, 3, 2), frame);
        }
    }

    #[test]
    fn test_size_mismatch_fails_fast() {
        let frames = vec![constant(4, 4, 4, 1), constant(4, 4, 4, 2), constant(4, 5, 4, 3)];
        let err = compose(&frames, GridShape { columns: 3, rows: 1 }).unwrap_err();

        assert!(matches!(
            err,
            FrameSheetError::DimensionMismatch {
                index: 2,
                expected: (4, 4, 4),
                found: (4, 5, 4),
            }
        ));
    }

    #[test]
    fn test_channel_mismatch_fails_fast() {
        let frames = vec![constant(4, 4, 4, 1), constant(4, 4, 3, 2)];
        let err = compose(&frames, GridShape { columns: 2, rows: 1 }).unwrap_err();

        assert!(matches!(err, FrameSheetError::DimensionMismatch { index: 1, .. }));
    }

    #[test]
    fn test_sheet_size_overflow() {
        let grid = GridShape { columns: 3, rows: 1 };

        assert_eq!(sheet_size(7, 5, grid).unwrap(), (21, 5));
        assert!(matches!(
            sheet_size(u32::MAX / 2, 1, grid),
            Err(FrameSheetError::SheetTooLarge {
                columns: 3,
                rows: 1,
                ..
            })
        ));
        assert!(matches!(
            sheet_size(1, u32::MAX / 2, GridShape { columns: 1, rows: 3 }),
            Err(FrameSheetError::SheetTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_first_frame_is_error() {
        let frames = vec![Raster::zeroed(0, 4, 4); 3];
        let err = compose_sheet(
            frames.as_slice(),
            frames[0].clone(),
            3,
            GridShape { columns: 2, rows: 2 },
        )
        .unwrap_err();

        assert!(matches!(err, FrameSheetError::InvalidRaster { width: 0, .. }));
    }
}
