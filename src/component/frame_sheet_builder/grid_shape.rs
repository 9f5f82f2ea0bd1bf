//! 動畫網格尺寸計算
//!
//! 欄數以使用者要求為準，只在列數會碰到上限時逐一增加，
//! 盡量保留原本想要的長寬比例。

use crate::error::{FrameSheetError, FrameSheetResult};

/// 影格表的 (欄, 列)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

impl GridShape {
    /// 依影格數與要求欄數計算網格
    ///
    /// 1. 欄數不超過影格數（要求 0 欄視為 1 欄）
    /// 2. 列數 >= `limit` 時欄數加一
    /// 3. 列數 = ceil(影格數 / 欄數)
    ///
    /// 欄與列都必須小於 `limit`，找不到可行網格時回傳 `GridOverflow`。
    pub fn compute(
        frame_count: usize,
        requested_columns: usize,
        limit: usize,
    ) -> FrameSheetResult<Self> {
        if frame_count == 0 {
            return Err(FrameSheetError::EmptySequence);
        }

        let max_side = limit.saturating_sub(1);
        let overflow = || FrameSheetError::GridOverflow { frame_count, limit };

        let mut columns = requested_columns.clamp(1, frame_count);
        if columns > max_side {
            columns = max_side;
        }
        if columns == 0 {
            return Err(overflow());
        }

        while frame_count.div_ceil(columns) >= limit {
            if columns >= max_side {
                return Err(overflow());
            }
            columns += 1;
        }

        Ok(Self {
            columns,
            rows: frame_count.div_ceil(columns),
        })
    }

    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// 線性索引對應的 (列, 欄)
    #[must_use]
    pub const fn tile_position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}
