//! 影格表建立元件
//!
//! 將 `<base>000`、`<base>001`… 連續編號的影格合併成單張動畫貼圖。

mod compositor;
mod grid_shape;
mod main;

pub use compositor::compose_sheet;
pub use grid_shape::GridShape;
pub use main::{FrameSheet, FrameSheetBuilder, SheetReport};
