//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能，包含主要邏輯和專用工具

pub mod batch_driver;
pub mod frame_sheet_builder;

pub use batch_driver::{BatchDriver, BatchReport};
pub use frame_sheet_builder::{FrameSheetBuilder, SheetReport};
