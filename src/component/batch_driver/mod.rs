//! 批次影格表元件
//!
//! 掃描資料夾中的序列描述檔，逐一建立影格表

mod main;

pub use main::{BatchDriver, BatchFailure, BatchReport};
