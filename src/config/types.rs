use serde::{Deserialize, Serialize};
use std::fmt;

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 10;

/// 動畫貼圖網格的上限，欄與列都必須小於此值
pub const DEFAULT_GRID_LIMIT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 使用者設定（`settings.json`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    /// 影格與輸出影格表的副檔名
    pub frame_extension: String,
    /// 序列描述檔的副檔名
    pub descriptor_extension: String,
    pub default_columns: usize,
    pub grid_limit: usize,
    /// 批次模式中單一序列失敗時是否繼續處理其他序列
    pub continue_on_error: bool,
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            frame_extension: "tga".to_string(),
            descriptor_extension: "mks".to_string(),
            default_columns: 1,
            grid_limit: DEFAULT_GRID_LIMIT,
            continue_on_error: true,
            recent_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
