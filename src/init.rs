use log::LevelFilter;

/// 初始化日誌，`RUST_LOG` 可覆寫命令列指定的等級
pub fn init(level: &str) {
    let _ = env_logger::Builder::new()
        .filter_level(level.parse().unwrap_or(LevelFilter::Warn))
        .parse_default_env()
        .try_init();
}
