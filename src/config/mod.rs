pub mod toml_config;

pub use toml_config::{DemoConfig, LoggingConfig, SoundsConfig};

/// Points at an optional TOML file; unset means built-in defaults.
pub const CONFIG_ENV_VAR: &str = "SOUND_DISPATCH_CONFIG";

/// 載入並驗證配置（由 `SOUND_DISPATCH_CONFIG` 指定檔案）
pub fn load() -> crate::utils::error::Result<DemoConfig> {
    use crate::utils::validation::Validate;

    let config = DemoConfig::from_env(CONFIG_ENV_VAR)?;
    config.validate()?;
    Ok(config)
}
