use crate::domain::model::{
    Car, Cow, Duck, Lineup, DEFAULT_CAR_HORN, DEFAULT_COW_CALL, DEFAULT_DUCK_CALL,
};
use crate::utils::error::{DispatchError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub sounds: SoundsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundsConfig {
    pub duck: String,
    pub cow: String,
    pub car: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            format: "compact".to_string(),
        }
    }
}

impl Default for SoundsConfig {
    fn default() -> Self {
        Self {
            duck: DEFAULT_DUCK_CALL.to_string(),
            cow: DEFAULT_COW_CALL.to_string(),
            car: DEFAULT_CAR_HORN.to_string(),
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DispatchError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DispatchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 依環境變數載入：未設定時使用預設值
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var_os(var) {
            Some(path) => {
                tracing::debug!("Loading configuration from {:?}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${DUCK_CALL})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn is_json_logging(&self) -> bool {
        self.logging.format == "json"
    }

    pub fn lineup(&self) -> Lineup {
        Lineup {
            duck: Duck::new(self.sounds.duck.clone()),
            cow: Cow::new(self.sounds.cow.clone()),
            car: Car::new(self.sounds.car.clone()),
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_choice("logging.format", &self.logging.format, &LOG_FORMATS)?;

        for (field, value) in [
            ("sounds.duck", &self.sounds.duck),
            ("sounds.cow", &self.sounds.cow),
            ("sounds.car", &self.sounds.car),
        ] {
            validation::validate_non_empty(field, value)?;
            validation::validate_single_line(field, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[logging]
verbose = true
format = "json"

[sounds]
duck = "Quack quack!"
cow = "Moo."
car = "Beep!"
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert!(config.logging.verbose);
        assert!(config.is_json_logging());
        assert_eq!(config.lineup().duck, Duck::new("Quack quack!"));
        assert_eq!(config.lineup().car.horn, "Beep!");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = DemoConfig::from_toml_str("[sounds]\ncow = \"Moooo!\"\n").unwrap();

        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.sounds.duck, "Quack!");
        assert_eq!(config.sounds.cow, "Moooo!");
        assert_eq!(config.sounds.car, "Honk honk!");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.lineup(), Lineup::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SOUND_DISPATCH_TEST_DUCK", "Kwak!");

        let toml_content = r#"
[sounds]
duck = "${SOUND_DISPATCH_TEST_DUCK}"
cow = "${SOUND_DISPATCH_TEST_UNSET_VAR}"
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.sounds.duck, "Kwak!");
        assert_eq!(config.sounds.cow, "${SOUND_DISPATCH_TEST_UNSET_VAR}");

        std::env::remove_var("SOUND_DISPATCH_TEST_DUCK");
    }

    #[test]
    fn test_config_validation() {
        let mut config = DemoConfig::default();
        config.logging.format = "pretty".to_string();
        assert!(matches!(
            config.validate(),
            Err(DispatchError::InvalidConfigValueError { .. })
        ));

        let mut config = DemoConfig::default();
        config.sounds.car = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sounds.car"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = DemoConfig::from_toml_str("[sounds\nduck = 1").unwrap_err();
        assert!(matches!(err, DispatchError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sounds]\ncar = \"Vroom!\"").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sounds.car, "Vroom!");
    }

    #[test]
    fn test_from_missing_file() {
        let err = DemoConfig::from_file("/nonexistent/sound-dispatch.toml").unwrap_err();
        assert!(matches!(err, DispatchError::ConfigError { .. }));
    }

    #[test]
    fn test_from_env_unset_gives_default() {
        let config = DemoConfig::from_env("SOUND_DISPATCH_TEST_NEVER_SET").unwrap();
        assert_eq!(config, DemoConfig::default());
    }
}
