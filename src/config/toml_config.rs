use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    parse_operand, validate_non_empty_string, validate_one_of, validate_range, Validate,
    LOG_LEVELS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Fixed number of decimals for results; `None` keeps the shortest form.
    pub precision: Option<usize>,
    pub default_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: None,
            default_text: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl CalcConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 檔案不存在時使用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn precision(&self) -> Option<usize> {
        self.display.precision
    }

    pub fn default_text(&self) -> &str {
        &self.display.default_text
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

impl Validate for CalcConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.display.precision {
            validate_range("display.precision", precision, 0, MAX_PRECISION)?;
        }

        validate_non_empty_string("display.default_text", &self.display.default_text)?;
        parse_operand(&self.display.default_text).map_err(|_| {
            CalcError::InvalidConfigValueError {
                field: "display.default_text".to_string(),
                value: self.display.default_text.clone(),
                reason: "Default display text must be a number".to_string(),
            }
        })?;

        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }
}
