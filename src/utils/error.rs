use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Operation '{symbol}' not found")]
    InvalidOperation { symbol: String },

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is too large to display")]
    Overflow,

    #[error("Invalid number: '{input}'")]
    InvalidInput { input: String },

    #[error("Unknown key '{key}'")]
    UnknownKey { key: char },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_operation(symbol: impl Into<String>) -> Self {
        Self::InvalidOperation {
            symbol: symbol.into(),
        }
    }

    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DivisionByZero | Self::Overflow => ErrorCategory::Arithmetic,
            Self::InvalidOperation { .. } | Self::InvalidInput { .. } | Self::UnknownKey { .. } => {
                ErrorCategory::Input
            }
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidOperation { .. } | Self::InvalidInput { .. } | Self::UnknownKey { .. } => {
                ErrorSeverity::Medium
            }
            Self::DivisionByZero | Self::Overflow => ErrorSeverity::High,
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 計算錯誤後是否需要重置輸入狀態
    pub fn resets_entry(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidOperation { symbol } if symbol.is_empty() => {
                "No operation selected!".to_string()
            }
            Self::InvalidOperation { symbol } => format!("Operation '{}' not found!", symbol),
            Self::DivisionByZero => "Division by zero is not allowed!".to_string(),
            Self::Overflow => "Result is too large to display!".to_string(),
            Self::InvalidInput { input } => format!("Invalid number: '{}'!", input),
            Self::UnknownKey { key } => format!("Unknown key '{}'!", key),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidOperation { .. } => "Use one of the listed operators: + - * /",
            Self::DivisionByZero => "Enter a non-zero divisor",
            Self::Overflow => "Use smaller operands",
            Self::InvalidInput { .. } => "Enter a finite decimal number such as 12 or 3.5",
            Self::UnknownKey { .. } => "Keys are 0-9 . + - * / = C D <",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Retry without --json",
            Self::TomlError(_) => "Fix the configuration file syntax",
            Self::InvalidConfigValueError { .. } => "Adjust the setting to an allowed value",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
