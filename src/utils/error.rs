use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Error reading the file: {message}")]
    FileReadError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Spreadsheet export failed: {0}")]
    ExportError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    /// 建立讀檔錯誤，保留底層函式庫的原始訊息
    pub fn file_read(message: impl std::fmt::Display) -> Self {
        EtlError::FileReadError {
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FileReadError { .. } => ErrorCategory::Input,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::IoError(_) | EtlError::ExportError(_) | EtlError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 對應 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FileReadError { .. } => self.to_string(),
            EtlError::IoError(e) => format!("Could not write the output file: {}", e),
            EtlError::ExportError(e) => format!("Could not build the output spreadsheet: {}", e),
            EtlError::SerializationError(e) => format!("Could not render the report: {}", e),
            EtlError::ConfigError { message } => format!("Invalid configuration: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::FileReadError { .. } => {
                "Check that the input is a readable .xlsx, .xls, .xlsm, .xlsb, .ods or .csv file"
            }
            EtlError::IoError(_) => "Check that the output directory exists and is writable",
            EtlError::ExportError(_) => "Try again with fewer matches or a different output name",
            EtlError::SerializationError(_) => "Run again without --json",
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the command-line flags or the TOML config file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
