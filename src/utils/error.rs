use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed orbit on line {line_number}: {line:?} has no '{delimiter}' delimiter")]
    MalformedLine {
        line_number: usize,
        line: String,
        delimiter: char,
    },

    #[error("Cyclic orbit detected: {}", .path.join(" -> "))]
    CyclicOrbit { path: Vec<String> },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, OrbitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl OrbitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrbitError::IoError(_) => ErrorCategory::System,
            OrbitError::MalformedLine { .. } => ErrorCategory::Input,
            OrbitError::CyclicOrbit { .. } => ErrorCategory::Data,
            OrbitError::ConfigValidationError { .. }
            | OrbitError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Input | ErrorCategory::Data | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
        }
    }

    /// 失敗一律非零：輸入或設定錯誤為 1，系統錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            OrbitError::IoError(e) => format!("Could not read the orbit map: {}", e),
            OrbitError::MalformedLine { line_number, .. } => format!(
                "Could not extract data from the orbit map (line {} is malformed)",
                line_number
            ),
            OrbitError::CyclicOrbit { path } => format!(
                "The orbit map contains a cycle starting at '{}'",
                path.first().map(String::as_str).unwrap_or("?")
            ),
            OrbitError::ConfigValidationError { field, .. }
            | OrbitError::InvalidConfigValueError { field, .. } => {
                format!("Invalid configuration for '{}': {}", field, self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OrbitError::IoError(_) => "Check that the input file exists and is readable",
            OrbitError::MalformedLine { .. } => {
                "Every line must look like CENTER)SATELLITE; remove blank or partial lines"
            }
            OrbitError::CyclicOrbit { .. } => {
                "Remove the circular orbit from the input, or pass --no-cycle-check to skip the guard"
            }
            OrbitError::ConfigValidationError { .. } => "Check the TOML syntax of the config file",
            OrbitError::InvalidConfigValueError { .. } => {
                "Fix the value on the command line or in the config file"
            }
        }
    }
}
