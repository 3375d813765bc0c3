use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangeError {
    #[error("Invalid amount: {input:?} is not a positive whole number")]
    InvalidAmount { input: String },

    #[error("Denomination set is empty")]
    EmptyDenominationSet,

    #[error("Cannot make exact change for {target}: {remainder} left over")]
    InexactChange { target: i64, remainder: i64 },

    #[error("Change for {target} needs {coins} coins, more than the limit of {limit}")]
    ChangeTooLarge { target: i64, coins: u64, limit: u64 },

    #[error("Unknown currency set: {name}")]
    UnknownCurrencySet { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
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

impl ChangeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChangeError::InvalidAmount { .. }
            | ChangeError::EmptyDenominationSet
            | ChangeError::InexactChange { .. }
            | ChangeError::ChangeTooLarge { .. }
            | ChangeError::UnknownCurrencySet { .. } => ErrorCategory::Input,
            ChangeError::ConfigError { .. }
            | ChangeError::ConfigValidationError { .. }
            | ChangeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ChangeError::IoError(_)
            | ChangeError::SerializationError(_)
            | ChangeError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChangeError::InvalidAmount { .. } => "Please enter a valid positive amount".to_string(),
            ChangeError::EmptyDenominationSet => {
                "Please enter valid coin denominations".to_string()
            }
            ChangeError::InexactChange { .. } => {
                "Cannot make exact change with these denominations".to_string()
            }
            ChangeError::ChangeTooLarge { coins, .. } => {
                format!("That amount would need {} coins, which is too many to dispense", coins)
            }
            ChangeError::UnknownCurrencySet { name } => {
                format!("No coin set named '{}' is available", name)
            }
            ChangeError::ConfigError { .. }
            | ChangeError::ConfigValidationError { .. }
            | ChangeError::InvalidConfigValueError { .. } => {
                format!("The configuration is not usable: {}", self)
            }
            ChangeError::IoError(_)
            | ChangeError::SerializationError(_)
            | ChangeError::CsvError(_) => format!("Could not produce output: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ChangeError::InvalidAmount { .. } => {
                "Enter the amount in cents/pennies as a whole number greater than zero (e.g. 87)"
            }
            ChangeError::EmptyDenominationSet => {
                "Provide at least one positive whole-number coin value, e.g. --custom \"1, 5, 10, 25\""
            }
            ChangeError::InexactChange { .. } => {
                "Add a 1-unit coin to the set, or choose an amount the coins can reach"
            }
            ChangeError::ChangeTooLarge { .. } => {
                "Use a smaller amount or a set with larger denominations"
            }
            ChangeError::UnknownCurrencySet { .. } => {
                "Run with --list-sets to see the available coin sets"
            }
            ChangeError::ConfigError { .. }
            | ChangeError::ConfigValidationError { .. }
            | ChangeError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the TOML configuration file"
            }
            ChangeError::IoError(_)
            | ChangeError::SerializationError(_)
            | ChangeError::CsvError(_) => "Check that standard output is writable and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChangeError>;
