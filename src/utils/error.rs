use std::fmt;
use thiserror::Error;

/// Kind of registry entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Course,
    Instructor,
    Account,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Student => "Student",
            EntityKind::Course => "Course",
            EntityKind::Instructor => "Instructor",
            EntityKind::Account => "Account",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{entity} ID {id} already exists")]
    DuplicateId { entity: EntityKind, id: u32 },

    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },

    #[error("Student {student_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled { student_id: u32, course_id: u32 },

    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },

    #[error("Insufficient funds: balance {balance:.2}, required {required:.2}")]
    InsufficientFunds { balance: f64, required: f64 },

    #[error("Withdrawal limit of {max} reached")]
    WithdrawalLimitReached { max: u32 },

    #[error("Withdrawal of {amount:.2} exceeds the per-withdrawal cap of {cap:.2}")]
    WithdrawalCapExceeded { amount: f64, cap: f64 },

    #[error("Invalid recipient: {name}")]
    InvalidRecipient { name: String },

    #[error("Login failed for user '{username}'")]
    AuthenticationFailed { username: String },

    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
    Input,
    Authentication,
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

impl ErrorSeverity {
    /// Process exit code used by the binaries.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::IoError(_) => ErrorCategory::System,
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AppError::NotFound { .. } => ErrorCategory::Lookup,
            AppError::InvalidInput { .. } => ErrorCategory::Input,
            AppError::AuthenticationFailed { .. } => ErrorCategory::Authentication,
            AppError::DuplicateId { .. }
            | AppError::AlreadyEnrolled { .. }
            | AppError::NonPositiveAmount { .. }
            | AppError::InsufficientFunds { .. }
            | AppError::WithdrawalLimitReached { .. }
            | AppError::WithdrawalCapExceeded { .. }
            | AppError::InvalidRecipient { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Authentication | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// True when a menu loop can report the error and keep going.
    pub fn is_recoverable(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Console I/O failed: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AppError::AuthenticationFailed { .. } => "Login failed.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the values entered and try again",
            ErrorCategory::Lookup => "Use the show options to list existing records",
            ErrorCategory::Input => "Enter a whole number or a decimal amount",
            ErrorCategory::Authentication => "Check the username and password and log in again",
            ErrorCategory::Configuration => {
                "Fix the configuration file or run without --config to use the defaults"
            }
            ErrorCategory::System => "Make sure stdin and stdout are available",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_errors_are_recoverable() {
        let err = AppError::DuplicateId {
            entity: EntityKind::Student,
            id: 1,
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_recoverable());
        assert_eq!(err.severity().exit_code(), 0);

        let err = AppError::NotFound {
            entity: EntityKind::Course,
            key: "9".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert!(err.is_recoverable());

        let err = AppError::InvalidInput {
            input: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_session_ending_errors_map_to_exit_codes() {
        let auth = AppError::AuthenticationFailed {
            username: "eve".to_string(),
        };
        assert_eq!(auth.severity(), ErrorSeverity::High);
        assert_eq!(auth.severity().exit_code(), 1);
        assert_eq!(auth.user_friendly_message(), "Login failed.");

        let io = AppError::from(std::io::Error::other("closed"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.severity().exit_code(), 3);
    }

    #[test]
    fn test_display_messages() {
        let err = AppError::InsufficientFunds {
            balance: 10.0,
            required: 51.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: balance 10.00, required 51.50"
        );
        let err = AppError::DuplicateId {
            entity: EntityKind::Instructor,
            id: 4,
        };
        assert_eq!(err.to_string(), "Instructor ID 4 already exists");
    }
}
