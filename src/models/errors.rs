//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so it can be grepped in the
//! request logs and mapped to an HTTP status in one place.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - FORM_xxx: Contact form errors
//! - API_xxx: API errors
//! - CFG_xxx: Configuration errors
//! - IO_xxx: Filesystem errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Contact Form Errors (1xx)
    // ============================================
    /// A required field was left empty
    FormMissingField,
    /// Submit pressed while a submission is still in flight
    FormAlreadySubmitting,
    /// Completion requested without a pending submission
    FormNotSubmitting,

    // ============================================
    // API Errors (3xx)
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Rate limit exceeded
    ApiRateLimited,
    /// Resource not found
    ApiNotFound,

    // ============================================
    // Configuration Errors (4xx)
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Filesystem Errors (5xx)
    // ============================================
    /// Reading or writing a file failed
    IoFailed,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            // Contact Form Errors
            Self::FormMissingField => "FORM_MISSING_FIELD",
            Self::FormAlreadySubmitting => "FORM_ALREADY_SUBMITTING",
            Self::FormNotSubmitting => "FORM_NOT_SUBMITTING",

            // API Errors
            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiRateLimited => "API_RATE_LIMITED",
            Self::ApiNotFound => "API_NOT_FOUND",

            // Configuration Errors
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            // Filesystem Errors
            Self::IoFailed => "IO_FAILED",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest | Self::ConfigInvalidValue => 400,
            Self::ApiNotFound => 404,
            Self::FormAlreadySubmitting | Self::FormNotSubmitting => 409,
            Self::FormMissingField => 422,
            Self::ApiRateLimited => 429,
            Self::IoFailed => 500,
        }
    }

    /// Check if the caller can simply try again later
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ApiRateLimited | Self::FormAlreadySubmitting)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Required contact field left empty
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::FormMissingField,
            format!("Please fill out the {} field", field),
        )
    }

    /// Submit while already submitting
    pub fn already_submitting() -> Self {
        Self::new(
            ErrorCode::FormAlreadySubmitting,
            "A message is already being sent",
        )
    }

    /// Completion without a pending submission
    pub fn not_submitting() -> Self {
        Self::new(ErrorCode::FormNotSubmitting, "No message is being sent")
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }

    /// Resource not found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiNotFound, msg)
    }

    /// Rate limited
    pub fn rate_limited(retry_after: u64) -> Self {
        Self::new(
            ErrorCode::ApiRateLimited,
            format!("Rate limit exceeded. Retry after {} seconds", retry_after),
        )
    }

    /// Invalid configuration value
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {:?}", key, value),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from std errors
// ============================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::IoFailed, "IO error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::missing_field("email");
        assert_eq!(err.code, ErrorCode::FormMissingField);
        assert_eq!(err.code_str(), "FORM_MISSING_FIELD");
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorCode::ApiRateLimited.is_retryable());
        assert!(ErrorCode::FormAlreadySubmitting.is_retryable());
        assert!(!ErrorCode::FormMissingField.is_retryable());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::ApiBadRequest.http_status(), 400);
        assert_eq!(ErrorCode::FormMissingField.http_status(), 422);
        assert_eq!(ErrorCode::ApiRateLimited.http_status(), 429);
        assert_eq!(ErrorCode::IoFailed.http_status(), 500);
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert_eq!(err.code, ErrorCode::IoFailed);
        assert!(std::error::Error::source(&err).is_some());
    }
}
