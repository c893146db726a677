use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// 1400-1499: Lookup errors
    NotFound = 1401,

    /// 1500-1599: Registry uniqueness errors
    AlreadyExists = 1502,

    /// 1700-1799: Validation errors
    ValidationFailed = 1702,

    /// 9000: Unexpected failures
    Internal = 9000,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Errors surfaced by the stores and services.
///
/// Stores produce these with a bare key; services re-wrap them with the
/// tenant they operated on. The variant never changes on the way up, so the
/// transport layer can map on [`NaasError::code`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NaasError {
    /// Lookup, update or delete target is absent
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// Duplicate key on create or rename
    #[error("{resource} already exists: {key}")]
    AlreadyExists { resource: &'static str, key: String },

    /// Name failed validation
    #[error("{message}")]
    InvalidInput { message: String },

    /// Unexpected failure, e.g. the id generator misbehaved
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl NaasError {
    pub fn not_found(resource: &'static str, key: impl Into<String>) -> Self {
        NaasError::NotFound { resource, key: key.into() }
    }

    pub fn already_exists(resource: &'static str, key: impl Into<String>) -> Self {
        NaasError::AlreadyExists { resource, key: key.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        NaasError::InvalidInput { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        NaasError::Internal { message: message.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NaasError::NotFound { .. } => ErrorCode::NotFound,
            NaasError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            NaasError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            NaasError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, NaasError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, NaasError::AlreadyExists { .. })
    }

    /// Prefix the key with the tenant it was looked up in, keeping the variant.
    pub fn in_tenant(self, tenant_id: &str) -> Self {
        match self {
            NaasError::NotFound { resource, key } => NaasError::NotFound {
                resource,
                key: format!("{}/{}", tenant_id, key),
            },
            NaasError::AlreadyExists { resource, key } => NaasError::AlreadyExists {
                resource,
                key: format!("{}/{}", tenant_id, key),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, NaasError>;
