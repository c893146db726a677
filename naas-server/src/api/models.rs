use serde::{Deserialize, Serialize};

use naas_core::NaasError;

// ============================================================================
// TENANTS
// ============================================================================

/// Create tenant request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenantRequest {
    pub name: String,
    /// Caller-chosen id; generated when absent
    #[serde(default)]
    pub id: Option<String>,
}

/// Update tenant request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTenantRequest {
    pub name: String,
}

// ============================================================================
// NAMESPACES
// ============================================================================

/// Create namespace request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNamespaceRequest {
    pub name: String,
}

/// Update namespace request; a different `name` renames the namespace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNamespaceRequest {
    pub name: String,
}

// ============================================================================
// GENERIC RESPONSES
// ============================================================================

/// Delete response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted(resource: &str) -> Self {
        DeleteResponse {
            message: format!("{} deleted", resource),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub tenants: usize,
    pub namespaces: usize,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable code, e.g. "NOT_FOUND"
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn from_error(err: &NaasError) -> Self {
        Self::new(err.to_string(), err.code().as_str())
    }

    pub fn invalid_json(problem: impl Into<String>) -> Self {
        Self::new(problem, "INVALID_JSON")
    }
}
