// ============================================================================
// CORE TYPES & UTILITIES
// ============================================================================
pub mod core;
pub mod ids;
pub mod validation;

// ============================================================================
// RECORDS & STORAGE
// ============================================================================
pub mod multitenancy;
pub mod store;

// ============================================================================
// SERVICES
// ============================================================================
pub mod service;

// Re-export commonly used types
pub use self::core::{ErrorCode, NaasError, Result};
pub use ids::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use multitenancy::{Namespace, Tenant};
pub use service::{NamespaceService, TenantService};
pub use store::{InMemoryNamespaceStore, InMemoryTenantStore, NamespaceStore, TenantStore};
pub use validation::validate_name;
