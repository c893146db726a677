/// Service layer
///
/// Composes validation with store calls. Services own nothing but handles to
/// the stores; every error a store returns is passed up with its kind intact.

pub mod tenant;
pub mod namespace;

pub use tenant::TenantService;
pub use namespace::NamespaceService;
