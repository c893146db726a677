/// Multi-tenancy records
///
/// Tenants own namespaces. Both are plain data; the stores enforce
/// uniqueness and the services enforce naming rules.

pub mod tenant;
pub mod namespace;

pub use tenant::Tenant;
pub use namespace::Namespace;
