/// Namespace records
///
/// Namespaces provide logical grouping within a tenant. They are addressed by
/// the pair (tenant id, name); `id` is a surrogate kept for correlation only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    #[serde(default)]
    pub id: String,
    /// Unique within the owning tenant
    pub name: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub updated_at: u64,
}

impl Namespace {
    pub fn new(tenant_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            tenant_id: tenant_id.into(),
            created_at: 0,
            updated_at: 0,
        }
    }
}
