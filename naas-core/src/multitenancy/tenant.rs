/// Tenant records
///
/// A tenant is the top-level owner in the registry. Its id is either supplied
/// by the caller or minted by the store on create.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique across the tenant store; empty until the store assigns one
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Unix seconds; 0 means "not yet stamped"
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub updated_at: u64,
}

impl Tenant {
    /// New tenant whose id will be generated by the store
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// New tenant with a caller-chosen id
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new(name)
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
