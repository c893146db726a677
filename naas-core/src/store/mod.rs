/// In-memory registry stores
///
/// Each store owns its map(s) behind a single `parking_lot::RwLock`.
/// Reads share the lock, writes take it exclusively, and nothing that can
/// call back into user code (id generation, clocks) runs while it is held.

pub mod tenant;
pub mod namespace;

pub use tenant::{InMemoryTenantStore, TenantStore};
pub use namespace::{InMemoryNamespaceStore, NamespaceStore};

use crate::core::errors::{NaasError, Result};
use crate::ids::IdGenerator;

/// Ask the generator for an id, rejecting an empty answer.
pub(crate) fn generate_id(ids: &dyn IdGenerator, resource: &str) -> Result<String> {
    let id = ids.next_id();
    if id.is_empty() {
        return Err(NaasError::internal(format!(
            "id generator produced an empty {} id",
            resource
        )));
    }
    Ok(id)
}
