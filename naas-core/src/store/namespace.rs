/// Namespace store
///
/// Namespaces are partitioned by tenant id and keyed by name inside each
/// partition. Both levels sit under one lock, so a partition is either fully
/// present or absent to every reader.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::core::errors::{NaasError, Result};
use crate::core::now_secs;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::multitenancy::Namespace;
use crate::store::generate_id;

const RESOURCE: &str = "namespace";

/// Persistence contract for namespaces, keyed by (tenant id, name).
///
/// The store does not check that the tenant exists; callers do.
pub trait NamespaceStore: Send + Sync {
    /// Insert under `tenant_id`, creating the partition on first use.
    fn create(&self, tenant_id: &str, namespace: Namespace) -> Result<Namespace>;

    fn get(&self, tenant_id: &str, name: &str) -> Result<Namespace>;

    /// All namespaces of a tenant. `NotFound` if the tenant never had a partition.
    fn get_all(&self, tenant_id: &str) -> Result<Vec<Namespace>>;

    /// Replace the namespace stored under `(namespace.tenant_id, namespace.name)`.
    fn update(&self, namespace: Namespace) -> Result<Namespace>;

    fn delete(&self, tenant_id: &str, name: &str) -> Result<()>;

    /// Move a namespace to a new name within the same tenant.
    fn rename(&self, tenant_id: &str, from: &str, to: &str) -> Result<Namespace>;

    /// Total number of namespaces across all tenants.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Partitions = HashMap<String, HashMap<String, Namespace>>;

pub struct InMemoryNamespaceStore {
    namespaces: RwLock<Partitions>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryNamespaceStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        InMemoryNamespaceStore {
            namespaces: RwLock::new(HashMap::new()),
            ids,
        }
    }
}

impl Default for InMemoryNamespaceStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

impl NamespaceStore for InMemoryNamespaceStore {
    fn create(&self, tenant_id: &str, mut namespace: Namespace) -> Result<Namespace> {
        namespace.tenant_id = tenant_id.to_string();
        if namespace.id.is_empty() {
            namespace.id = generate_id(self.ids.as_ref(), RESOURCE)?;
        }
        let now = now_secs();
        if namespace.created_at == 0 {
            namespace.created_at = now;
        }
        if namespace.updated_at == 0 {
            namespace.updated_at = namespace.created_at;
        }

        let mut partitions = self.namespaces.write();
        let partition = partitions.entry(tenant_id.to_string()).or_default();
        if partition.contains_key(&namespace.name) {
            return Err(NaasError::already_exists(RESOURCE, namespace.name));
        }
        partition.insert(namespace.name.clone(), namespace.clone());
        drop(partitions);

        debug!(tenant_id = %tenant_id, name = %namespace.name, "namespace stored");
        Ok(namespace)
    }

    fn get(&self, tenant_id: &str, name: &str) -> Result<Namespace> {
        self.namespaces
            .read()
            .get(tenant_id)
            .and_then(|partition| partition.get(name))
            .cloned()
            .ok_or_else(|| NaasError::not_found(RESOURCE, name))
    }

    fn get_all(&self, tenant_id: &str) -> Result<Vec<Namespace>> {
        self.namespaces
            .read()
            .get(tenant_id)
            .map(|partition| partition.values().cloned().collect())
            .ok_or_else(|| NaasError::not_found("namespaces for tenant", tenant_id))
    }

    fn update(&self, mut namespace: Namespace) -> Result<Namespace> {
        let now = now_secs();

        let mut partitions = self.namespaces.write();
        let existing = partitions
            .get_mut(&namespace.tenant_id)
            .and_then(|partition| partition.get_mut(&namespace.name))
            .ok_or_else(|| NaasError::not_found(RESOURCE, namespace.name.as_str()))?;
        namespace.id = existing.id.clone();
        namespace.created_at = existing.created_at;
        namespace.updated_at = now.max(existing.updated_at);
        *existing = namespace.clone();

        Ok(namespace)
    }

    fn delete(&self, tenant_id: &str, name: &str) -> Result<()> {
        self.namespaces
            .write()
            .get_mut(tenant_id)
            .and_then(|partition| partition.remove(name))
            .map(|_| ())
            .ok_or_else(|| NaasError::not_found(RESOURCE, name))
    }

    fn rename(&self, tenant_id: &str, from: &str, to: &str) -> Result<Namespace> {
        let now = now_secs();

        let mut partitions = self.namespaces.write();
        let partition = partitions
            .get_mut(tenant_id)
            .filter(|partition| partition.contains_key(from))
            .ok_or_else(|| NaasError::not_found(RESOURCE, from))?;
        if from == to {
            return partition
                .get(from)
                .cloned()
                .ok_or_else(|| NaasError::not_found(RESOURCE, from));
        }
        if partition.contains_key(to) {
            return Err(NaasError::already_exists(RESOURCE, to));
        }

        let mut namespace = partition
            .remove(from)
            .ok_or_else(|| NaasError::not_found(RESOURCE, from))?;
        namespace.name = to.to_string();
        namespace.updated_at = now.max(namespace.updated_at);
        partition.insert(to.to_string(), namespace.clone());

        Ok(namespace)
    }

    fn len(&self) -> usize {
        self.namespaces.read().values().map(HashMap::len).sum()
    }
}
