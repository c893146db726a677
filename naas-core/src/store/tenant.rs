/// Tenant store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::core::errors::{NaasError, Result};
use crate::core::now_secs;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::multitenancy::Tenant;
use crate::store::generate_id;

const RESOURCE: &str = "tenant";

/// Persistence contract for tenants, keyed by tenant id.
pub trait TenantStore: Send + Sync {
    /// Insert a tenant. An empty `id` is replaced by a generated one; a
    /// supplied id that is already taken fails with `AlreadyExists`.
    fn create(&self, tenant: Tenant) -> Result<Tenant>;

    fn get(&self, id: &str) -> Result<Tenant>;

    /// Replace the tenant stored under `tenant.id`.
    fn update(&self, tenant: Tenant) -> Result<Tenant>;

    fn delete(&self, id: &str) -> Result<()>;

    /// Snapshot of all tenants, in no particular order.
    fn list(&self) -> Result<Vec<Tenant>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct InMemoryTenantStore {
    tenants: RwLock<HashMap<String, Tenant>>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryTenantStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        InMemoryTenantStore {
            tenants: RwLock::new(HashMap::new()),
            ids,
        }
    }
}

impl Default for InMemoryTenantStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

impl TenantStore for InMemoryTenantStore {
    fn create(&self, mut tenant: Tenant) -> Result<Tenant> {
        if !tenant.has_id() {
            tenant.id = generate_id(self.ids.as_ref(), RESOURCE)?;
        }
        let now = now_secs();
        if tenant.created_at == 0 {
            tenant.created_at = now;
        }
        if tenant.updated_at == 0 {
            tenant.updated_at = tenant.created_at;
        }

        let mut tenants = self.tenants.write();
        if tenants.contains_key(&tenant.id) {
            return Err(NaasError::already_exists(RESOURCE, tenant.id));
        }
        tenants.insert(tenant.id.clone(), tenant.clone());
        drop(tenants);

        debug!(tenant_id = %tenant.id, "tenant stored");
        Ok(tenant)
    }

    fn get(&self, id: &str) -> Result<Tenant> {
        self.tenants
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| NaasError::not_found(RESOURCE, id))
    }

    fn update(&self, mut tenant: Tenant) -> Result<Tenant> {
        let now = now_secs();

        let mut tenants = self.tenants.write();
        let existing = tenants
            .get_mut(&tenant.id)
            .ok_or_else(|| NaasError::not_found(RESOURCE, tenant.id.as_str()))?;
        tenant.created_at = existing.created_at;
        tenant.updated_at = now.max(existing.updated_at);
        *existing = tenant.clone();

        Ok(tenant)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.tenants
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| NaasError::not_found(RESOURCE, id))
    }

    fn list(&self) -> Result<Vec<Tenant>> {
        Ok(self.tenants.read().values().cloned().collect())
    }

    fn len(&self) -> usize {
        self.tenants.read().len()
    }
}
