use std::sync::Arc;

use tracing::{debug, info};

use crate::core::errors::Result;
use crate::multitenancy::Tenant;
use crate::store::TenantStore;
use crate::validation::validate_name;

#[derive(Clone)]
pub struct TenantService {
    store: Arc<dyn TenantStore>,
}

impl TenantService {
    pub fn new(store: Arc<dyn TenantStore>) -> Self {
        Self { store }
    }

    /// Create a tenant, generating its id unless one is supplied.
    pub fn create_tenant(&self, name: &str, id: Option<String>) -> Result<Tenant> {
        validate_name(name)?;

        let tenant = match id {
            Some(id) if !id.is_empty() => Tenant::with_id(id, name),
            _ => Tenant::new(name),
        };
        let tenant = self.store.create(tenant)?;
        info!(tenant_id = %tenant.id, name = %tenant.name, "tenant created");
        Ok(tenant)
    }

    pub fn get_tenant(&self, id: &str) -> Result<Tenant> {
        self.store.get(id)
    }

    pub fn list_tenants(&self) -> Result<Vec<Tenant>> {
        self.store.list()
    }

    pub fn tenant_exists(&self, id: &str) -> bool {
        self.store.get(id).is_ok()
    }

    /// Rename a tenant; the id never changes.
    pub fn update_tenant(&self, id: &str, name: &str) -> Result<Tenant> {
        validate_name(name)?;

        let current = self.store.get(id)?;
        let tenant = self.store.update(Tenant {
            name: name.to_string(),
            ..current
        })?;
        debug!(tenant_id = %id, name = %name, "tenant updated");
        Ok(tenant)
    }

    /// Remove a tenant. Its namespaces are left in place.
    pub fn delete_tenant(&self, id: &str) -> Result<()> {
        self.store.delete(id)?;
        info!(tenant_id = %id, "tenant deleted");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}
