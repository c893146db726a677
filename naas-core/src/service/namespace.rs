use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::errors::Result;
use crate::multitenancy::Namespace;
use crate::service::TenantService;
use crate::store::{NamespaceStore, TenantStore};
use crate::validation::validate_name;

/// Namespace operations scoped to a tenant.
///
/// Holds the tenant service only to check that a tenant exists before creating
/// a namespace under it. That check and the insert are separate lock scopes:
/// a tenant deleted in between still ends up owning the new namespace.
#[derive(Clone)]
pub struct NamespaceService {
    namespaces: Arc<dyn NamespaceStore>,
    tenants: TenantService,
}

impl NamespaceService {
    pub fn new(namespaces: Arc<dyn NamespaceStore>, tenants: Arc<dyn TenantStore>) -> Self {
        Self {
            namespaces,
            tenants: TenantService::new(tenants),
        }
    }

    pub fn create_namespace(&self, tenant_id: &str, name: &str) -> Result<Namespace> {
        validate_name(name)?;
        self.tenants.get_tenant(tenant_id)?;

        let namespace = self
            .namespaces
            .create(tenant_id, Namespace::new(tenant_id, name))
            .map_err(|e| e.in_tenant(tenant_id))?;
        info!(tenant_id = %tenant_id, name = %name, id = %namespace.id, "namespace created");
        Ok(namespace)
    }

    pub fn get_namespace(&self, tenant_id: &str, name: &str) -> Result<Namespace> {
        self.namespaces
            .get(tenant_id, name)
            .map_err(|e| e.in_tenant(tenant_id))
    }

    /// All namespaces of a tenant, sorted by name.
    pub fn list_namespaces(&self, tenant_id: &str) -> Result<Vec<Namespace>> {
        let mut namespaces = self.namespaces.get_all(tenant_id)?;
        namespaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(namespaces)
    }

    /// Update the namespace `(tenant_id, name)`, renaming it when `new_name`
    /// differs.
    pub fn update_namespace(&self, tenant_id: &str, name: &str, new_name: &str) -> Result<Namespace> {
        validate_name(new_name)?;

        let result = if name == new_name {
            self.namespaces.update(Namespace::new(tenant_id, name))
        } else {
            self.namespaces.rename(tenant_id, name, new_name)
        };
        let namespace = result.map_err(|e| e.in_tenant(tenant_id))?;
        debug!(tenant_id = %tenant_id, from = %name, to = %new_name, "namespace updated");
        Ok(namespace)
    }

    pub fn delete_namespace(&self, tenant_id: &str, name: &str) -> Result<()> {
        self.namespaces
            .delete(tenant_id, name)
            .map_err(|e| e.in_tenant(tenant_id))?;
        if !self.tenants.tenant_exists(tenant_id) {
            warn!(tenant_id = %tenant_id, name = %name, "deleted namespace of an unknown tenant");
        }
        info!(tenant_id = %tenant_id, name = %name, "namespace deleted");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.namespaces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::NaasError;
    use crate::ids::SequentialGenerator;
    use crate::multitenancy::Tenant;
    use crate::store::{InMemoryNamespaceStore, InMemoryTenantStore};

    fn setup() -> (NamespaceService, Arc<InMemoryTenantStore>) {
        let tenants = Arc::new(InMemoryTenantStore::new(Arc::new(SequentialGenerator::new("t"))));
        let namespaces = Arc::new(InMemoryNamespaceStore::new(Arc::new(SequentialGenerator::new("ns"))));
        tenants.create(Tenant::with_id("test-tenant", "TestTenant")).unwrap();
        (NamespaceService::new(namespaces, tenants.clone()), tenants)
    }

    #[test]
    fn test_create_namespace() {
        let (service, _) = setup();
        let ns = service.create_namespace("test-tenant", "testNamespace").unwrap();
        assert_eq!(ns.tenant_id, "test-tenant");
        assert_eq!(ns.name, "testNamespace");

        let err = service.create_namespace("test-tenant", "testNamespace").unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(err.to_string(), "namespace already exists: test-tenant/testNamespace");
    }

    #[test]
    fn test_create_namespace_unknown_tenant() {
        let (service, _) = setup();
        let err = service.create_namespace("ghost", "ns1").unwrap_err();
        assert_eq!(err, NaasError::not_found("tenant", "ghost"));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_create_namespace_invalid_name() {
        let (service, _) = setup();
        for name in ["", "1ns", "false", "my ns"] {
            let err = service.create_namespace("test-tenant", name).unwrap_err();
            assert!(matches!(err, NaasError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_list_namespaces() {
        let (service, _) = setup();
        for name in ["nsTwo", "nsOne", "nsThree"] {
            service.create_namespace("test-tenant", name).unwrap();
        }
        let names: Vec<String> = service
            .list_namespaces("test-tenant")
            .unwrap()
            .into_iter()
            .map(|ns| ns.name)
            .collect();
        assert_eq!(names, vec!["nsOne", "nsThree", "nsTwo"]);

        let err = service.list_namespaces("non-existent-tenant").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_namespace() {
        let (service, _) = setup();
        let created = service.create_namespace("test-tenant", "alpha").unwrap();
        assert_eq!(service.get_namespace("test-tenant", "alpha").unwrap(), created);

        let err = service.get_namespace("test-tenant", "beta").unwrap_err();
        assert_eq!(err.to_string(), "namespace not found: test-tenant/beta");
        assert!(service.get_namespace("non-existent-tenant", "alpha").unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_namespace() {
        let (service, _) = setup();
        let created = service.create_namespace("test-tenant", "alpha").unwrap();

        let same = service.update_namespace("test-tenant", "alpha", "alpha").unwrap();
        assert_eq!(same.id, created.id);

        let renamed = service.update_namespace("test-tenant", "alpha", "beta").unwrap();
        assert_eq!(renamed.name, "beta");
        assert!(service.get_namespace("test-tenant", "alpha").unwrap_err().is_not_found());

        assert!(matches!(
            service.update_namespace("test-tenant", "beta", "b e t a").unwrap_err(),
            NaasError::InvalidInput { .. }
        ));
        assert!(service.update_namespace("test-tenant", "alpha", "gamma").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_namespace() {
        let (service, _) = setup();
        service.create_namespace("test-tenant", "alpha").unwrap();
        service.delete_namespace("test-tenant", "alpha").unwrap();
        assert!(service.delete_namespace("test-tenant", "alpha").unwrap_err().is_not_found());
    }

    #[test]
    fn test_tenant_delete_does_not_cascade() {
        let (service, tenants) = setup();
        service.create_namespace("test-tenant", "alpha").unwrap();
        tenants.delete("test-tenant").unwrap();

        assert!(service.get_namespace("test-tenant", "alpha").is_ok());
        assert!(service.create_namespace("test-tenant", "beta").unwrap_err().is_not_found());
        service.delete_namespace("test-tenant", "alpha").unwrap();
    }

    #[test]
    fn test_sees_tenants_created_through_shared_store() {
        let (service, tenants) = setup();
        assert!(service.create_namespace("late", "alpha").unwrap_err().is_not_found());

        tenants.create(Tenant::with_id("late", "LateTenant")).unwrap();
        let ns = service.create_namespace("late", "alpha").unwrap();
        assert_eq!(ns.tenant_id, "late");
    }
}
