use std::sync::Arc;

use naas_core::{
    IdGenerator, InMemoryNamespaceStore, InMemoryTenantStore, NamespaceService, SequentialGenerator,
    TenantService, UuidGenerator,
};

use crate::config::IdStrategy;

/// Shared application state, built once in `main` and handed to every worker.
///
/// Both services share the same tenant store instance so namespace creation
/// sees the tenants created through the API.
#[derive(Clone)]
pub struct AppState {
    pub tenants: TenantService,
    pub namespaces: NamespaceService,
}

impl AppState {
    pub fn new(id_strategy: IdStrategy) -> Self {
        let (tenant_ids, namespace_ids): (Arc<dyn IdGenerator>, Arc<dyn IdGenerator>) =
            match id_strategy {
                IdStrategy::Uuid => (Arc::new(UuidGenerator), Arc::new(UuidGenerator)),
                IdStrategy::Sequential => (
                    Arc::new(SequentialGenerator::new("tenant")),
                    Arc::new(SequentialGenerator::new("ns")),
                ),
            };

        let tenant_store = Arc::new(InMemoryTenantStore::new(tenant_ids));
        let namespace_store = Arc::new(InMemoryNamespaceStore::new(namespace_ids));

        AppState {
            tenants: TenantService::new(tenant_store.clone()),
            namespaces: NamespaceService::new(namespace_store, tenant_store),
        }
    }

    /// Current (tenant count, namespace count)
    pub fn sizes(&self) -> (usize, usize) {
        (self.tenants.count(), self.namespaces.count())
    }
}
