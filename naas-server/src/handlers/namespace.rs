use naas_core::{Namespace, Result};
use tracing::{info, instrument};

use super::log_failure;
use crate::api::models::*;
use crate::state::AppState;

/// Handle create namespace with tenant isolation
#[instrument(skip_all, fields(tenant = %tenant_id, name = %req.name))]
pub async fn handle_create_namespace(
    state: &AppState,
    tenant_id: &str,
    req: CreateNamespaceRequest,
) -> Result<Namespace> {
    match state.namespaces.create_namespace(tenant_id, &req.name) {
        Ok(namespace) => {
            info!(id = %namespace.id, "Namespace created");
            Ok(namespace)
        }
        Err(e) => {
            log_failure(&e, "Namespace creation");
            Err(e)
        }
    }
}

/// Handle get namespace with tenant isolation
pub async fn handle_get_namespace(state: &AppState, tenant_id: &str, name: &str) -> Result<Namespace> {
    state.namespaces.get_namespace(tenant_id, name)
}

/// Handle list namespaces of a tenant
pub async fn handle_list_namespaces(state: &AppState, tenant_id: &str) -> Result<Vec<Namespace>> {
    state.namespaces.list_namespaces(tenant_id)
}

/// Handle update (or rename) namespace with tenant isolation
#[instrument(skip_all, fields(tenant = %tenant_id, name = %name))]
pub async fn handle_update_namespace(
    state: &AppState,
    tenant_id: &str,
    name: &str,
    req: UpdateNamespaceRequest,
) -> Result<Namespace> {
    match state.namespaces.update_namespace(tenant_id, name, &req.name) {
        Ok(namespace) => {
            info!(new_name = %namespace.name, "Namespace updated");
            Ok(namespace)
        }
        Err(e) => {
            log_failure(&e, "Namespace update");
            Err(e)
        }
    }
}

/// Handle delete namespace with tenant isolation
#[instrument(skip_all, fields(tenant = %tenant_id, name = %name))]
pub async fn handle_delete_namespace(
    state: &AppState,
    tenant_id: &str,
    name: &str,
) -> Result<DeleteResponse> {
    match state.namespaces.delete_namespace(tenant_id, name) {
        Ok(()) => {
            info!("Namespace deleted");
            Ok(DeleteResponse::deleted("namespace"))
        }
        Err(e) => {
            log_failure(&e, "Namespace deletion");
            Err(e)
        }
    }
}
