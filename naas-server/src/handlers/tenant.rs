use naas_core::{Result, Tenant};
use tracing::{info, instrument};

use super::log_failure;
use crate::api::models::*;
use crate::state::AppState;

/// Handle create tenant
#[instrument(skip_all, fields(name = %req.name))]
pub async fn handle_create_tenant(state: &AppState, req: CreateTenantRequest) -> Result<Tenant> {
    match state.tenants.create_tenant(&req.name, req.id) {
        Ok(tenant) => {
            info!(tenant = %tenant.id, "Tenant created");
            Ok(tenant)
        }
        Err(e) => {
            log_failure(&e, "Tenant creation");
            Err(e)
        }
    }
}

/// Handle get tenant
pub async fn handle_get_tenant(state: &AppState, id: &str) -> Result<Tenant> {
    state.tenants.get_tenant(id)
}

/// Handle list tenants, sorted by name then id
pub async fn handle_list_tenants(state: &AppState) -> Result<Vec<Tenant>> {
    let mut tenants = state.tenants.list_tenants()?;
    tenants.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Ok(tenants)
}

/// Handle update tenant
#[instrument(skip_all, fields(tenant = %id))]
pub async fn handle_update_tenant(
    state: &AppState,
    id: &str,
    req: UpdateTenantRequest,
) -> Result<Tenant> {
    match state.tenants.update_tenant(id, &req.name) {
        Ok(tenant) => {
            info!(name = %tenant.name, "Tenant updated");
            Ok(tenant)
        }
        Err(e) => {
            log_failure(&e, "Tenant update");
            Err(e)
        }
    }
}

/// Handle delete tenant. Namespaces owned by the tenant are kept.
#[instrument(skip_all, fields(tenant = %id))]
pub async fn handle_delete_tenant(state: &AppState, id: &str) -> Result<DeleteResponse> {
    match state.tenants.delete_tenant(id) {
        Ok(()) => {
            info!("Tenant deleted");
            Ok(DeleteResponse::deleted("tenant"))
        }
        Err(e) => {
            log_failure(&e, "Tenant deletion");
            Err(e)
        }
    }
}
