use actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use naas_core::{ErrorCode, NaasError};
use tracing::warn;

use crate::api::models::*;
use crate::handlers::*;
use crate::metrics;
use crate::state::AppState;

// ============================================================================
// ERROR HANDLING HELPER
// ============================================================================

/// HTTP status for a registry error
pub fn status_for(err: &NaasError) -> StatusCode {
    match err.code() {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyExists => StatusCode::CONFLICT,
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_error(err: &NaasError) -> HttpResponse {
    metrics::record_error(err.code().as_str());
    HttpResponse::build(status_for(err)).json(ErrorResponse::from_error(err))
}

/// JSON extractor config that reports malformed bodies in the common error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        warn!(path = %req.path(), error = %err, "Rejected request body");
        metrics::record_error("INVALID_JSON");
        let response = HttpResponse::BadRequest().json(ErrorResponse::invalid_json(err.to_string()));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Register every route on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // ===== Monitoring =====
        .route("/health", web::get().to(health))
        .route("/metrics", web::get().to(metrics_text))
        // ===== Tenants =====
        .route("/tenants", web::post().to(create_tenant))
        .route("/tenants", web::get().to(list_tenants))
        .route("/tenants/{id}", web::get().to(get_tenant))
        .route("/tenants/{id}", web::put().to(update_tenant))
        .route("/tenants/{id}", web::delete().to(delete_tenant))
        // ===== Namespaces =====
        .route("/tenants/{tenant_id}/namespaces", web::post().to(create_namespace))
        .route("/tenants/{tenant_id}/namespaces", web::get().to(list_namespaces))
        .route("/tenants/{tenant_id}/namespaces/{name}", web::get().to(get_namespace))
        .route("/tenants/{tenant_id}/namespaces/{name}", web::put().to(update_namespace))
        .route("/tenants/{tenant_id}/namespaces/{name}", web::delete().to(delete_namespace));
}

// ============================================================================
// MONITORING
// ============================================================================

/// GET /health
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    let (tenants, namespaces) = state.sizes();
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        tenants,
        namespaces,
    })
}

/// GET /metrics - Prometheus text format
pub async fn metrics_text(state: web::Data<AppState>) -> impl Responder {
    let (tenants, namespaces) = state.sizes();
    metrics::update_registry_metrics(tenants, namespaces);
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics::encode_metrics())
}

// ============================================================================
// TENANTS
// ============================================================================

/// POST /tenants - Create a tenant
pub async fn create_tenant(
    state: web::Data<AppState>,
    req: web::Json<CreateTenantRequest>,
) -> impl Responder {
    match tenant::handle_create_tenant(&state, req.into_inner()).await {
        Ok(tenant) => HttpResponse::Created().json(tenant),
        Err(e) => handle_error(&e),
    }
}

/// GET /tenants - List all tenants
pub async fn list_tenants(state: web::Data<AppState>) -> impl Responder {
    match tenant::handle_list_tenants(&state).await {
        Ok(tenants) => HttpResponse::Ok().json(tenants),
        Err(e) => handle_error(&e),
    }
}

/// GET /tenants/{id} - Get a tenant
pub async fn get_tenant(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match tenant::handle_get_tenant(&state, &id).await {
        Ok(tenant) => HttpResponse::Ok().json(tenant),
        Err(e) => handle_error(&e),
    }
}

/// PUT /tenants/{id} - Rename a tenant
pub async fn update_tenant(
    state: web::Data<AppState>,
    id: web::Path<String>,
    req: web::Json<UpdateTenantRequest>,
) -> impl Responder {
    match tenant::handle_update_tenant(&state, &id, req.into_inner()).await {
        Ok(tenant) => HttpResponse::Ok().json(tenant),
        Err(e) => handle_error(&e),
    }
}

/// DELETE /tenants/{id} - Delete a tenant
pub async fn delete_tenant(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match tenant::handle_delete_tenant(&state, &id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_error(&e),
    }
}

// ============================================================================
// NAMESPACES
// ============================================================================

/// POST /tenants/{tenant_id}/namespaces - Create a namespace
pub async fn create_namespace(
    state: web::Data<AppState>,
    tenant_id: web::Path<String>,
    req: web::Json<CreateNamespaceRequest>,
) -> impl Responder {
    match namespace::handle_create_namespace(&state, &tenant_id, req.into_inner()).await {
        Ok(ns) => HttpResponse::Created().json(ns),
        Err(e) => handle_error(&e),
    }
}

/// GET /tenants/{tenant_id}/namespaces - List a tenant's namespaces
pub async fn list_namespaces(
    state: web::Data<AppState>,
    tenant_id: web::Path<String>,
) -> impl Responder {
    match namespace::handle_list_namespaces(&state, &tenant_id).await {
        Ok(namespaces) => HttpResponse::Ok().json(namespaces),
        Err(e) => handle_error(&e),
    }
}

/// GET /tenants/{tenant_id}/namespaces/{name} - Get a namespace
pub async fn get_namespace(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (tenant_id, name) = path.into_inner();
    match namespace::handle_get_namespace(&state, &tenant_id, &name).await {
        Ok(ns) => HttpResponse::Ok().json(ns),
        Err(e) => handle_error(&e),
    }
}

/// PUT /tenants/{tenant_id}/namespaces/{name} - Update or rename a namespace
pub async fn update_namespace(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    req: web::Json<UpdateNamespaceRequest>,
) -> impl Responder {
    let (tenant_id, name) = path.into_inner();
    match namespace::handle_update_namespace(&state, &tenant_id, &name, req.into_inner()).await {
        Ok(ns) => HttpResponse::Ok().json(ns),
        Err(e) => handle_error(&e),
    }
}

/// DELETE /tenants/{tenant_id}/namespaces/{name} - Delete a namespace
pub async fn delete_namespace(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (tenant_id, name) = path.into_inner();
    match namespace::handle_delete_namespace(&state, &tenant_id, &name).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;
    use crate::middleware::{RequestLogger, REQUEST_ID_HEADER};
    use actix_web::{test, App};
    use naas_core::{Namespace, Tenant};
    use serde_json::json;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .wrap(RequestLogger)
                    .app_data(web::Data::new(AppState::new(IdStrategy::Sequential)))
                    .app_data(json_config())
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_status_mapping() {
        assert_eq!(status_for(&NaasError::not_found("tenant", "x")), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&NaasError::already_exists("tenant", "x")), StatusCode::CONFLICT);
        assert_eq!(status_for(&NaasError::invalid_input("bad")), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&NaasError::internal("boom")), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_create_tenant_validation() {
        let app = app!();

        let cases = [
            ("", StatusCode::BAD_REQUEST),
            ("123", StatusCode::BAD_REQUEST),
            ("true", StatusCode::BAD_REQUEST),
            ("a b", StatusCode::BAD_REQUEST),
            ("JohnDoe", StatusCode::CREATED),
        ];
        for (name, expected) in cases {
            let req = test::TestRequest::post()
                .uri("/tenants")
                .set_json(json!({ "name": name }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected, "name {:?}", name);

            if expected == StatusCode::CREATED {
                let tenant: Tenant = test::read_body_json(resp).await;
                assert_eq!(tenant.id, "tenant-1");
                assert_eq!(tenant.name, "JohnDoe");
            } else {
                let body: ErrorResponse = test::read_body_json(resp).await;
                assert_eq!(body.code, "VALIDATION_FAILED");
            }
        }
    }

    #[actix_web::test]
    async fn test_create_tenant_with_duplicate_id() {
        let app = app!();

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/tenants")
                .set_json(json!({ "name": "TestTenant", "id": "test-tenant" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }

        let req = test::TestRequest::get().uri("/tenants/test-tenant").to_request();
        let tenant: Tenant = test::call_and_read_body_json(&app, req).await;
        assert_eq!(tenant.name, "TestTenant");
    }

    #[actix_web::test]
    async fn test_malformed_body() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/tenants")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, "INVALID_JSON");
    }

    #[actix_web::test]
    async fn test_tenant_crud() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/tenants")
            .set_json(json!({ "name": "Acme" }))
            .to_request();
        let created: Tenant = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri(&format!("/tenants/{}", created.id)).to_request();
        let fetched: Tenant = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::put()
            .uri(&format!("/tenants/{}", created.id))
            .set_json(json!({ "name": "AcmeCorp" }))
            .to_request();
        let updated: Tenant = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "AcmeCorp");

        let req = test::TestRequest::get().uri("/tenants").to_request();
        let all: Vec<Tenant> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 1);

        let req = test::TestRequest::delete().uri(&format!("/tenants/{}", created.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        for req in [
            test::TestRequest::get().uri(&format!("/tenants/{}", created.id)).to_request(),
            test::TestRequest::delete().uri(&format!("/tenants/{}", created.id)).to_request(),
            test::TestRequest::put()
                .uri(&format!("/tenants/{}", created.id))
                .set_json(json!({ "name": "Ghost" }))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn test_namespace_end_to_end() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/tenants")
            .set_json(json!({ "name": "JohnDoe" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
        let tenant: Tenant = test::read_body_json(resp).await;
        assert!(!tenant.id.is_empty());

        let uri = format!("/tenants/{}/namespaces", tenant.id);
        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri(&uri)
                .set_json(json!({ "name": "ns1" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }

        let req = test::TestRequest::get().uri(&uri).to_request();
        let all: Vec<Namespace> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "ns1");
        assert_eq!(all[0].tenant_id, tenant.id);
    }

    #[actix_web::test]
    async fn test_namespace_under_unknown_tenant() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/tenants/ghost/namespaces")
            .set_json(json!({ "name": "ns1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/tenants/ghost/namespaces").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_namespace_rename_and_delete() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/tenants")
            .set_json(json!({ "name": "Acme", "id": "acme" }))
            .to_request();
        test::call_service(&app, req).await;
        for name in ["alpha", "gamma"] {
            let req = test::TestRequest::post()
                .uri("/tenants/acme/namespaces")
                .set_json(json!({ "name": name }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::put()
            .uri("/tenants/acme/namespaces/alpha")
            .set_json(json!({ "name": "beta" }))
            .to_request();
        let renamed: Namespace = test::call_and_read_body_json(&app, req).await;
        assert_eq!(renamed.name, "beta");

        let req = test::TestRequest::put()
            .uri("/tenants/acme/namespaces/beta")
            .set_json(json!({ "name": "gamma" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get().uri("/tenants/acme/namespaces/alpha").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/tenants/acme/namespaces/beta").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/tenants/acme/namespaces").to_request();
        let all: Vec<Namespace> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "gamma");
    }

    #[actix_web::test]
    async fn test_health_and_metrics() {
        crate::metrics::init_metrics();
        let app = app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let health: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.tenants, 0);

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("naas_requests_total"));
    }
}
