use std::sync::Once;

use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref METRICS_REGISTRY: Registry = Registry::new();

    // Counters
    pub static ref TOTAL_REQUESTS: IntCounter = IntCounter::new("naas_requests_total", "Total HTTP requests").expect("counter creation");
    pub static ref TOTAL_ERRORS: IntCounterVec = IntCounterVec::new(
        Opts::new("naas_errors_total", "Failed requests by error code"),
        &["code"],
    ).expect("counter creation");

    // Gauges
    pub static ref TENANT_COUNT: IntGauge = IntGauge::new("naas_tenants", "Number of registered tenants").expect("gauge creation");
    pub static ref NAMESPACE_COUNT: IntGauge = IntGauge::new("naas_namespaces", "Number of namespaces across all tenants").expect("gauge creation");
}

static REGISTER: Once = Once::new();

pub fn init_metrics() {
    REGISTER.call_once(|| {
        METRICS_REGISTRY
            .register(Box::new(TOTAL_REQUESTS.clone()))
            .expect("register");
        METRICS_REGISTRY
            .register(Box::new(TOTAL_ERRORS.clone()))
            .expect("register");
        METRICS_REGISTRY
            .register(Box::new(TENANT_COUNT.clone()))
            .expect("register");
        METRICS_REGISTRY
            .register(Box::new(NAMESPACE_COUNT.clone()))
            .expect("register");
    });
}

pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    let _ = encoder.encode(&METRICS_REGISTRY.gather(), &mut buffer);
    String::from_utf8(buffer).unwrap_or_else(|_| "# ERROR encoding metrics\n".to_string())
}

/// Refresh registry size gauges
pub fn update_registry_metrics(tenants: usize, namespaces: usize) {
    TENANT_COUNT.set(tenants as i64);
    NAMESPACE_COUNT.set(namespaces as i64);
}

pub fn record_error(code: &str) {
    TOTAL_ERRORS.with_label_values(&[code]).inc();
}
