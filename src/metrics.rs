use axum::{
    Router,
    extract::Request,
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};
use tracing::error;

use crate::logging::{is_observability_enabled, route_label};

/// Install the Prometheus recorder and spawn its upkeep task.
/// Returns None if observability is disabled or the recorder can't be installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let handle = match install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            error!(error = %e, "Failed to install Prometheus recorder");
            return None;
        }
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )?
        .install_recorder()
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = route_label(&req);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router exposing `/metrics` in the Prometheus text format
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

pub fn track_account_registered(kind: &str, role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("accounts_registered_total", "kind" => kind.to_string(), "role" => role.to_string())
        .increment(1);
}

pub fn track_login_success(kind: &str, role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("logins_total", "kind" => kind.to_string(), "role" => role.to_string(), "status" => "success").increment(1);
}

pub fn track_login_failure(kind: &str, reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("logins_total", "kind" => kind.to_string(), "status" => "failure", "reason" => reason.to_string()).increment(1);
}

/// Count a request turned away by one of the gates ("session", "role", "provisioning")
pub fn track_gate_denied(gate: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("gate_denials_total", "gate" => gate).increment(1);
}

pub fn track_action_completed(action: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("actions_completed_total", "action" => action).increment(1);
}
