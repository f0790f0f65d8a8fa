//! HTTP handlers for the CI/CD demo service.
//!
//! Every endpoint is read-only: each handler builds a fresh JSON object from
//! constants and two process-level values (the `ENVIRONMENT` variable and the
//! machine hostname) and has no error path.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::env;

/// Service identifier reported by the probe endpoints. Pipeline dashboards
/// and deployment checks key on this exact string.
pub const SERVICE_NAME: &str = "fastapi-cicd";

pub const APP_NAME: &str = "FastAPI CI/CD Demo";

/// Static runtime descriptor, not a toolchain probe.
pub const RUNTIME_VERSION: &str = "rust 1.80+";

/// `ENVIRONMENT` is read on every request, never cached at startup.
fn environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Machine hostname, resolved at call time.
fn current_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Root endpoint.
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Welcome to FastAPI CI/CD Pipeline!",
            "status": "running",
            "environment": environment(),
            "hostname": current_hostname(),
        })),
    )
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": SERVICE_NAME,
            "hostname": current_hostname(),
        })),
    )
}

/// Readiness check endpoint for K8s readiness probes.
pub async fn readiness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ready", "service": SERVICE_NAME })),
    )
}

/// Application information endpoint.
pub async fn app_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "app_name": APP_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "environment": environment(),
            "hostname": current_hostname(),
            "runtime_version": RUNTIME_VERSION,
        })),
    )
}
