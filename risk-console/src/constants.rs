//! Central Configuration Constants
//!
//! Single source of truth for defaults and fixed UI strings.

/// Default scoring engine URL
///
/// Fallback when `RISK_ENGINE_URL` is not set.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:8000";

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "risk_console=info";

/// Scoring endpoint path
pub const PREDICT_PATH: &str = "/predict";

/// Health probe path
pub const HEALTH_PATH: &str = "/healthz";

/// Decision value that selects the denied theme. Everything else is allowed.
pub const DENIED: &str = "DENIED";

/// Trigger label while a request is in flight
pub const LOADING_LABEL: &str = "Scanning...";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scoring engine URL from environment or use default
pub fn get_engine_url() -> String {
    std::env::var("RISK_ENGINE_URL")
        .unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("RISK_ENGINE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
