//! HTTP 传输模块：构建调优的 reqwest 客户端并统一处理响应状态。
//!
//! Shared HTTP plumbing for the provider clients: one tuned `reqwest::Client`
//! constructor and one send-and-decode helper that turns non-2xx responses
//! into [`Error::Remote`] with the body text preserved. There is no retry or
//! fallback here; each call is one round trip.

use reqwest::Proxy;
use serde::de::DeserializeOwned;
use std::env;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{Error, Result};

/// Correlation id header attached to every outbound request. Providers may
/// ignore it; applications can use it to link logs to provider-side traces.
pub const CLIENT_REQUEST_ID_HEADER: &str = "x-client-request-id";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

/// Build the tuned HTTP client shared by all providers.
///
/// Minimal production-friendly defaults, env-overridable:
/// `GENPROMPT_HTTP_TIMEOUT_SECS`, `GENPROMPT_HTTP_POOL_MAX_IDLE_PER_HOST`,
/// `GENPROMPT_HTTP_POOL_IDLE_TIMEOUT_SECS`, `GENPROMPT_PROXY_URL`.
pub fn build_http_client() -> Result<reqwest::Client> {
    let timeout_secs = env_u64("GENPROMPT_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

    let mut builder = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_max_idle_per_host(
            env_u64("GENPROMPT_HTTP_POOL_MAX_IDLE_PER_HOST", 32) as usize,
        )
        .pool_idle_timeout(Some(Duration::from_secs(env_u64(
            "GENPROMPT_HTTP_POOL_IDLE_TIMEOUT_SECS",
            90,
        ))))
        // Conservative HTTP/2 keepalive defaults for long-lived connections.
        .http2_adaptive_window(true)
        .http2_keep_alive_interval(Some(Duration::from_secs(30)))
        .http2_keep_alive_timeout(Duration::from_secs(10));

    if let Ok(proxy_url) = env::var("GENPROMPT_PROXY_URL") {
        if let Ok(proxy) = Proxy::all(&proxy_url) {
            builder = builder.proxy(proxy);
        }
    }

    Ok(builder.build()?)
}

/// Send a prepared request and decode the JSON body.
///
/// Attaches a fresh correlation id, times the round trip, and logs the
/// outcome with structured fields. Non-2xx responses become
/// [`Error::Remote`] carrying the status and the raw body text.
pub async fn execute_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    endpoint: &str,
) -> Result<T> {
    let client_request_id = Uuid::new_v4().to_string();
    let start = Instant::now();

    let response = request
        .header(CLIENT_REQUEST_ID_HEADER, &client_request_id)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        info!(
            http_status = status.as_u16(),
            endpoint,
            duration_ms = start.elapsed().as_millis(),
            client_request_id = client_request_id.as_str(),
            "genprompt request failed"
        );
        return Err(Error::remote(status.as_u16(), body));
    }

    debug!(
        http_status = status.as_u16(),
        endpoint,
        duration_ms = start.elapsed().as_millis(),
        client_request_id = client_request_id.as_str(),
        "genprompt request completed"
    );

    Ok(response.json::<T>().await?)
}
