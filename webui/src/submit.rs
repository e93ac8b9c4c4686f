//! Executes core `HttpRequest` values with ureq.
//!
//! Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
//! responses are returned as data rather than `Err`, letting the core client
//! handle status interpretation. Transport-level failures (refused
//! connection, DNS, timeout) surface as `RemoteTaskCreationFailed` with the
//! transport error text, since from the user's point of view the task was not
//! created.

use tasktrack_core::{HttpMethod, HttpRequest, HttpResponse, TranslateError};

/// Build the shared agent used for all outbound tracker calls.
///
/// TLS certificate verification is off unless `tls_verify` is set. The
/// insecure default matches the behavior the tracker deployment has always
/// relied on; `TRACKER_TLS_VERIFY=1` turns verification on.
pub fn agent(tls_verify: bool) -> ureq::Agent {
    let tls = ureq::tls::TlsConfig::builder()
        .disable_verification(!tls_verify)
        .build();
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .tls_config(tls)
        .build()
        .new_agent()
}

/// Execute an `HttpRequest` and return the response as plain data.
///
/// Blocking; callers inside the async handler run this under
/// `tokio::task::spawn_blocking`. Uses ureq's default timeouts — there is no
/// retry and no override.
pub fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, TranslateError> {
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    };

    let mut response =
        result.map_err(|e| TranslateError::RemoteTaskCreationFailed(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
