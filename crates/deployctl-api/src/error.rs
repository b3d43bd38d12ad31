use thiserror::Error;

/// How much of an error response body is kept for diagnostics.
const BODY_PREVIEW_LEN: usize = 500;

/// Top-level error type for the `deployctl-api` crate.
///
/// Covers every failure mode of the inventory client: transport, API
/// status errors, decode failures, patch construction, and cancellation.
/// The CLI maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response from the inventory service.
    #[error("API error (HTTP {status}) on {method} {url}: {message}")]
    Api {
        status: u16,
        method: String,
        url: String,
        message: String,
    },

    /// 404 from the inventory service, split out because callers
    /// commonly branch on it.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// 401/403 after the single token-refresh attempt (or with no
    /// refresher registered).
    #[error("authentication rejected (HTTP {status})")]
    AuthFailed { status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body not decodable under the expected shape.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Update descriptor cannot be turned into `{op, path, value}`
    /// entries (not a record shape).
    #[error("malformed patch descriptor: {0}")]
    MalformedPatch(String),

    // ── Cancellation ────────────────────────────────────────────────
    /// Caller-supplied cancellation token tripped mid-request.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if this error indicates the token was rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthFailed { .. })
    }

    /// Truncate a response body for inclusion in an error message.
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= BODY_PREVIEW_LEN {
            body.to_owned()
        } else {
            let mut end = BODY_PREVIEW_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}…", &body[..end])
        }
    }
}
