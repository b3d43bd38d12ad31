//! Shared helpers for the client integration tests.

use pretty_assertions::assert_eq;
use wiremock::MockServer;

use deployctl_api::InventoryClient;
use secrecy::SecretString;

/// Token every test client authenticates with.
pub const TEST_TOKEN: &str = "78a0d9a3a1ee4a1e8a55d4446f1b1b5b";

/// Fixed token the boundary normaliser rewrites multipart boundaries to,
/// so expected bodies can be written as literals.
pub const GENERIC_BOUNDARY: &str = "generic-multipart-boundary";

/// Boundary token length used by the upload endpoints.
const BOUNDARY_LEN: usize = 60;

/// Start a mock inventory service and a client pointed at it.
pub async fn setup() -> (MockServer, InventoryClient) {
    let server = MockServer::start().await;
    let client = InventoryClient::from_reqwest(
        &server.uri(),
        SecretString::from(TEST_TOKEN),
        reqwest::Client::new(),
    )
    .expect("client for mock server");
    (server, client)
}

/// Rewrite a `--[a-z0-9]{60}` multipart boundary to [`GENERIC_BOUNDARY`]
/// and strip carriage returns, so expected bodies can use `\n`-only
/// newlines. Returns `None` when no boundary-shaped token is present.
pub fn normalize_multipart(body: &str) -> Option<String> {
    let text = body.replace('\r', "");
    let token = text.lines().find_map(|line| {
        let rest = line.strip_prefix("--")?;
        let candidate = rest.strip_suffix("--").unwrap_or(rest);
        let shaped = candidate.len() == BOUNDARY_LEN
            && candidate
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        shaped.then(|| candidate.to_owned())
    })?;
    Some(text.replace(&token, GENERIC_BOUNDARY))
}

/// Compare a recorded multipart request body against an expected literal
/// written with the generic boundary and `\n` newlines.
///
/// A body with no recognisable boundary is a harness failure, reported
/// distinctly from a content mismatch.
pub fn assert_multipart_eq(actual: &[u8], expected: &str) {
    let actual = std::str::from_utf8(actual).expect("harness: multipart body is not UTF-8");
    let Some(normalized) = normalize_multipart(actual) else {
        panic!("harness: no multipart boundary found in request body:\n{actual}");
    };
    assert_eq!(normalized, expected.replace('\r', ""));
}

/// Structural JSON comparison: key order on objects is irrelevant,
/// element order in arrays is not.
pub fn assert_json_eq(actual: &[u8], expected: &serde_json::Value) {
    let actual: serde_json::Value =
        serde_json::from_slice(actual).expect("harness: request body is not JSON");
    assert_eq!(&actual, expected);
}
