//! Default User-Agent string for the filefetch HTTP client.
//!
//! Single source for project URL and UA format so all outbound traffic
//! stays consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/filefetch/filefetch";

/// Default User-Agent for outbound requests (identifies the tool).
///
/// Only a default: the effective value is an explicit field on
/// [`crate::HttpClient`] and can be overridden per client or per request.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("filefetch/{version} (+{PROJECT_UA_URL})")
}
