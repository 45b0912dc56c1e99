//! Centralized constants for the workspace.
//!
//! Default values used across crates to avoid magic number duplication.

/// Default management URL of a Splunk instance on the local host.
pub const DEFAULT_BASE_URL: &str = "https://localhost:8089";

/// Default owner for namespaced requests.
pub const DEFAULT_OWNER: &str = "nobody";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Splunk ships with self-signed certificates, so verification is off
/// unless configured otherwise.
pub const DEFAULT_SKIP_VERIFY: bool = true;
