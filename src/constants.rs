//! Shared constants for things
//!

/// Health check path served by every Vespa API.
pub const APPLICATION_STATUS_PATH: &str = "/ApplicationStatus";

/// Alias which points at services running on this machine.
pub const LOCAL_ALIAS: &str = "local";

/// Config server on a local deployment.
pub const LOCAL_DEPLOY_URL: &str = "http://127.0.0.1:19071";

/// Container (query and document APIs) on a local deployment.
pub const LOCAL_CONTAINER_URL: &str = "http://127.0.0.1:8080";

/// Env var holding the default target.
pub const ENV_TARGET: &str = "VESPA_CLI_TARGET";

/// Env var enabling debug logging.
pub const ENV_DEBUG: &str = "VESPA_CLI_DEBUG";

/// Env var selecting when to color output.
pub const ENV_COLOR: &str = "VESPA_CLI_COLOR";
