//! HTTP access, kept behind a trait so commands can be tested without a network.

use tracing::debug;

use crate::error::StatusError;

/// Anything that can issue a GET and report the response status.
pub trait HttpClient {
    /// Perform a GET against `url`, returning the HTTP status code.
    fn get(&self, url: &str) -> Result<u16, StatusError>;
}

/// Blocking client backed by ureq.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Builds a client which hands back every status code instead of erroring on 4xx/5xx.
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str) -> Result<u16, StatusError> {
        debug!("GET {url}");
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|err| StatusError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            })?;
        let status = response.status().as_u16();
        debug!("GET {url} returned {status}");
        Ok(status)
    }
}
