//! Probing a target's health check endpoint.

use tracing::debug;

use crate::client::HttpClient;
use crate::error::StatusError;
use crate::target::{Service, Target};

/// Outcome of checking one service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusResult {
    /// Which API was checked
    pub service: Service,
    /// Base URL the API was reached at
    pub url: String,
    /// `None` when the service is ready, otherwise why it is not.
    pub error: Option<StatusError>,
}

impl StatusResult {
    /// True when the service answered 200.
    pub fn is_ready(&self) -> bool {
        self.error.is_none()
    }
}

/// Issues a single GET against the target's `/ApplicationStatus`.
pub fn probe(client: &dyn HttpClient, target: &Target) -> StatusResult {
    let url = target.status_url();
    let error = match client.get(&url) {
        Ok(200) => None,
        Ok(status) => {
            debug!("{} not ready, status {status}", target.service().label());
            Some(StatusError::Unready { url, status })
        }
        Err(err) => {
            debug!("{} unreachable: {err}", target.service().label());
            Some(err)
        }
    };
    StatusResult {
        service: target.service(),
        url: target.base_url().to_string(),
        error,
    }
}
