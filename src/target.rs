//! Resolving which URL a command talks to.

use url::Url;

use crate::constants::{
    APPLICATION_STATUS_PATH, LOCAL_ALIAS, LOCAL_CONTAINER_URL, LOCAL_DEPLOY_URL,
};
use crate::error::StatusError;

/// The Vespa APIs the CLI knows how to reach.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Service {
    /// Config server, where applications are deployed.
    Deploy,
    /// Container serving search queries.
    Query,
    /// Container accepting document operations.
    Document,
}

impl Service {
    /// Human readable name used in output.
    pub fn label(self) -> &'static str {
        match self {
            Service::Deploy => "Deploy API",
            Service::Query => "Query API",
            Service::Document => "Document API",
        }
    }
}

/// (alias, service, base url)
static ALIASES: &[(&str, Service, &str)] = &[
    (LOCAL_ALIAS, Service::Deploy, LOCAL_DEPLOY_URL),
    (LOCAL_ALIAS, Service::Query, LOCAL_CONTAINER_URL),
    (LOCAL_ALIAS, Service::Document, LOCAL_CONTAINER_URL),
];

/// Looks up the base URL of a named target for the given service.
pub fn alias_url(alias: &str, service: Service) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(name, svc, _)| *name == alias && *svc == service)
        .map(|(_, _, url)| *url)
}

/// A service and the base URL it lives at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Target {
    service: Service,
    base_url: String,
}

impl Target {
    /// Resolve `value` (a URL, an alias, or nothing) into a target for `service`.
    pub fn resolve(service: Service, value: Option<&str>) -> Result<Self, StatusError> {
        let value = value.map(str::trim).unwrap_or(LOCAL_ALIAS);
        if let Some(url) = alias_url(value, service) {
            return Ok(Self {
                service,
                base_url: url.to_string(),
            });
        }

        let parsed = Url::parse(value)
            .map_err(|err| StatusError::config(format!("Invalid target '{value}': {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(StatusError::config(format!(
                "Invalid target '{value}': expected an http(s) URL or '{LOCAL_ALIAS}'"
            )));
        }
        // the status path is appended as text, it has to end up in the path
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(StatusError::config(format!(
                "Invalid target '{value}': query strings and fragments are not allowed"
            )));
        }

        Ok(Self {
            service,
            base_url: value.trim_end_matches('/').to_string(),
        })
    }

    /// Which API this target points at.
    pub fn service(&self) -> Service {
        self.service
    }

    /// Base URL, as shown to the user.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The health check URL for this target.
    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url, APPLICATION_STATUS_PATH)
    }
}
