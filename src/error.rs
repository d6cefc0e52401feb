//! Error handling

/// Everything that can go wrong while checking a service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StatusError {
    /// The target could not be turned into a usable URL.
    Configuration(String),
    /// The request never got a response.
    Transport {
        /// URL that was requested
        url: String,
        /// What the HTTP stack reported
        message: String,
    },
    /// The service answered, but not with a success status.
    Unready {
        /// URL that was requested
        url: String,
        /// HTTP status returned
        status: u16,
    },
}

impl StatusError {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(message) => write!(f, "{message}"),
            Self::Transport { url, message } => write!(f, "Request to {url} failed: {message}"),
            Self::Unready { url, status } => write!(f, "{url} returned status {status}"),
        }
    }
}

impl std::error::Error for StatusError {}
