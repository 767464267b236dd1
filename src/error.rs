//! Error types for the remote services elsewherr talks to.
//!
//! Configuration loading and the binary use `anyhow`; everything that crosses
//! the Radarr or TMDB boundary reports through [`Error`] so callers can decide
//! which failures are fatal for a run and which only skip a movie.

/// Failure talking to Radarr or TMDB, or an unusable configuration value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("{service} request failed: {source}")]
    Request {
        /// The remote service ("radarr" or "tmdb").
        service: &'static str,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{service} returned {status}: {body}")]
    Status {
        /// The remote service ("radarr" or "tmdb").
        service: &'static str,
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Response body, kept for the log line.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode {service} response: {source}")]
    Decode {
        /// The remote service ("radarr" or "tmdb").
        service: &'static str,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// A configuration value cannot be used to build a client.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status of the failed call, if the service answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using the crate Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Turn a response into `Ok(response)` or an [`Error::Status`] carrying its body.
pub(crate) async fn check_status(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        service,
        status,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("tag prefix is empty");
        assert_eq!(err.to_string(), "Invalid configuration: tag prefix is empty");

        let err = Error::Status {
            service: "radarr",
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "bad key".into(),
        };
        assert_eq!(err.to_string(), "radarr returned 401 Unauthorized: bad key");
    }

    #[test]
    fn test_status_accessor() {
        let err = Error::Status {
            service: "tmdb",
            status: reqwest::StatusCode::NOT_FOUND,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        assert_eq!(Error::config("x").status(), None);
    }
}
