use thiserror::Error;

/// Failures talking to the Steam Web API.
///
/// Every variant is treated as transient by the pollers: the cycle is skipped and the
/// entity is picked up again on a later cycle.
#[derive(Error, Debug)]
pub enum SteamError {
    /// Network or transport failure from reqwest.
    #[error("Steam request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Steam answered with a non-success HTTP status.
    #[error("Steam responded with status {status} for {endpoint}")]
    Status {
        /// Endpoint that was called
        endpoint: &'static str,
        /// HTTP status code returned
        status: u16,
    },

    /// Response body did not have the expected shape.
    #[error("Failed to decode Steam response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint that was called
        endpoint: &'static str,
        /// Description of what was wrong with the payload
        reason: String,
    },

    /// The fetch did not complete within the poller's fetch timeout.
    #[error("Steam request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The endpoint requires a Steam Web API key and none is configured.
    #[error("Steam Web API key is required for {0}")]
    MissingApiKey(&'static str),
}
