use thiserror::Error;

/// Failure of a single request against the recipe API.
///
/// This is the only error a fetch can produce. Sessions catch it, log it and
/// show an empty result set instead of surfacing it.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, TLS, body read)
    #[error("Failed to fetch recipes: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Recipe API returned status {0}")]
    Status(u16),

    /// The body was not the expected JSON envelope
    #[error("Malformed recipe response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A credential needed to build the request is not configured
    #[error("Missing API credential: {0}")]
    MissingCredential(&'static str),
}

/// Errors surfaced by the `cookify` binary itself
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to set up the HTTP client
    #[error("Client error: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Reading commands from the terminal failed
    #[error("Input error: {0}")]
    InputError(#[from] std::io::Error),

    /// The REPL could not make sense of a command line
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
