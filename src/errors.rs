#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL failed local validation; no network call was attempted.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS, connect, TLS or protocol failure, including an exhausted
    /// redirect limit.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request deadline elapsed before the full body arrived.
    #[error("Request deadline exceeded")]
    Timeout,

    /// The caller cancelled the fetch while it was in flight.
    #[error("Fetch cancelled")]
    Cancelled,
}
