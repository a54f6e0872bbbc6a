//! Fetch pipeline configuration.
//!
//! `FetchConfig` controls the behavior of a single fetch: which
//! User-Agent default to send, the total request deadline, the connect
//! timeout, and how many redirects the transport may follow before the
//! request is failed.
//!
//! Sensible defaults are available via [`Default`]; use the fluent
//! [`FetchConfig::builder()`] to customize with validation.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use orinium_engine::FetchConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FetchConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .max_redirects(5)
//!     .build()?; // returns Result<FetchConfig, FetchConfigError>
//! # Ok(()) }
//! ```

use std::fmt;
use std::time::Duration;

use crate::net::useragent::DEFAULT_USER_AGENT;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header value sent when the request asks for the default.
    pub user_agent: String,
    /// Total deadline for the request, from send to last body byte.
    pub timeout: Duration,
    /// Deadline for DNS resolution plus TCP/TLS connect.
    pub connect_timeout: Duration,
    /// Redirects followed before the request fails. `0` disables following.
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_redirects: 10,
        }
    }
}

impl FetchConfig {
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

/// Builder for [`FetchConfig`].
#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    inner: FetchConfig,
}

impl FetchConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FetchConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }
    pub fn timeout(self, d: Duration) -> Self { self.map(|c| c.timeout = d) }
    pub fn connect_timeout(self, d: Duration) -> Self { self.map(|c| c.connect_timeout = d) }
    pub fn max_redirects(self, n: usize) -> Self { self.map(|c| c.max_redirects = n) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut FetchConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FetchConfig, FetchConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone)]
pub enum FetchConfigError {
    ZeroTimeout,
    ZeroConnectTimeout,
    EmptyUserAgent,
}

impl fmt::Display for FetchConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchConfigError::ZeroTimeout =>
                write!(f, "timeout must be non-zero"),
            FetchConfigError::ZeroConnectTimeout =>
                write!(f, "connect_timeout must be non-zero"),
            FetchConfigError::EmptyUserAgent =>
                write!(f, "user_agent must not be empty"),
        }
    }
}
impl std::error::Error for FetchConfigError {}

fn validate(c: &FetchConfig) -> Result<(), FetchConfigError> {
    if c.timeout.is_zero() {
        return Err(FetchConfigError::ZeroTimeout);
    }
    if c.connect_timeout.is_zero() {
        return Err(FetchConfigError::ZeroConnectTimeout);
    }
    if c.user_agent.is_empty() {
        return Err(FetchConfigError::EmptyUserAgent);
    }
    Ok(())
}
