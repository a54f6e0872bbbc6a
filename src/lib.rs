pub mod config;
pub mod errors;
pub mod net;

pub use config::{FetchConfig, FetchConfigBuilder, FetchConfigError};
pub use errors::FetchError;
pub use net::*;
