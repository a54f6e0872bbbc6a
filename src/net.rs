pub mod fetch;
pub mod request;
pub mod response;
pub mod useragent;

pub use fetch::{fetch, fetch_with_cancel, Fetcher};
pub use request::{FetchRequest, UrlScheme};
pub use response::Response;
pub use useragent::UserAgentSpec;
