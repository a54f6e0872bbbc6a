use tokio_util::sync::CancellationToken;

use crate::config::FetchConfig;
use crate::errors::FetchError;
use crate::net::request::{FetchRequest, UrlScheme};
use crate::net::response::Response;
use crate::net::useragent::UserAgentSpec;

/// Performs a single fetch per invocation, using a fixed configuration.
///
/// The handle holds no connection state, so it can be shared freely
/// between tasks; concurrent fetches are fully independent of each
/// other.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub async fn fetch(&self, request: &FetchRequest) -> Result<Response, FetchError> {
        fetch(request, &self.config).await
    }

    /// String-level convenience: validate `url` and fetch it in one call.
    ///
    /// Validation failures return [`FetchError::InvalidUrl`] before any
    /// network work happens.
    pub async fn fetch_url(
        &self,
        url: &str,
        user_agent: UserAgentSpec,
    ) -> Result<Response, FetchError> {
        let request = FetchRequest::new(url, user_agent)?;
        fetch(&request, &self.config).await
    }

    pub async fn fetch_with_cancel(
        &self,
        request: &FetchRequest,
        cancel: CancellationToken,
    ) -> Result<Response, FetchError> {
        fetch_with_cancel(request, &self.config, cancel).await
    }
}

/// Loads a URL and returns the buffered response.
///
/// Exactly one request cycle per call: scheme dispatch, then one
/// transport exchange with the deadline and redirect limit from
/// `config`. Every failure comes back as a typed [`FetchError`];
/// nothing is printed or logged here, and no retries happen on behalf
/// of the caller.
pub async fn fetch(request: &FetchRequest, config: &FetchConfig) -> Result<Response, FetchError> {
    match request.scheme() {
        // Local schemes are answered without touching the transport.
        UrlScheme::About => Ok(local_response(request)),
        UrlScheme::Http | UrlScheme::Https => fetch_over_http(request, config).await,
    }
}

/// Same pipeline as [`fetch`], raced against a cancellation token.
///
/// Cancelling drops the in-flight transport future, which releases the
/// connection handle. A token that is already cancelled wins over a
/// fetch that could complete immediately.
pub async fn fetch_with_cancel(
    request: &FetchRequest,
    config: &FetchConfig,
    cancel: CancellationToken,
) -> Result<Response, FetchError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(FetchError::Cancelled),
        res = fetch(request, config) => res,
    }
}

async fn fetch_over_http(
    request: &FetchRequest,
    config: &FetchConfig,
) -> Result<Response, FetchError> {
    // Resolve the user-agent directive to a literal before the client is
    // built; the transport never sees the directive itself.
    let user_agent = request.user_agent().resolve();

    let redirect_policy = if config.max_redirects == 0 {
        reqwest::redirect::Policy::none()
    } else {
        reqwest::redirect::Policy::limited(config.max_redirects)
    };

    // One client per call: the connection handle lives inside this scope
    // and is released on every exit path when the client drops.
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .redirect(redirect_policy)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let res = client
        .get(request.url().clone())
        .send()
        .await
        .map_err(map_transport_error)?;

    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming yet
    let body = res.bytes().await.map_err(map_transport_error)?.to_vec();

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}

fn map_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_redirect() {
        FetchError::Transport(format!("redirect limit exceeded: {err}"))
    } else {
        FetchError::Transport(err.to_string())
    }
}

/// Synthetic response for local schemes. `about:blank` is an empty page.
fn local_response(request: &FetchRequest) -> Response {
    Response {
        url: request.url().clone(),
        status: 200,
        status_text: "OK".to_string(),
        headers: http::HeaderMap::new(),
        body: Vec::new(),
    }
}
