use url::Url;

use crate::errors::FetchError;
use crate::net::useragent::UserAgentSpec;

/// Scheme of a validated request URL.
///
/// Resolved once, before any transport work. `About` URLs are answered
/// locally and never reach the network; future engine-internal schemes
/// get their own variant here rather than a conditional inside the
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlScheme {
    Http,
    Https,
    About,
}

impl UrlScheme {
    fn from_url(url: &Url) -> Option<Self> {
        match url.scheme() {
            "http" => Some(UrlScheme::Http),
            "https" => Some(UrlScheme::Https),
            "about" => Some(UrlScheme::About),
            _ => None,
        }
    }

    /// True when the scheme is served over the network.
    pub fn is_network(&self) -> bool {
        !matches!(self, UrlScheme::About)
    }
}

/// A single validated fetch request. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    url: Url,
    scheme: UrlScheme,
    user_agent: UserAgentSpec,
}

impl FetchRequest {
    /// Validate `url` and build a request.
    ///
    /// The URL must be non-empty, parse as an absolute URL, and carry a
    /// supported scheme (`http`, `https`, `about`). Anything else fails
    /// with [`FetchError::InvalidUrl`] before any network work happens.
    pub fn new(url: &str, user_agent: UserAgentSpec) -> Result<Self, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::InvalidUrl("URL is empty".to_string()));
        }

        let parsed = Url::parse(url)
            .map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        let scheme = UrlScheme::from_url(&parsed).ok_or_else(|| {
            FetchError::InvalidUrl(format!(
                "{url}: unsupported scheme '{}'",
                parsed.scheme()
            ))
        })?;

        Ok(Self {
            url: parsed,
            scheme,
            user_agent,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> UrlScheme {
        self.scheme
    }

    pub fn user_agent(&self) -> &UserAgentSpec {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected() {
        let err = FetchRequest::new("", UserAgentSpec::Auto).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));

        let err = FetchRequest::new("   ", UserAgentSpec::Auto).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn relative_url_is_rejected() {
        // No scheme means no absolute URL, which is a local validation error.
        let err = FetchRequest::new("example.com/index.html", UserAgentSpec::Auto).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        for url in ["ftp://example.com/", "file:///etc/passwd", "gopher://x"] {
            let err = FetchRequest::new(url, UserAgentSpec::Auto).unwrap_err();
            assert!(matches!(err, FetchError::InvalidUrl(_)), "accepted {url}");
        }
    }

    #[test]
    fn http_and_https_resolve_to_network_schemes() {
        let req = FetchRequest::new("http://example.com/", UserAgentSpec::Auto).unwrap();
        assert_eq!(req.scheme(), UrlScheme::Http);
        assert!(req.scheme().is_network());

        let req = FetchRequest::new("https://example.com/", UserAgentSpec::Auto).unwrap();
        assert_eq!(req.scheme(), UrlScheme::Https);
        assert!(req.scheme().is_network());
    }

    #[test]
    fn about_is_a_local_scheme() {
        let req = FetchRequest::new("about:blank", UserAgentSpec::Auto).unwrap();
        assert_eq!(req.scheme(), UrlScheme::About);
        assert!(!req.scheme().is_network());
    }
}
