/// Default identifier sent when a request asks for the automatic User-Agent.
pub const DEFAULT_USER_AGENT: &str = "OriniumEngine/0.1";

/// The caller's directive for which User-Agent header to send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserAgentSpec {
    /// Send the engine's default identifier.
    #[default]
    Auto,
    /// Send this exact string.
    Literal(String),
}

impl UserAgentSpec {
    /// Resolve the directive to the literal header value.
    ///
    /// This is a pure substitution, executed once before the transport
    /// client is built. `Auto` always yields [`DEFAULT_USER_AGENT`].
    pub fn resolve(&self) -> &str {
        match self {
            UserAgentSpec::Auto => DEFAULT_USER_AGENT,
            UserAgentSpec::Literal(ua) => ua,
        }
    }
}

impl From<&str> for UserAgentSpec {
    fn from(ua: &str) -> Self {
        UserAgentSpec::Literal(ua.to_string())
    }
}

impl From<String> for UserAgentSpec {
    fn from(ua: String) -> Self {
        UserAgentSpec::Literal(ua)
    }
}
