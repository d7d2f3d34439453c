use std::fmt;

/// Name of the header the token travels in, both inbound and upstream
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Opaque caller token, forwarded verbatim and never inspected
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Per-request data threaded through every upstream call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    access_token: Option<AccessToken>,
}

impl RequestContext {
    pub fn new(access_token: Option<AccessToken>) -> Self {
        Self { access_token }
    }

    /// Builds a context from a raw header value; blank values mean no token
    pub fn from_header(value: Option<&str>) -> Self {
        Self::new(value.filter(|v| !v.is_empty()).map(AccessToken::new))
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }
}
