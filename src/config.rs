//! Router configuration.

/// Domain used when a pattern carries no `@domain` suffix.
pub const DEFAULT_DOMAIN: &str = "default";

/// Method name standing for "every supported method".
pub const ALL_METHODS: &str = "ALL";

#[cfg(feature = "http-router")]
fn default_methods() -> Vec<Box<str>> {
    use http::Method;

    [
        Method::GET,
        Method::PUT,
        Method::POST,
        Method::DELETE,
        Method::PATCH,
        Method::HEAD,
        Method::CONNECT,
        Method::OPTIONS,
        Method::TRACE,
    ]
    .iter()
    .map(|m| m.as_str().into())
    .collect()
}

#[cfg(not(feature = "http-router"))]
fn default_methods() -> Vec<Box<str>> {
    [
        "GET", "PUT", "POST", "DELETE", "PATCH", "HEAD", "CONNECT", "OPTIONS", "TRACE",
    ]
    .iter()
    .map(|&m| m.into())
    .collect()
}

/// Settings fixed at router construction.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Virtual host that unqualified patterns are registered under.
    /// It is always tried before the request's own host.
    pub default_domain: String,
    /// Concrete methods an `ALL` registration expands to in the exact table.
    pub methods: Vec<Box<str>>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_domain: DEFAULT_DOMAIN.to_owned(),
            methods: default_methods(),
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_domain(mut self, domain: impl Into<String>) -> Self {
        self.default_domain = domain.into().to_ascii_lowercase();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods = methods
            .into_iter()
            .map(|m| m.as_ref().to_ascii_uppercase().into())
            .collect();
        self
    }
}
