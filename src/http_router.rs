#![forbid(unsafe_code)]

use crate::router::{has_method_prefix, RouteMatch, Router, RouterError};

pub use http::Method;

use http::header::HOST;
use http::Request;

impl<H> Router<H> {
    /// Resolves an `http::Request`.
    ///
    /// The host comes from the request uri authority, falling back to the
    /// `Host` header.
    pub fn resolve_request<B>(&self, req: &Request<B>) -> Option<RouteMatch<H>> {
        let host = req
            .uri()
            .host()
            .or_else(|| req.headers().get(HOST).and_then(|v| v.to_str().ok()))
            .unwrap_or("");
        self.resolve(host, req.method().as_str(), req.uri().path())
    }

    /// Registers `pattern` for a single method.
    ///
    /// `pattern` is `path[@domain]`; one that already carries a `METHOD:`
    /// prefix is an [`RouterError::InvalidPattern`].
    pub fn route(&self, method: Method, pattern: &str, handler: H) -> Result<&Self, RouterError> {
        if has_method_prefix(pattern) {
            return Err(RouterError::invalid_pattern(pattern));
        }
        self.bind(&format!("{}:{}", method.as_str(), pattern), handler)?;
        Ok(self)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&self, pattern: &str, handler: H) -> Result<&Self, RouterError> {
            self.route(Method::$method, pattern, handler)
        }
    };
}

impl<H> Router<H> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
