#![deny(unsafe_code)]

mod config;
mod router;
mod router_macro;

#[cfg(feature = "http-router")]
mod http_router;

pub use crate::config::{RouterConfig, ALL_METHODS, DEFAULT_DOMAIN};
pub use crate::router::{
    compile_rule, parse_pattern, MethodFilter, Params, Pattern, RouteEntry, RouteMatch, Router,
    RouterError,
};

#[cfg(feature = "http-router")]
pub use crate::http_router::Method;
