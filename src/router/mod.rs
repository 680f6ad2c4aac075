mod entry;
mod error;
mod imp;
mod params;
mod pattern;
mod rule;
mod tree;

pub use self::entry::{MethodFilter, RouteEntry};
pub use self::error::RouterError;
pub use self::params::Params;
pub use self::pattern::{parse_pattern, Pattern};
pub use self::rule::compile_rule;

#[cfg(feature = "http-router")]
pub(crate) use self::pattern::has_method_prefix;

use self::tree::Node;
use crate::config::RouterConfig;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Routes `(host, method, path)` to registered handlers.
///
/// Static lookups go through the exact table keyed by
/// `METHOD:uri@domain`; patterns with `:name` or `*name` segments also go
/// into a per-domain segment tree. The two structures have separate locks.
#[derive(Debug)]
pub struct Router<H> {
    config: RouterConfig,
    exact: RwLock<HashMap<String, Arc<RouteEntry<H>>>>,
    trees: RwLock<HashMap<Box<str>, Node<H>>>,
}

/// A resolved route and the parameters captured from the request path.
#[derive(Debug)]
pub struct RouteMatch<H> {
    entry: Arc<RouteEntry<H>>,
    params: Params,
}

impl<H> RouteMatch<H> {
    pub fn handler(&self) -> &H {
        self.entry.handler()
    }

    pub fn entry(&self) -> &Arc<RouteEntry<H>> {
        &self.entry
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_parts(self) -> (Arc<RouteEntry<H>>, Params) {
        (self.entry, self.params)
    }
}
