use super::entry::{MethodFilter, RouteEntry};
use super::error::RouterError;
use super::params::Params;
use super::pattern::{has_rule, parse_pattern, trim_first_slash, Pattern, SLASH};
use super::tree::Node;
use super::{RouteMatch, Router};

use crate::config::RouterConfig;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace, warn};
use smallvec::SmallVec;

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// The default domain is lower-cased here, however `config` was built.
    pub fn with_config(mut config: RouterConfig) -> Self {
        config.default_domain.make_ascii_lowercase();
        Self {
            config,
            exact: RwLock::new(HashMap::new()),
            trees: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Registers `handler` under `[METHOD:]path[@domain]`.
    ///
    /// Every pattern is written to the exact table, once per supported method
    /// when no method is given. A later registration with the same key
    /// replaces the earlier one there. Patterns with `:name` or `*name`
    /// segments are also added to the domain's tree, where nothing is
    /// replaced.
    pub fn bind(&self, pattern: &str, handler: H) -> Result<(), RouterError> {
        let Pattern {
            domain,
            method,
            uri,
        } = parse_pattern(pattern, &self.config.default_domain)?;

        let dynamic = has_rule(&uri);
        let entry = Arc::new(RouteEntry::new(uri, domain, method, handler));

        {
            let mut exact = write(&self.exact);
            match entry.method() {
                MethodFilter::All => {
                    for m in &self.config.methods {
                        let key = route_key(m, entry.uri(), entry.domain());
                        exact.insert(key, Arc::clone(&entry));
                    }
                }
                MethodFilter::Only(m) => {
                    let key = route_key(m, entry.uri(), entry.domain());
                    exact.insert(key, Arc::clone(&entry));
                }
            }
        }

        if dynamic {
            let mut trees = write(&self.trees);
            trees
                .entry(entry.domain().into())
                .or_insert_with(Node::new)
                .insert(Arc::clone(&entry));
        }

        debug!(
            "bind {}:{}@{} (priority = {}, dynamic = {})",
            entry.method().as_str(),
            entry.uri(),
            entry.domain(),
            entry.priority(),
            dynamic
        );

        Ok(())
    }

    /// Finds the handler for a request.
    ///
    /// The default domain is tried before the request host, first against the
    /// exact table and then against the pattern trees. A port in `host` is
    /// ignored.
    pub fn resolve(&self, host: &str, method: &str, path: &str) -> Option<RouteMatch<H>> {
        let host = strip_port(host).to_ascii_lowercase();
        let default = self.config.default_domain.as_str();
        let mut domains: SmallVec<[&str; 2]> = SmallVec::new();
        domains.push(default);
        if host != default {
            domains.push(host.as_str());
        }

        if let Some(entry) = self.find_exact(&domains, method, path) {
            trace!("resolve {} {}{}: exact {}", method, host, path, entry.domain());
            return Some(RouteMatch {
                entry,
                params: Params::new(),
            });
        }

        match self.find_dynamic(&domains, method, path) {
            Some(found) => {
                trace!(
                    "resolve {} {}{}: pattern {}@{}",
                    method,
                    host,
                    path,
                    found.entry.uri(),
                    found.entry.domain()
                );
                Some(found)
            }
            None => {
                trace!("resolve {} {}{}: not found", method, host, path);
                None
            }
        }
    }

    /// Snapshot of the exact table, sorted by key.
    pub fn routes(&self) -> Vec<(String, Arc<RouteEntry<H>>)> {
        let exact = read(&self.exact);
        let mut routes: Vec<(String, Arc<RouteEntry<H>>)> = exact
            .iter()
            .map(|(k, e)| (k.clone(), Arc::clone(e)))
            .collect();
        routes.sort_by(|a, b| a.0.cmp(&b.0));
        routes
    }

    /// Number of keys in the exact table.
    pub fn len(&self) -> usize {
        read(&self.exact).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Router<H> {
    fn find_exact(
        &self,
        domains: &[&str],
        method: &str,
        path: &str,
    ) -> Option<Arc<RouteEntry<H>>> {
        let exact = read(&self.exact);
        domains
            .iter()
            .find_map(|domain| exact.get(&route_key(method, path, domain)))
            .cloned()
    }

    fn find_dynamic(&self, domains: &[&str], method: &str, path: &str) -> Option<RouteMatch<H>> {
        let parts: SmallVec<[&str; 8]> = trim_first_slash(path).split(SLASH).collect();
        let trees = read(&self.trees);

        for &domain in domains {
            let root = match trees.get(domain) {
                Some(r) => r,
                None => continue,
            };

            let lists = root.candidates(&parts);
            for &list in lists.iter().rev() {
                for entry in list {
                    if !entry.method().matches(method) {
                        continue;
                    }
                    let rule = match entry.rule() {
                        Ok(r) => r,
                        Err(e) => {
                            warn!("skip {}@{}: {}", entry.uri(), entry.domain(), e);
                            continue;
                        }
                    };
                    let mut params = Params::new();
                    if rule.captures_into(path, &mut params) {
                        return Some(RouteMatch {
                            entry: Arc::clone(entry),
                            params,
                        });
                    }
                }
            }
        }

        None
    }
}

/// `METHOD:uri@domain` with the method upper-cased and the domain lower-cased.
fn route_key(method: &str, uri: &str, domain: &str) -> String {
    let mut key = String::with_capacity(method.len() + uri.len() + domain.len() + 2);
    key.push_str(&method.to_ascii_uppercase());
    key.push(':');
    key.push_str(uri);
    key.push('@');
    key.push_str(&domain.to_ascii_lowercase());
    key
}

#[inline]
fn strip_port(host: &str) -> &str {
    host.split(':').next().unwrap_or(host)
}

// a poisoned lock is used as is
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
