use super::pattern::segments;
use super::rule::Rule;

use crate::config::ALL_METHODS;

use std::cmp::Ordering;

use once_cell::sync::OnceCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodFilter {
    All,
    Only(Box<str>),
}

impl MethodFilter {
    pub fn parse(method: &str) -> Self {
        if method.eq_ignore_ascii_case(ALL_METHODS) {
            Self::All
        } else {
            Self::Only(method.into())
        }
    }

    #[inline]
    pub fn matches(&self, method: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(m) => m.eq_ignore_ascii_case(method),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_METHODS,
            Self::Only(m) => &**m,
        }
    }
}

/// A registered route. Shared between the exact table and the pattern tree.
#[derive(Debug)]
pub struct RouteEntry<H> {
    uri: Box<str>,
    domain: Box<str>,
    method: MethodFilter,
    priority: usize,
    handler: H,
    rule: OnceCell<Rule>,
}

impl<H> RouteEntry<H> {
    pub(super) fn new(uri: String, domain: String, method: MethodFilter, handler: H) -> Self {
        let priority = segments(&uri).count();
        Self {
            uri: uri.into(),
            domain: domain.into(),
            method,
            priority,
            handler,
            rule: OnceCell::new(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn method(&self) -> &MethodFilter {
        &self.method
    }

    /// Number of non-empty segments in the uri.
    pub fn priority(&self) -> usize {
        self.priority
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Compiled by the first `resolve` that tests this entry, then kept for
    /// the lifetime of the entry. This cache is the one field written after
    /// construction; the routing fields never change.
    pub(super) fn rule(&self) -> Result<&Rule, regex::Error> {
        self.rule.get_or_try_init(|| Rule::compile(&self.uri))
    }

    fn param_markers(&self) -> usize {
        self.uri.matches("/:").count()
    }
}

/// Whether `new` goes in front of `old` in a leaf list.
///
/// More segments wins; at equal depth more `:name` parameters wins.
/// Equal rank is never higher, so later registrations land behind.
pub(super) fn is_higher_priority<H>(new: &RouteEntry<H>, old: &RouteEntry<H>) -> bool {
    match new.priority.cmp(&old.priority) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => new.param_markers() > old.param_markers(),
    }
}
