use super::entry::MethodFilter;
use super::error::RouterError;

use once_cell::sync::Lazy;
use regex::Regex;

pub(super) const SLASH: char = '/';
pub(super) const COLON: char = ':';
pub(super) const STAR: char = '*';

static METHOD_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z]+):(.+)$").expect("method prefix regex"));

static DOMAIN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)@([A-Za-z0-9_.\-]+)$").expect("domain suffix regex"));

/// The three fields of a registration string `[METHOD:]path[@domain]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub domain: String,
    pub method: MethodFilter,
    pub uri: String,
}

/// Splits a registration string into domain, method and uri.
///
/// Without a `METHOD:` prefix the method is [`MethodFilter::All`]; without an
/// `@domain` suffix the domain is `default_domain`. The domain is lower-cased
/// and the uri always starts with `/`.
pub fn parse_pattern(pattern: &str, default_domain: &str) -> Result<Pattern, RouterError> {
    let mut rest = pattern;
    let mut method = MethodFilter::All;
    let mut domain = default_domain;

    if let Some(caps) = METHOD_PREFIX.captures(rest) {
        if let (Some(m), Some(r)) = (caps.get(1), caps.get(2)) {
            method = MethodFilter::parse(m.as_str());
            rest = r.as_str();
        }
    }

    if let Some(caps) = DOMAIN_SUFFIX.captures(rest) {
        if let (Some(u), Some(d)) = (caps.get(1), caps.get(2)) {
            rest = u.as_str();
            domain = d.as_str();
        }
    }

    if rest.is_empty() {
        return Err(RouterError::invalid_pattern(pattern));
    }

    let uri = if rest.starts_with(SLASH) {
        rest.to_owned()
    } else {
        format!("{}{}", SLASH, rest)
    };

    Ok(Pattern {
        domain: domain.to_ascii_lowercase(),
        method,
        uri,
    })
}

/// Whether `pattern` starts with a `METHOD:` prefix.
#[cfg(any(feature = "http-router", test))]
pub(crate) fn has_method_prefix(pattern: &str) -> bool {
    METHOD_PREFIX.is_match(pattern)
}

#[inline]
pub(super) fn is_rule_segment(segment: &str) -> bool {
    segment.starts_with(COLON) || segment.starts_with(STAR)
}

/// Non-empty `/`-separated segments of a uri.
#[inline]
pub(super) fn segments(uri: &str) -> impl Iterator<Item = &str> {
    uri.split(SLASH).filter(|s| !s.is_empty())
}

/// Whether any segment of `uri` is a `:name` or `*name` rule.
pub(super) fn has_rule(uri: &str) -> bool {
    segments(uri).any(is_rule_segment)
}

#[inline]
pub(super) fn trim_first_slash(s: &str) -> &str {
    s.strip_prefix(SLASH).unwrap_or(s)
}
