use super::params::Params;
use super::pattern::{segments, COLON, STAR};

use regex::Regex;

const PARAM_GROUP: &str = r"/([A-Za-z0-9_\.\-]+)";
const WILDCARD_GROUP: &str = r"/(.*)";

/// Converts a uri pattern into a match expression and its ordered parameter names.
///
/// `:name` captures one segment; `*name` captures the rest of the path and ends
/// the expression. A uri shorter than two characters is returned as is.
pub fn compile_rule(uri: &str) -> (String, Vec<String>) {
    let mut names: Vec<String> = Vec::new();
    if uri.len() < 2 {
        return (uri.to_owned(), names);
    }

    let mut expr = String::with_capacity(uri.len() + 8);
    expr.push('^');
    for segment in segments(uri) {
        if let Some(name) = segment.strip_prefix(COLON) {
            expr.push_str(PARAM_GROUP);
            names.push(name.to_owned());
        } else if let Some(name) = segment.strip_prefix(STAR) {
            expr.push_str(WILDCARD_GROUP);
            names.push(name.to_owned());
            return (expr, names);
        } else {
            expr.push('/');
            expr.push_str(&regex::escape(segment));
        }
    }
    expr.push('$');
    (expr, names)
}

#[derive(Debug)]
pub(crate) struct Rule {
    regex: Regex,
    names: Box<[Box<str>]>,
}

impl Rule {
    pub(super) fn compile(uri: &str) -> Result<Self, regex::Error> {
        let (expr, names) = compile_rule(uri);
        let regex = if expr == uri {
            Regex::new(&format!("^{}$", regex::escape(&expr)))?
        } else {
            Regex::new(&expr)?
        };
        Ok(Self {
            regex,
            names: names.into_iter().map(String::into_boxed_str).collect(),
        })
    }

    /// Tests `path` and binds the captured values in order of the parameter names.
    pub(super) fn captures_into(&self, path: &str, params: &mut Params) -> bool {
        if self.names.is_empty() {
            return self.regex.is_match(path);
        }
        let caps = match self.regex.captures(path) {
            Some(c) => c,
            None => return false,
        };
        for (name, value) in self.names.iter().zip(caps.iter().skip(1)) {
            if let Some(value) = value {
                params.insert(name, value.as_str());
            }
        }
        true
    }
}
