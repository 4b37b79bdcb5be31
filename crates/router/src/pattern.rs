//! Path template compilation.
//!
//! A template like `/users/{id}` compiles into a single anchored regex:
//! literal text matches itself (metacharacters escaped), every `{name}`
//! placeholder becomes a named capture group, and the whole pattern is
//! anchored at both ends so a template never matches a mere prefix of the
//! request path.

use crate::PathParams;
use regex::Regex;
use std::collections::HashMap;

/// A compiled path template: an anchored regex plus the placeholder names in
/// template order.
///
/// Compilation is pure given the template and its constraints, so routes cache
/// the compiled pattern and reuse it across match attempts.
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
    param_names: Vec<String>,
}

/// Default fragment for a placeholder with no explicit constraint:
/// one or more non-slash characters.
const DEFAULT_FRAGMENT: &str = "[^/]+";

impl PathPattern {
    /// Compiles `template` against the given constraint fragments.
    ///
    /// Each `{name}` placeholder is replaced by a named capture group whose
    /// body is `constraints[name]` when present, `[^/]+` otherwise.
    /// Constraint entries for placeholders absent from the template are ignored.
    /// A `{` with no closing `}` is treated as literal text.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when a constraint fragment (or a
    /// placeholder name) does not form a valid pattern. Callers are expected to
    /// degrade this to "route never matches" rather than abort matching.
    pub fn compile(template: &str, constraints: &HashMap<String, String>) -> Result<Self, regex::Error> {
        let mut source = String::with_capacity(template.len() + 16);
        source.push('^');
        let mut param_names = Vec::new();

        let mut rest = template;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                // unbalanced brace, the remainder is literal text
                break;
            };

            source.push_str(&regex::escape(&rest[..open]));

            let name = &rest[open + 1..close];
            let fragment = constraints.get(name).map_or(DEFAULT_FRAGMENT, String::as_str);
            source.push_str("(?P<");
            source.push_str(name);
            source.push('>');
            source.push_str(fragment);
            source.push(')');
            param_names.push(name.to_string());

            rest = &rest[close + 1..];
        }
        source.push_str(&regex::escape(rest));
        source.push('$');

        let regex = Regex::new(&source)?;
        Ok(Self { regex, param_names })
    }

    /// Placeholder names in template order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Attempts a full match of `path`, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        self.regex.captures(path).map(|captures| {
            self.param_names
                .iter()
                .filter_map(|name| {
                    captures.name(name).map(|m| (name.clone(), m.as_str().to_string()))
                })
                .collect()
        })
    }

    /// Returns true if `path` matches this pattern in full.
    #[inline]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The compiled regex source, mainly useful for diagnostics.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
