//! Uri generation: filling a path template from parameters, the inverse of
//! matching.

use crate::{Route, RouterError};
use std::collections::HashMap;

/// Generates concrete paths from route templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriGenerator;

impl UriGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Substitutes every `{name}` in the route's template with `params[name]`.
    ///
    /// This is plain string substitution: extra parameters are ignored and
    /// constraints are not re-validated against the supplied values. An
    /// unbalanced `{` is carried over as literal text, mirroring how the
    /// pattern compiler reads such templates.
    ///
    /// # Errors
    ///
    /// [`RouterError::MissingParameter`] when a placeholder has no value.
    pub fn generate<T>(
        &self,
        route: &Route<T>,
        params: &HashMap<String, String>,
    ) -> Result<String, RouterError> {
        let template = route.path();
        let mut uri = String::with_capacity(template.len());

        let mut rest = template;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };

            uri.push_str(&rest[..open]);

            let name = &rest[open + 1..close];
            match params.get(name) {
                Some(value) => uri.push_str(value),
                None => return Err(RouterError::missing_parameter(name, template)),
            }

            rest = &rest[close + 1..];
        }
        uri.push_str(rest);

        Ok(uri)
    }
}
