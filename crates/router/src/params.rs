//! Path parameters captured from a matched request path.
//!
//! In the template `/users/{id}`, `id` is a path parameter; matching the path
//! `/users/42` captures `id = "42"`. Captures are returned by value as part of
//! the match result and never written back into the route, so one shared route
//! collection can serve any number of concurrent match operations.

/// An owned mapping from placeholder name to captured string, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    kind: PathParamsKind,
}

/// Internal enum to represent either empty parameters or actual captures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum PathParamsKind {
    #[default]
    None,
    Params(Vec<(String, String)>),
}

impl PathParams {
    /// Creates an empty PathParams instance with no parameters
    #[inline]
    pub fn empty() -> Self {
        Self { kind: PathParamsKind::None }
    }

    /// Creates a new PathParams instance from captured pairs
    /// If the captures are empty, returns an empty PathParams instance
    #[inline]
    pub(crate) fn new(params: Vec<(String, String)>) -> Self {
        if params.is_empty() {
            Self::empty()
        } else {
            Self { kind: PathParamsKind::Params(params) }
        }
    }

    /// Returns true if there are no path parameters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the number of path parameters
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Gets the value of a path parameter by its name
    /// Returns None if the parameter doesn't exist
    #[inline]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.as_slice().iter().find(|(name, _)| name == key).map(|(_, value)| value.as_str())
    }

    /// Iterates the captured `(name, value)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.as_slice().iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn as_slice(&self) -> &[(String, String)] {
        match &self.kind {
            PathParamsKind::None => &[],
            PathParamsKind::Params(params) => params,
        }
    }
}

impl FromIterator<(String, String)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::PathParams;

    #[test]
    fn empty_params() {
        let params = PathParams::empty();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.get("id"), None);
    }

    #[test]
    fn get_by_name() {
        let params = PathParams::new(vec![
            ("id".to_string(), "42".to_string()),
            ("slug".to_string(), "hello".to_string()),
        ]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("slug"), Some("hello"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn iteration_preserves_template_order() {
        let params = PathParams::new(vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }
}
