use crate::RouterError;
use http::Method;

/// The set of HTTP methods a route accepts.
///
/// An empty set is *open*: it matches every method. Non-empty sets match only
/// the methods they contain. Method names entering through [`MethodSet::from_names`]
/// are normalized to uppercase before parsing, so `"get"` and `"GET"` are the
/// same method; nothing beyond that basic coercion is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    methods: Vec<Method>,
}

impl MethodSet {
    /// Creates an open set, matching any method.
    #[inline]
    pub fn any() -> Self {
        Self { methods: Vec::new() }
    }

    /// Parses method names into a set, uppercasing each name first.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidMethod`] when a name is not a valid method token.
    pub fn from_names<I, S>(names: I) -> Result<Self, RouterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = Vec::new();
        for name in names {
            let name = name.as_ref().to_ascii_uppercase();
            let method =
                Method::from_bytes(name.as_bytes()).map_err(|_| RouterError::invalid_method(&name))?;
            if !methods.contains(&method) {
                methods.push(method);
            }
        }
        Ok(Self { methods })
    }

    /// Returns true if the set is open or contains `method`.
    #[inline]
    pub fn matches(&self, method: &Method) -> bool {
        self.methods.is_empty() || self.methods.contains(method)
    }

    /// Returns true if this set matches any method.
    #[inline]
    pub fn is_any(&self) -> bool {
        self.methods.is_empty()
    }

    /// Returns the number of methods in the set, zero for an open set.
    #[inline]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns true if the set holds no explicit methods (i.e. it is open).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }
}

impl From<Method> for MethodSet {
    fn from(method: Method) -> Self {
        Self { methods: vec![method] }
    }
}

impl From<Vec<Method>> for MethodSet {
    fn from(methods: Vec<Method>) -> Self {
        methods.into_iter().collect()
    }
}

impl<const N: usize> From<[Method; N]> for MethodSet {
    fn from(methods: [Method; N]) -> Self {
        methods.into_iter().collect()
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut methods = Vec::new();
        for method in iter {
            if !methods.contains(&method) {
                methods.push(method);
            }
        }
        Self { methods }
    }
}
