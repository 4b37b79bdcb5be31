//! Route definition: one registered endpoint and its matching metadata.

use crate::method::MethodSet;
use crate::pattern::PathPattern;
use http::Method;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::warn;

/// One routable endpoint: accepted methods, a path template, an opaque
/// callback value, per-placeholder constraints and an optional name.
///
/// `Route` is generic over the callback type `T`. The matching engine never
/// invokes or inspects the callback; it only hands it back to the caller after
/// a successful match, so `T` can be a function pointer, a trait object, a
/// [`Callback`](crate::Callback) or any other value the dispatch layer
/// understands.
///
/// A route is immutable after construction apart from its method set (see
/// [`Route::set_methods`]). Captured path parameters are *not* stored on the
/// route: they are returned by value in the match result, which is what makes
/// sharing one route collection across concurrent requests sound.
#[derive(Debug, Clone)]
pub struct Route<T> {
    methods: MethodSet,
    path: String,
    callback: T,
    constraints: HashMap<String, String>,
    name: Option<String>,
    // compiled-pattern cache, filled on first match attempt
    pattern: OnceCell<Option<PathPattern>>,
}

impl<T> Route<T> {
    /// Creates an open route (any method) at `path`.
    ///
    /// The template is stored verbatim; it is compiled lazily on the first
    /// match attempt and the compiled pattern is cached for the lifetime of
    /// the route.
    pub fn new(path: impl Into<String>, callback: T) -> Self {
        Self {
            methods: MethodSet::any(),
            path: path.into(),
            callback,
            constraints: HashMap::new(),
            name: None,
            pattern: OnceCell::new(),
        }
    }

    /// Restricts the route to the given method set.
    pub fn with_methods(mut self, methods: impl Into<MethodSet>) -> Self {
        self.methods = methods.into();
        self
    }

    /// Adds a constraint fragment for one placeholder.
    ///
    /// The fragment is a caller-supplied regex body without anchors or capture
    /// groups of its own. Constraints naming placeholders that do not occur in
    /// the template are ignored.
    pub fn with_constraint(mut self, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.constraints.insert(name.into(), fragment.into());
        self
    }

    /// Replaces the whole constraint mapping.
    pub fn with_constraints(mut self, constraints: HashMap<String, String>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Names the route for lookup and uri generation. Unnamed routes are never
    /// retrievable by name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The accepted method set.
    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    /// Replaces the accepted method set.
    ///
    /// This is the one permitted post-construction mutation; the path template
    /// and constraints stay fixed for the lifetime of the route, which keeps
    /// the compiled-pattern cache sound.
    pub fn set_methods(&mut self, methods: impl Into<MethodSet>) {
        self.methods = methods.into();
    }

    /// The raw template string, unmodified.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The opaque callback value.
    pub fn callback(&self) -> &T {
        &self.callback
    }

    /// The placeholder constraint mapping.
    pub fn constraints(&self) -> &HashMap<String, String> {
        &self.constraints
    }

    /// The route name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the method set is open or contains `method`.
    #[inline]
    pub fn matches_method(&self, method: &Method) -> bool {
        self.methods.matches(method)
    }

    /// The compiled pattern for this route, compiled once on first use.
    ///
    /// A template whose constraints do not form a valid pattern yields `None`:
    /// this route then never matches, and routes after it are unaffected.
    pub(crate) fn compiled_pattern(&self) -> Option<&PathPattern> {
        self.pattern
            .get_or_init(|| match PathPattern::compile(&self.path, &self.constraints) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(path = %self.path, error = %e, "path template does not compile, route will never match");
                    None
                }
            })
            .as_ref()
    }
}

macro_rules! method_route {
    ($fn_name:ident, $method:ident) => {
        #[doc = concat!("Creates a route accepting only `", stringify!($method), "` at `path`.")]
        pub fn $fn_name<T>(path: impl Into<String>, callback: T) -> Route<T> {
            Route::new(path, callback).with_methods(Method::$method)
        }
    };
}

method_route!(get, GET);
method_route!(post, POST);
method_route!(put, PUT);
method_route!(delete, DELETE);
method_route!(head, HEAD);
method_route!(options, OPTIONS);
method_route!(connect, CONNECT);
method_route!(patch, PATCH);
method_route!(trace, TRACE);

/// Creates an open route, accepting any method at `path`.
pub fn any<T>(path: impl Into<String>, callback: T) -> Route<T> {
    Route::new(path, callback)
}

#[cfg(test)]
mod tests {
    use super::{Route, any, get};
    use http::Method;
    use std::collections::HashMap;

    #[test]
    fn open_route_matches_any_method() {
        let route = any("/health", ());
        assert!(route.methods().is_any());
        assert!(route.matches_method(&Method::GET));
        assert!(route.matches_method(&Method::DELETE));
    }

    #[test]
    fn method_helpers_restrict_the_set() {
        let route = get("/users", ());
        assert!(route.matches_method(&Method::GET));
        assert!(!route.matches_method(&Method::POST));
    }

    #[test]
    fn set_methods_replaces_the_set() {
        let mut route = get("/users", ());
        route.set_methods([Method::GET, Method::POST]);
        assert!(route.matches_method(&Method::POST));
        assert!(!route.matches_method(&Method::PUT));
    }

    #[test]
    fn path_is_stored_verbatim() {
        let route = Route::new("/users/{id}/", ());
        assert_eq!(route.path(), "/users/{id}/");
    }

    #[test]
    fn compiled_pattern_is_cached() {
        let route = get("/users/{id}", ()).with_constraint("id", r"\d+");
        let first = route.compiled_pattern().unwrap();
        let second = route.compiled_pattern().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn malformed_constraint_disables_the_route() {
        let route = get("/users/{id}", ()).with_constraint("id", "[unclosed");
        assert!(route.compiled_pattern().is_none());
    }

    #[test]
    fn constraints_accessor_exposes_the_mapping() {
        let route = get("/users/{id}", ())
            .with_constraints(HashMap::from([("id".to_string(), r"\d+".to_string())]));
        assert_eq!(route.constraints().get("id").map(String::as_str), Some(r"\d+"));
    }

    #[test]
    fn name_defaults_to_none() {
        assert_eq!(get("/users", ()).name(), None);
        assert_eq!(get("/users", ()).with_name("user-list").name(), Some("user-list"));
    }
}
