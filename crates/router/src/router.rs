//! The user-facing facade over collection, matcher and uri generation.

use crate::{Route, RouteCollection, RouteMatch, RouteMatcher, RouterError, UriGenerator};
use http::{Method, Request};
use std::collections::HashMap;

/// The routing facade: a [`RouteCollection`] composed with a [`RouteMatcher`]
/// and a [`UriGenerator`], behind a small find/uri vocabulary.
#[derive(Debug, Clone)]
pub struct Router<T> {
    routes: RouteCollection<T>,
    matcher: RouteMatcher,
    generator: UriGenerator,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            routes: RouteCollection::new(),
            matcher: RouteMatcher::new(),
            generator: UriGenerator::new(),
        }
    }

    /// Registers `route` after every route registered earlier.
    pub fn add(&mut self, route: Route<T>) -> &mut Self {
        self.routes.add(route);
        self
    }

    /// The underlying route collection.
    pub fn routes(&self) -> &RouteCollection<T> {
        &self.routes
    }

    /// Mutable access to the underlying route collection.
    pub fn routes_mut(&mut self) -> &mut RouteCollection<T> {
        &mut self.routes
    }

    /// Finds the first registered route accepting `method` + `path`.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotFound`] when no route accepts the request.
    pub fn find(&self, method: &Method, path: &str) -> Result<RouteMatch<'_, T>, RouterError> {
        self.matcher.match_request(&self.routes, method, path)
    }

    /// [`Router::find`] over an [`http::Request`].
    ///
    /// # Errors
    ///
    /// [`RouterError::NotFound`] when no route accepts the request.
    pub fn find_http<B>(&self, request: &Request<B>) -> Result<RouteMatch<'_, T>, RouterError> {
        self.matcher.match_http(&self.routes, request)
    }

    /// Generates the path for the route registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotFound`] when no route carries the name,
    /// [`RouterError::MissingParameter`] when the template needs a value the
    /// mapping does not supply.
    pub fn uri(&self, name: &str, params: &HashMap<String, String>) -> Result<String, RouterError> {
        let route = self.routes.get(name)?;
        self.generator.generate(route, params)
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Router;
    use crate::route::{get, post};
    use http::{Method, Request};
    use std::collections::HashMap;

    fn router() -> Router<&'static str> {
        let mut router = Router::new();
        router
            .add(get("/users", "users#index").with_name("user-list"))
            .add(
                get("/users/{id}", "users#show")
                    .with_constraint("id", r"\d+")
                    .with_name("user-detail"),
            )
            .add(post("/users", "users#create").with_name("user-create"));
        router
    }

    #[test]
    fn find_resolves_method_and_path() {
        let router = router();

        let matched = router.find(&Method::GET, "/users/42").unwrap();
        assert_eq!(*matched.route().callback(), "users#show");
        assert_eq!(matched.params().get("id"), Some("42"));

        let matched = router.find(&Method::POST, "/users").unwrap();
        assert_eq!(*matched.route().callback(), "users#create");
    }

    #[test]
    fn find_http_uses_the_request_accessors() {
        let router = router();
        let request =
            Request::builder().method(Method::GET).uri("/users").body(()).unwrap();

        let matched = router.find_http(&request).unwrap();
        assert_eq!(matched.route().name(), Some("user-list"));
    }

    #[test]
    fn uri_generates_from_a_named_route() {
        let router = router();
        let params = HashMap::from([("id".to_string(), "42".to_string())]);

        assert_eq!(router.uri("user-detail", &params).unwrap(), "/users/42");
        assert_eq!(router.uri("user-list", &HashMap::new()).unwrap(), "/users");
    }

    #[test]
    fn uri_for_unknown_name_is_not_found() {
        let router = router();
        let result = router.uri("missing", &HashMap::new());
        assert_eq!(result.unwrap_err().to_string(), "Route not found");
    }

    #[test]
    fn routes_mut_allows_method_set_updates() {
        let mut router = router();
        router.routes_mut().get_mut("user-list").unwrap().set_methods([Method::GET, Method::HEAD]);

        assert!(router.find(&Method::HEAD, "/users").is_ok());
    }
}
