//! An ordered, iterable container of routes.

use crate::{Route, RouterError};
use std::slice;
use std::vec;

/// An ordered collection of [`Route`]s.
///
/// Insertion order is semantically significant: it is the precedence order the
/// matcher iterates in, so the first-registered route that fits a request wins.
/// Nothing is deduplicated; the caller controls uniqueness. When two routes
/// share a name, name lookup resolves to the first one added.
#[derive(Debug, Clone)]
pub struct RouteCollection<T> {
    routes: Vec<Route<T>>,
}

impl<T> RouteCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends `route` after every route registered earlier.
    pub fn add(&mut self, route: Route<T>) {
        self.routes.push(route);
    }

    /// Returns true if some route carries exactly this name.
    pub fn has(&self, name: &str) -> bool {
        self.routes.iter().any(|route| route.name() == Some(name))
    }

    /// Returns the first route (in insertion order) registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotFound`] when no route carries the name.
    pub fn get(&self, name: &str) -> Result<&Route<T>, RouterError> {
        self.routes.iter().find(|route| route.name() == Some(name)).ok_or(RouterError::NotFound)
    }

    /// Mutable counterpart of [`RouteCollection::get`], e.g. for
    /// [`Route::set_methods`].
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Route<T>, RouterError> {
        self.routes
            .iter_mut()
            .find(|route| route.name() == Some(name))
            .ok_or(RouterError::NotFound)
    }

    /// Removes and returns the first route registered under `name`; a no-op
    /// returning `None` when the name is absent.
    pub fn remove(&mut self, name: &str) -> Option<Route<T>> {
        let position = self.routes.iter().position(|route| route.name() == Some(name))?;
        Some(self.routes.remove(position))
    }

    /// Returns the number of routes in the collection.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the collection holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates the routes in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Route<T>> {
        self.routes.iter()
    }
}

impl<T> Default for RouteCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c, T> IntoIterator for &'c RouteCollection<T> {
    type Item = &'c Route<T>;
    type IntoIter = slice::Iter<'c, Route<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl<T> IntoIterator for RouteCollection<T> {
    type Item = Route<T>;
    type IntoIter = vec::IntoIter<Route<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<T> FromIterator<Route<T>> for RouteCollection<T> {
    fn from_iter<I: IntoIterator<Item = Route<T>>>(iter: I) -> Self {
        Self { routes: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::RouteCollection;
    use crate::RouterError;
    use crate::route::get;

    fn collection() -> RouteCollection<u32> {
        let mut routes = RouteCollection::new();
        routes.add(get("/users", 1).with_name("user-list"));
        routes.add(get("/users/{id}", 2).with_name("user-detail"));
        routes.add(get("/health", 3));
        routes
    }

    #[test]
    fn add_preserves_insertion_order() {
        let routes = collection();
        let paths: Vec<_> = routes.iter().map(|route| route.path()).collect();
        assert_eq!(paths, vec!["/users", "/users/{id}", "/health"]);
    }

    #[test]
    fn has_and_get_by_name() {
        let routes = collection();
        assert!(routes.has("user-list"));
        assert!(!routes.has("missing"));

        let route = routes.get("user-detail").unwrap();
        assert_eq!(route.path(), "/users/{id}");
    }

    #[test]
    fn get_unknown_name_is_not_found() {
        let routes = collection();
        let result = routes.get("missing");
        assert!(matches!(result, Err(RouterError::NotFound)));
        assert_eq!(result.unwrap_err().to_string(), "Route not found");
    }

    #[test]
    fn unnamed_routes_are_never_retrievable_by_name() {
        let routes = collection();
        assert!(routes.get("/health").is_err());
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_added() {
        let mut routes = RouteCollection::new();
        routes.add(get("/first", 1).with_name("dup"));
        routes.add(get("/second", 2).with_name("dup"));

        assert_eq!(routes.get("dup").unwrap().path(), "/first");
    }

    #[test]
    fn remove_takes_the_first_matching_route() {
        let mut routes = RouteCollection::new();
        routes.add(get("/first", 1).with_name("dup"));
        routes.add(get("/second", 2).with_name("dup"));

        let removed = routes.remove("dup").unwrap();
        assert_eq!(removed.path(), "/first");
        assert_eq!(routes.get("dup").unwrap().path(), "/second");
    }

    #[test]
    fn remove_missing_name_is_a_noop() {
        let mut routes = collection();
        assert!(routes.remove("missing").is_none());
        assert_eq!(routes.len(), 3);
    }

    #[test]
    fn iteration_is_restartable() {
        let routes = collection();
        assert_eq!(routes.iter().count(), 3);
        assert_eq!(routes.iter().count(), 3);
    }
}
