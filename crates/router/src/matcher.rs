//! The matching core: ordered, first-match-wins request resolution.
//!
//! The matcher performs a linear scan over the collection in insertion order.
//! That scan *is* the precedence rule: the route you registered first, that
//! fits, wins. Applications disambiguate overlapping templates (two routes at
//! the same path with different constraints, say) purely by registration
//! order. Replacing the scan with a trie or hash keyed by literal prefix would
//! have to preserve exactly this tie-breaking to be a valid substitute.

use crate::{PathParams, Route, RouteCollection, RouterError};
use http::{Method, Request};
use tracing::trace;

/// Resolves requests against a [`RouteCollection`].
///
/// The matcher itself is stateless; everything produced by a match operation
/// lives in the returned [`RouteMatch`]. One matcher can serve any number of
/// concurrent match operations over a shared collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteMatcher;

/// A successful match: the winning route plus the parameters captured from
/// the request path.
///
/// Captures are carried here by value instead of being written back into the
/// matched route, so matching never mutates shared state.
#[derive(Debug)]
pub struct RouteMatch<'c, T> {
    route: &'c Route<T>,
    params: PathParams,
}

impl<'c, T> RouteMatch<'c, T> {
    /// The matched route.
    pub fn route(&self) -> &'c Route<T> {
        self.route
    }

    /// The parameters captured from the request path.
    pub fn params(&self) -> &PathParams {
        &self.params
    }

    /// Splits the match into the route reference and the owned captures.
    pub fn into_parts(self) -> (&'c Route<T>, PathParams) {
        (self.route, self.params)
    }
}

impl RouteMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Resolves `method` + `path` against `routes`.
    ///
    /// Routes are tried in insertion order. For each candidate the method set
    /// is checked first (cheap reject before any pattern work); the compiled
    /// pattern is then matched against the whole path. The first route passing
    /// both checks wins and no further routes are examined. A route whose
    /// pattern failed to compile never matches and never disturbs the routes
    /// after it.
    ///
    /// The path is taken verbatim: no trailing-slash normalization and no
    /// query-string stripping happen here.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotFound`] when no route accepts the request.
    pub fn match_request<'c, T>(
        &self,
        routes: &'c RouteCollection<T>,
        method: &Method,
        path: &str,
    ) -> Result<RouteMatch<'c, T>, RouterError> {
        for route in routes {
            if !route.matches_method(method) {
                continue;
            }

            let Some(pattern) = route.compiled_pattern() else {
                continue;
            };

            if let Some(params) = pattern.matches(path) {
                trace!(%method, path, route = route.path(), "route matched");
                return Ok(RouteMatch { route, params });
            }
        }

        trace!(%method, path, "no route matched");
        Err(RouterError::NotFound)
    }

    /// Resolves an [`http::Request`]; its method and uri path are the only two
    /// accessors this engine reads.
    pub fn match_http<'c, T, B>(
        &self,
        routes: &'c RouteCollection<T>,
        request: &Request<B>,
    ) -> Result<RouteMatch<'c, T>, RouterError> {
        self.match_request(routes, request.method(), request.uri().path())
    }
}
