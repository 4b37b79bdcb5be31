//! An ordered, pattern-aware HTTP route matching engine
//!
//! This crate resolves an incoming request (method + path) against a registered,
//! ordered set of routes and returns the matching route together with the path
//! parameters captured from the request, or a typed not-found error.
//!
//! Routes are tried strictly in registration order and the first route whose
//! method set and compiled path pattern both accept the request wins. This keeps
//! precedence between overlapping templates in the hands of the application:
//! register the more specific route first and it shadows the looser one, no
//! separate priority field needed.
//!
//! Path templates use `{name}` placeholders for variable segments. A placeholder
//! captures one or more non-slash characters by default; a per-placeholder
//! constraint (a regular-expression fragment) can narrow that down.
//!
//! The route callback is an opaque value: this crate never invokes or inspects
//! it, it only hands it back to the dispatch layer after a successful match.
//!
//! # Example
//!
//! ```
//! use http::Method;
//! use micro_route::{Router, get, post};
//!
//! let mut router = Router::new();
//! router.add(
//!     get("/users/{id}", "users#show")
//!         .with_constraint("id", r"\d+")
//!         .with_name("user-detail"),
//! );
//! router.add(post("/users", "users#create").with_name("user-create"));
//!
//! let matched = router.find(&Method::GET, "/users/42").unwrap();
//! assert_eq!(matched.route().name(), Some("user-detail"));
//! assert_eq!(matched.params().get("id"), Some("42"));
//!
//! // the constraint rejects a non-numeric segment
//! assert!(router.find(&Method::GET, "/users/zava").is_err());
//! ```

mod callback;
mod collection;
mod error;
mod generator;
mod matcher;
mod method;
mod params;
mod pattern;
mod route;
mod router;

pub use callback::Callback;
pub use collection::RouteCollection;
pub use error::RouterError;
pub use generator::UriGenerator;
pub use matcher::{RouteMatch, RouteMatcher};
pub use method::MethodSet;
pub use params::PathParams;
pub use pattern::PathPattern;
pub use route::Route;
pub use route::{any, connect, delete, get, head, options, patch, post, put, trace};
pub use router::Router;
