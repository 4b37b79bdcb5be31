//! Register a handful of routes and resolve requests against them.
//!
//! ```shell
//! cargo run --example resolve
//! ```

use http::Method;
use micro_route::{Callback, Router, get, post};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut router: Router<Callback<()>> = Router::new();
    router
        .add(
            get("/users", Callback::parse_named("UserController:index").unwrap())
                .with_name("user-list"),
        )
        .add(
            get("/users/{id}", Callback::parse_named("UserController:show").unwrap())
                .with_constraint("id", r"\d+")
                .with_name("user-detail"),
        )
        .add(
            post("/users", Callback::parse_named("UserController:create").unwrap())
                .with_name("user-create"),
        );

    let requests = [
        (Method::GET, "/users"),
        (Method::GET, "/users/42"),
        (Method::GET, "/users/zava"),
        (Method::POST, "/users"),
        (Method::DELETE, "/users/42"),
    ];

    for (method, path) in requests {
        match router.find(&method, path) {
            Ok(matched) => info!(
                %method,
                path,
                callback = %matched.route().callback(),
                params = ?matched.params(),
                "matched"
            ),
            Err(e) => warn!(%method, path, error = %e, "no match"),
        }
    }

    let params = std::collections::HashMap::from([("id".to_string(), "42".to_string())]);
    info!(uri = %router.uri("user-detail", &params).unwrap(), "generated from 'user-detail'");
}
