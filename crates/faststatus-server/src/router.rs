use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::SharedStore;

/// Build the axum router with all faststatus endpoints.
///
/// Resource paths are wildcards because a single request may address
/// several ids (`GET /0A/FF/1`); the handlers parse the segments.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route(
            "/",
            get(handler::root_handler).post(handler::post_resource_handler),
        )
        .route(
            "/*ids",
            get(handler::get_resources_handler)
                .put(handler::put_resource_handler)
                .delete(handler::delete_resources_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
