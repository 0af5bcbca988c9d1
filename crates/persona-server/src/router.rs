//! Router assembly for the persona HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! tracing, CORS and panic-catching middleware layers.

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::FaultResponder;
use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax, and each resource path also
/// matches with a trailing slash. Unknown paths and known paths
/// with an unsupported method both get the 404 envelope. Panics inside any
/// handler become a 500 envelope whose detail depends on `state.mode`.
pub fn build_router(state: AppState) -> Router {
    let mode = state.mode;

    let collection = get(handlers::assistants::list_assistants)
        .post(handlers::assistants::create_assistant);
    let item = get(handlers::assistants::get_assistant)
        .put(handlers::assistants::replace_assistant)
        .patch(handlers::assistants::merge_assistant)
        .delete(handlers::assistants::delete_assistant);
    let by_role = get(handlers::assistants::assistants_by_role);

    Router::new()
        .route("/", get(handlers::banner::banner))
        .route("/api/assistants", collection.clone())
        .route("/api/assistants/", collection)
        .route("/api/assistants/{id}", item.clone())
        .route("/api/assistants/{id}/", item)
        .route("/api/assistants/role/{role}", by_role.clone())
        .route("/api/assistants/role/{role}/", by_role)
        .fallback(handlers::fallback::route_not_found)
        .method_not_allowed_fallback(handlers::fallback::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(FaultResponder::new(mode))),
        )
        .with_state(state)
}
