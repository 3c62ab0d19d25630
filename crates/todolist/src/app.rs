use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::{
    handlers::todos::{create_todo, delete_todo, get_todo, list_todos, update_todo},
    middleware::{panic_response, request_span, require_basic_auth},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/manage-todos", get(list_todos))
        .route("/manage-todo", post(create_todo))
        .route(
            "/manage-todo/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        );

    with_middleware(routes, state)
}

/// Wrap `routes` in the middleware chain shared by every endpoint.
///
/// Outermost first: panic recovery, request logging, authentication.
fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(from_fn_with_state(state.auth.clone(), require_basic_auth))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
