use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{clear_event_results, create_event, delete_event, get_event, list_events};
use crate::middleware::auth::{AdminAuth, require_admin};

pub fn routes(auth: AdminAuth) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:id", delete(delete_event))
        .route("/:id/results", delete(clear_event_results))
        .route_layer(middleware::from_fn_with_state(auth, require_admin));

    Router::new()
        .route("/", get(list_events))
        .route("/:id", get(get_event))
        .merge(protected)
}
