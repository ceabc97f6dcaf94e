use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{delete_result, list_results, record_result};
use crate::middleware::auth::{AdminAuth, require_admin};

pub fn routes(auth: AdminAuth) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(record_result))
        .route("/:id", delete(delete_result))
        .route_layer(middleware::from_fn_with_state(auth, require_admin));

    Router::new()
        .route("/", get(list_results))
        .merge(protected)
}
