use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_house, delete_house, get_house, list_houses, update_house_color};
use crate::middleware::auth::{AdminAuth, require_admin};

pub fn routes(auth: AdminAuth) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_house))
        .route("/:id/color", put(update_house_color))
        .route("/:id", delete(delete_house))
        .route_layer(middleware::from_fn_with_state(auth, require_admin));

    Router::new()
        .route("/", get(list_houses))
        .route("/:id", get(get_house))
        .merge(protected)
}
