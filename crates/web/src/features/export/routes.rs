use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::export_table;
use crate::middleware::auth::{AdminAuth, require_admin};

pub fn routes(auth: AdminAuth) -> Router<Database> {
    Router::new()
        .route("/:file", get(export_table))
        .route_layer(middleware::from_fn_with_state(auth, require_admin))
}
