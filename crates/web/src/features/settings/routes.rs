use axum::{Router, middleware, routing::put};
use storage::Database;

use super::handlers::set_admin_pin;
use crate::middleware::auth::{AdminAuth, require_admin};

pub fn routes(auth: AdminAuth) -> Router<Database> {
    Router::new()
        .route("/admin-pin", put(set_admin_pin))
        .route_layer(middleware::from_fn_with_state(auth, require_admin))
}
