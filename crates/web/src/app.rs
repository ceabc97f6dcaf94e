use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::middleware::auth::{AdminAuth, ApiKeys};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::standings::handlers::get_standings,
        features::houses::handlers::list_houses,
        features::houses::handlers::get_house,
        features::houses::handlers::create_house,
        features::houses::handlers::update_house_color,
        features::houses::handlers::delete_house,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::delete_event,
        features::events::handlers::clear_event_results,
        features::results::handlers::list_results,
        features::results::handlers::record_result,
        features::results::handlers::delete_result,
        features::settings::handlers::set_admin_pin,
        features::export::handlers::export_table,
    ),
    components(
        schemas(
            storage::dto::standings::StandingsResponse,
            storage::dto::standings::StandingsEntry,
            storage::dto::standings::StandingsRow,
            storage::dto::standings::MedalTotals,
            storage::dto::house::CreateHouseRequest,
            storage::dto::house::UpdateHouseColorRequest,
            storage::dto::event::CreateEventRequest,
            storage::dto::result::RecordResultRequest,
            storage::dto::result::ResultListing,
            storage::dto::result::ClearResultsResponse,
            storage::dto::settings::SetAdminPinRequest,
            storage::models::House,
            storage::models::Event,
            storage::models::EventResult,
        )
    ),
    tags(
        (name = "standings", description = "Live house standings"),
        (name = "houses", description = "Sports houses"),
        (name = "events", description = "Sports-day events and their points schedules"),
        (name = "results", description = "Recorded placements"),
        (name = "settings", description = "Administration settings"),
        (name = "export", description = "CSV backups"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API key or admin PIN")
                        .build(),
                ),
            )
        }
    }
}

pub fn build_app(db: Database, api_keys: ApiKeys) -> Router {
    let auth = AdminAuth::new(db.clone(), api_keys);

    let api = Router::new()
        .nest("/standings", features::standings::routes::routes())
        .nest("/houses", features::houses::routes::routes(auth.clone()))
        .nest("/events", features::events::routes::routes(auth.clone()))
        .nest("/results", features::results::routes::routes(auth.clone()))
        .nest("/settings", features::settings::routes::routes(auth.clone()))
        .nest("/export", features::export::routes::routes(auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db)
}
