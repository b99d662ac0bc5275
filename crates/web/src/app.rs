use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::save_health_profile,
        features::health::handlers::list_health_profiles,
        features::health::handlers::get_health_profile,
    ),
    components(schemas(storage::HealthProfile)),
    tags(
        (name = "health", description = "User health profile endpoints"),
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/health", features::health::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
