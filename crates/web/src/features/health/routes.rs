use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_health_profile, list_health_profiles, save_health_profile};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(save_health_profile))
        .route("/list", get(list_health_profiles))
        .route("/:id", get(get_health_profile))
}
