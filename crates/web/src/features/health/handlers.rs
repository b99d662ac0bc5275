use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use storage::HealthProfile;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/health/save",
    request_body = HealthProfile,
    responses(
        (status = 200, description = "Profile stored; a new id is assigned unless the body carries the id of a stored profile, which is then replaced in full", body = HealthProfile),
        (status = 400, description = "Body is not a valid health profile")
    ),
    tag = "health"
)]
pub async fn save_health_profile(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> WebResult<Response> {
    // Only a JSON object is a profile, never a positional array.
    let Json(fields) = payload.map_err(|rejection| WebError::BadRequest(rejection.body_text()))?;
    let profile: HealthProfile = serde_json::from_value(Value::Object(fields)).map_err(|e| {
        WebError::BadRequest(format!(
            "Failed to deserialize the JSON body into the target type: {}",
            e
        ))
    })?;

    let stored = services::save_health_profile(state.store.as_ref(), profile).await?;

    Ok(Json(stored).into_response())
}

#[utoipa::path(
    get,
    path = "/api/health/list",
    responses(
        (status = 200, description = "All stored profiles", body = Vec<HealthProfile>)
    ),
    tag = "health"
)]
pub async fn list_health_profiles(State(state): State<AppState>) -> WebResult<Response> {
    let profiles = services::list_health_profiles(state.store.as_ref()).await?;

    Ok(Json(profiles).into_response())
}

#[utoipa::path(
    get,
    path = "/api/health/{id}",
    params(
        ("id" = i64, Path, description = "Profile id")
    ),
    responses(
        (status = 200, description = "The profile, or `null` when no profile has this id", body = HealthProfile)
    ),
    tag = "health"
)]
pub async fn get_health_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    let profile = services::get_health_profile(state.store.as_ref(), id).await?;

    Ok(Json(profile).into_response())
}
