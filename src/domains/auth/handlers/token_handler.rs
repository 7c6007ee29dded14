use crate::domains::auth::models::{AccessTokenRequest, AccessTokenResponse};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use axum::{extract::State, http::StatusCode, Json};

/// Access Token 재발급 핸들러
/// Replace access token handler
#[utoipa::path(
    post,
    path = "/api/tokens/access-new",
    request_body = AccessTokenRequest,
    responses(
        (status = 200, description = "Access token replaced successfully", body = AccessTokenResponse),
        (status = 401, description = "Invalid, expired or rotated refresh token"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tokens"
)]
pub async fn replace_access_token(
    State(app_state): State<AppState>,
    Json(request): Json<AccessTokenRequest>,
) -> Result<Json<AccessTokenResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .auth_state
        .token_service
        .replace_access_token(request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
