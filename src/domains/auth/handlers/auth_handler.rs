use crate::domains::auth::models::{
    AuthenticationRequest, AuthenticationResponse, RegistrationRequest, RegistrationResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use axum::{extract::State, http::StatusCode, Json};

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/registration",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "User created successfully", body = RegistrationResponse),
        (status = 400, description = "Bad request (login already exists)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn registration(
    State(app_state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let response = app_state
        .auth_state
        .auth_service
        .registration(request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(response)))
}

// 로그인(인증) 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/authentication",
    request_body = AuthenticationRequest,
    responses(
        (status = 200, description = "Authentication successful", body = AuthenticationResponse),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn authentication(
    State(app_state): State<AppState>,
    Json(request): Json<AuthenticationRequest>,
) -> Result<Json<AuthenticationResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .auth_state
        .auth_service
        .authentication(request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
