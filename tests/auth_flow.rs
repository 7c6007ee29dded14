// =====================================================
// 인증 플로우 통합 테스트
// =====================================================
// 회원가입 → 로그인 → 토큰 재발급 전체 흐름과
// refresh token rotation을 검증합니다.

mod common;
use common::*;

use task_api_server::domains::auth::models::AccessTokenRequest;
use task_api_server::shared::database::RefreshTokenRepository;
use task_api_server::shared::errors::ApiError;

/// 테스트: 회원가입 → 로그인 → 재발급 전체 흐름
#[tokio::test]
async fn test_registration_login_renewal_end_to_end() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let email = unique_email("flow");
    register_user(&app_state, &email, "password123").await;

    // 로그인: 두 토큰과 두 만료 시각
    let login = authenticate_user(&app_state, &email, "password123").await;
    assert!(!login.access_token.is_empty());
    assert!(!login.refresh_token.is_empty());
    assert_eq!(login.email, email);
    assert!(login.expires_at_access < login.expires_at_refresh);

    // 발급 직후 두 토큰 모두 자기 용도로는 유효
    let jwt_service = &app_state.auth_state.jwt_service;
    assert!(jwt_service.validate_access_token(&login.access_token));
    assert!(jwt_service.validate_refresh_token(&login.refresh_token));

    // 교차 검증은 거부 (서로 다른 비밀키)
    assert!(!jwt_service.validate_refresh_token(&login.access_token));
    assert!(!jwt_service.validate_access_token(&login.refresh_token));

    // iat가 달라지도록 1초 이상 대기 후 재발급
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let renewed = app_state
        .auth_state
        .token_service
        .replace_access_token(AccessTokenRequest {
            refresh_token: login.refresh_token.clone(),
        })
        .await
        .expect("Failed to renew access token");

    assert_eq!(renewed.email, email);
    assert!(jwt_service.validate_access_token(&renewed.access_token));
    assert_ne!(renewed.access_token, login.access_token);
}

/// 테스트: 중복 이메일 회원가입 거부
#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let email = unique_email("dup");
    register_user(&app_state, &email, "password123").await;

    let result = app_state
        .auth_state
        .auth_service
        .registration(task_api_server::domains::auth::models::RegistrationRequest {
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            email: email.clone(),
            password: "password456".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::LoginAlreadyExists { .. })));
}

/// 테스트: 잘못된 비밀번호는 인증 실패
#[tokio::test]
async fn test_wrong_password_rejected() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let email = unique_email("wrongpw");
    register_user(&app_state, &email, "password123").await;

    let result = app_state
        .auth_state
        .auth_service
        .authentication(task_api_server::domains::auth::models::AuthenticationRequest {
            email: email.clone(),
            password: "not-the-password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
}

/// 테스트: 미등록 이메일은 404
#[tokio::test]
async fn test_unknown_email_is_not_found() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let result = app_state
        .auth_state
        .auth_service
        .authentication(task_api_server::domains::auth::models::AuthenticationRequest {
            email: unique_email("ghost"),
            password: "password123".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::UserNotFoundByEmail { .. })));
}

/// 테스트: 재로그인 시 refresh token rotation
///
/// 두 번째 로그인 후에는 저장소에 두 번째 토큰만 남고,
/// 첫 번째 토큰은 서명이 유효해도 재발급이 거부됩니다.
#[tokio::test]
async fn test_second_login_rotates_refresh_token() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let email = unique_email("rotate");
    let user = register_user(&app_state, &email, "password123").await;

    let first_login = authenticate_user(&app_state, &email, "password123").await;

    // 토큰 문자열이 달라지도록 1초 이상 대기 후 재로그인
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second_login = authenticate_user(&app_state, &email, "password123").await;
    assert_ne!(first_login.refresh_token, second_login.refresh_token);

    // 저장소에는 행이 하나만 있고, 값은 두 번째 토큰
    let refresh_token_repo = RefreshTokenRepository::new(app_state.db.pool().clone());
    let stored = refresh_token_repo
        .find_by_user_id(user.id)
        .await
        .expect("Failed to find refresh token")
        .expect("Refresh token record missing");
    assert_eq!(stored.refresh_token, second_login.refresh_token);

    // 첫 번째 토큰은 여전히 암호학적으로는 유효하지만
    assert!(app_state.auth_state.jwt_service.validate_refresh_token(&first_login.refresh_token));

    // 저장된 값과 일치하지 않으므로 재발급은 거부됨
    let result = app_state
        .auth_state
        .token_service
        .replace_access_token(AccessTokenRequest {
            refresh_token: first_login.refresh_token.clone(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::AuthenticationFailed)));

    // 두 번째 토큰으로는 재발급 성공
    let renewed = app_state
        .auth_state
        .token_service
        .replace_access_token(AccessTokenRequest {
            refresh_token: second_login.refresh_token.clone(),
        })
        .await
        .expect("Failed to renew with the live refresh token");
    assert_eq!(renewed.email, email);
}

/// 테스트: 서명은 유효하지만 저장된 적 없는 refresh token은 거부
#[tokio::test]
async fn test_unmatched_refresh_token_rejected() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let email = unique_email("unmatched");
    let user = register_user(&app_state, &email, "password123").await;

    // 로그인 없이 codec으로 직접 발급 → 저장소에는 기록이 없음
    let crafted = app_state
        .auth_state
        .jwt_service
        .issue_refresh_token(&user)
        .expect("Failed to issue refresh token");
    assert!(app_state.auth_state.jwt_service.validate_refresh_token(&crafted.token));

    let result = app_state
        .auth_state
        .token_service
        .replace_access_token(AccessTokenRequest { refresh_token: crafted.token })
        .await;

    assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
}

/// 테스트: 깨진 refresh token은 인증 실패 (예외가 아니라)
#[tokio::test]
async fn test_garbage_refresh_token_rejected() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let result = app_state
        .auth_state
        .token_service
        .replace_access_token(AccessTokenRequest {
            refresh_token: "definitely-not-a-jwt".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
}

/// 테스트: 재발급 경로는 refresh token을 교체하지 않음 (고정 정책)
#[tokio::test]
async fn test_renewal_does_not_rotate_refresh_token() {
    let Some((app_state, _db)) = setup_test().await else { return };

    let email = unique_email("norotate");
    let user = register_user(&app_state, &email, "password123").await;
    let login = authenticate_user(&app_state, &email, "password123").await;

    app_state
        .auth_state
        .token_service
        .replace_access_token(AccessTokenRequest {
            refresh_token: login.refresh_token.clone(),
        })
        .await
        .expect("Failed to renew access token");

    // 저장된 refresh token은 그대로
    let refresh_token_repo = RefreshTokenRepository::new(app_state.db.pool().clone());
    let stored = refresh_token_repo
        .find_by_user_id(user.id)
        .await
        .expect("Failed to find refresh token")
        .expect("Refresh token record missing");
    assert_eq!(stored.refresh_token, login.refresh_token);

    // 같은 토큰으로 다시 재발급해도 여전히 성공
    app_state
        .auth_state
        .token_service
        .replace_access_token(AccessTokenRequest {
            refresh_token: login.refresh_token.clone(),
        })
        .await
        .expect("Refresh token should stay valid after renewal");
}
