//! 회원가입/로그인 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/auth/sign-up` | 회원가입, 토큰 발급 |
//! | `POST` | `/api/v1/auth/sign-in` | 사용자명 또는 이메일로 로그인 |
//!
//! 중복 가입은 에러가 아니라 `success: false`인 200 응답입니다.

use actix_web::{post, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{RegisterRequest, SignInRequest};
use crate::handlers::already_exists_response;
use crate::services::users::{RegistrationOutcome, UserService};

/// 회원가입
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/sign-up \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","username":"ann1","email":"ann@x.com","password":"secret123"}'
/// ```
///
/// 성공 시:
/// ```json
/// { "success": true, "message": "User created successfully", "token": "...", "user": { ... } }
/// ```
#[post("/sign-up")]
pub async fn sign_up(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    match service.register(payload.into_inner()).await? {
        RegistrationOutcome::Registered(auth) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "User created successfully",
            "token": auth.token,
            "token_type": auth.token_type,
            "expires_in": auth.expires_in,
            "user": auth.user,
        }))),
        RegistrationOutcome::AlreadyExists(field) => Ok(already_exists_response(field)),
    }
}

/// 로그인
///
/// `usernameOrEmail`은 사용자명과 먼저 비교하고 그다음 이메일과 비교합니다.
/// 실패 원인(사용자 없음, 비밀번호 불일치)은 응답에서 구분되지 않습니다.
#[post("/sign-in")]
pub async fn sign_in(
    service: web::Data<UserService>,
    payload: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    let auth = service.sign_in(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Login successfully",
        "token": auth.token,
        "token_type": auth.token_type,
        "expires_in": auth.expires_in,
        "user": auth.user,
    })))
}
