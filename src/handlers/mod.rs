//! # HTTP Request Handlers
//!
//! 핸들러는 HTTP 변환만 담당합니다. 요청 DTO를 역직렬화해 서비스에 넘기고,
//! 서비스 결과를 JSON 응답으로 바꿉니다. 검증과 비즈니스 규칙은 서비스 계층에 있습니다.
//!
//! ```text
//! Client ──► AuthMiddleware ──► Handler ──► Service ──► Store
//!                 │                 │
//!                 └ AuthenticatedUser └ AppError → JSON 에러 응답
//! ```
//!
//! - [`auth`]: 회원가입, 로그인
//! - [`users`]: 현재 사용자 조회/수정/삭제, 공개 프로필
//! - [`profiles`]: 아바타, 소셜, 연락처, 학력, 기술
//!
//! 서비스 인스턴스는 `web::Data`로 주입됩니다 ([`crate::routes`] 참고).

pub mod auth;
pub mod profiles;
pub mod users;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{get, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::entities::users::DuplicateField;

/// 중복 결과의 200 응답
///
/// ```json
/// { "success": false, "message": "User with the same email already exists", "conflict": "email" }
/// ```
pub(crate) fn already_exists_response(field: DuplicateField) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": false,
        "message": field.message(),
        "conflict": field.as_str(),
    }))
}

/// 잘못된 JSON 본문을 공통 에러 형식(400)으로 변환합니다.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패 {}: {}", req.path(), err);
    AppError::ValidationError(err.to_string()).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("경로 파라미터 파싱 실패 {}: {}", req.path(), err);
    AppError::ValidationError(err.to_string()).into()
}

/// 헬스체크
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
