//! # Application Error Handling System
//!
//! 백엔드 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`로 전파된 에러가 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 형식/입력값 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 잘못된 자격 증명, 토큰 누락/만료/위조 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자/레코드 |
//! | `DuplicateKey` | 409 Conflict | 저장소 유니크 제약 위반 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 해싱/토큰 서명 등 인프라 오류 |
//!
//! 500 계열 응답에는 내부 에러 메시지를 노출하지 않습니다.
//! 원본 메시지는 `log::error!`로만 기록됩니다.
//!
//! 중복 사용자(이메일/사용자명)는 워크플로우 계층에서 에러가 아닌
//! "already exists" 결과로 변환되므로, `DuplicateKey`가 클라이언트까지
//! 도달하는 경우는 드뭅니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::entities::users::user::DuplicateField;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결 실패, 쿼리 실행 실패 등.
    ///
    /// ```rust,ignore
    /// collection.insert_one(doc).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 위반 (409)
    ///
    /// 저장소가 최종 판정자입니다. 사전 중복 검사를 통과한 동시 요청도
    /// 이 에러로 거절됩니다.
    #[error("Duplicate key: {0}")]
    DuplicateKey(DuplicateField),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "bad_request",
            AppError::AuthenticationError(_) => "unauthorized",
            AppError::NotFound(_) => "not_found",
            AppError::DuplicateKey(_) => "conflict",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "internal",
        }
    }

    /// 클라이언트에 노출해도 되는 메시지
    ///
    /// 인프라 에러는 고정 문구로 대체됩니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::DuplicateKey(field) => field.message().to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "error": self.code(),
            "message": self.public_message(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 지연 평가된 컨텍스트와 함께 `InternalError`로 변환합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
