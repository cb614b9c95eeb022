//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델입니다.
//!
//! ### Entities vs Models
//! - **Entities** (`../entities/`): MongoDB 문서로 저장, 고유 ID 보유
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체
//!
//! ## 모듈 구성
//!
//! ### [`token`]
//! - `TokenClaims`: JWT 서명 대상 클레임 (`sub`, `username`, `iat`, `exp`, `jti`)
//! - `TokenPayload`: 검증 통과 후 워크플로우에 전달되는 값
//!
//! ### [`auth`]
//! - `AuthenticatedUser`: 인증 미들웨어가 요청 확장에 삽입하는 사용자 정보,
//!   핸들러 인자로 바로 추출 가능 (`FromRequest`)
//!
//! ```rust,ignore
//! async fn get_me(user: AuthenticatedUser) -> AppResult<HttpResponse> {
//!     let current = user_service.current_user(&user).await?;
//!     Ok(HttpResponse::Ok().json(current))
//! }
//! ```

pub mod auth;
pub mod token;
