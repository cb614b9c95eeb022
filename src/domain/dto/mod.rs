//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 타입입니다.
//!
//! ## 규칙
//!
//! - **Request**: `serde::Deserialize` + `validator::Validate`
//! - **Response**: `serde::Serialize`, 엔티티에서 `From`으로 변환
//! - 엔티티를 그대로 응답하지 않습니다. 특히 `User`는 항상
//!   [`UserResponse`](users::UserResponse)로 변환되어 비밀번호 해시가 빠집니다.
//!
//! ## 부분 수정 규칙
//!
//! 선택 필드는 `Option<String>`이며 `deserialize_optional_string`으로
//! 공백을 정리합니다. 빈 문자열은 `None`(변경 없음)으로 취급됩니다.
//!
//! ```rust,ignore
//! #[derive(Deserialize, Validate)]
//! pub struct UpdateProfileRequest {
//!     #[serde(default, deserialize_with = "deserialize_optional_string")]
//!     #[validate(email)]
//!     pub email: Option<String>,
//! }
//! ```

pub mod profiles;
pub mod users;
