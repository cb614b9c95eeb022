//! 사용자 요청 DTO
//!
//! 모든 요청은 `validator::Validate`를 구현하며 핸들러가 서비스 호출 전에 검증합니다.

pub mod register_request;
pub mod sign_in_request;
pub mod update_profile_request;

pub use register_request::RegisterRequest;
pub use sign_in_request::SignInRequest;
pub use update_profile_request::UpdateProfileRequest;
