//! 사용자 계정 DTO (회원가입, 로그인, 프로필 수정)

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
