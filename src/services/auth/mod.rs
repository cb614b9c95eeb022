//! 인증 기반 서비스 (비밀번호 해싱, 토큰 발급/검증)

pub mod password_service;
pub mod token_service;

pub use password_service::{PasswordError, PasswordService};
pub use token_service::{TokenError, TokenService};
