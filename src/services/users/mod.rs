//! 사용자 워크플로우 (인증, 프로필)

pub mod profile_service;
pub mod user_service;

pub use profile_service::{ProfileService, ProfileUpdateOutcome};
pub use user_service::{RegistrationOutcome, UserService};
