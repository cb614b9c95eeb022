//! 프로필 하위 문서(소셜, 연락처, 학력, 기술) DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
