//! 사용자 관련 엔티티

pub mod user;

pub use user::{DuplicateField, User};
