//! # Repositories
//!
//! 저장소 계약(trait)과 구현입니다. 워크플로우는 `Arc<dyn IdentityStore>`,
//! `Arc<dyn ProfileStore>`만 알고 구체 구현은 `main`에서 선택합니다.
//!
//! | 계약 | MongoDB | 메모리 |
//! |------|---------|--------|
//! | [`IdentityStore`] | [`UserRepository`] | [`MemoryStore`] |
//! | [`ProfileStore`] | [`ProfileRepository`] | [`MemoryStore`] |
//!
//! 저장소에는 비즈니스 규칙이 없습니다. 단, 유일성 제약 위반은 반드시
//! `AppError::DuplicateKey`로 보고해야 합니다.

pub mod memory;
pub mod profiles;
pub mod users;

pub use memory::MemoryStore;
pub use profiles::{ProfileRepository, ProfileStore};
pub use users::{IdentityStore, UserRepository};
