//! # Domain Entities
//!
//! MongoDB 컬렉션에 영속되는 도메인 객체입니다.
//!
//! | 엔티티 | 컬렉션 | 관계 |
//! |--------|--------|------|
//! | [`User`](users::User) | `users` | 루트 |
//! | [`Socials`](profiles::Socials) | `socials` | User 1:1 |
//! | [`Contact`](profiles::Contact) | `contacts` | User 1:1 |
//! | [`Education`](profiles::Education) | `educations` | User 1:N |
//! | [`Skills`](profiles::Skills) | `skills` | User 1:1 (집합) |
//!
//! 하위 문서는 `user_id` 외래 키로 사용자에 종속되며,
//! 사용자 삭제 시 함께 삭제됩니다.

pub mod profiles;
pub mod users;

pub use profiles::*;
pub use users::*;
