//! # Services
//!
//! 비즈니스 규칙은 이 계층에만 있습니다. 저장소는 순수한 영속성 계약이고
//! 핸들러는 HTTP 변환만 담당합니다.
//!
//! - [`auth`]: 비밀번호 해싱, 토큰 발급/검증
//! - [`users`]: 회원가입/로그인 워크플로우, 프로필 워크플로우
//!
//! 서비스는 요청 간 공유 가변 상태가 없으며 `Arc`로 공유됩니다.

pub mod auth;
pub mod users;
