//! # Domain Layer Module
//!
//! 계정 백엔드의 도메인 타입을 모아 둔 계층입니다.
//! 비즈니스 규칙은 서비스 계층(워크플로우)에 있고, 여기에는 데이터 형태와
//! 그 형태에 붙은 작은 불변식(정규화, 연도 범위, 집합 연산)만 둡니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 (User, Socials, Contact, Education, Skills)
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 토큰 클레임, 인증된 사용자 정보
//!      │
//!      ▼
//! Application Layer (services: UserService, ProfileService)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! ## 소유 관계
//!
//! `User`가 하위 문서를 `user_id`로 독점 소유합니다. 하위 문서는 소유자 밖에서
//! 의미가 없으며 사용자 삭제 시 함께 삭제됩니다.
//!
//! ```text
//! User ─┬─ 1:1 ─ Socials  [(platform, url), ...]
//!       ├─ 1:1 ─ Contact  {phone, website, location, public_email}
//!       ├─ 1:N ─ Education {level, school_name, subject, from_year, to_year}
//!       └─ 1:1 ─ Skills   {"rust", "go", ...}
//! ```
//!
//! ## 외부 노출 규칙
//!
//! `User` 엔티티는 비밀번호 해시를 포함하므로 응답에 직접 쓰지 않습니다.
//! 항상 `dto::users::response::UserResponse`로 변환합니다.

pub mod dto;
pub mod entities;
pub mod models;
