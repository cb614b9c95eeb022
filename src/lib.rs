//! 프로필 서비스 백엔드
//!
//! 사용자 계정(회원가입, 로그인)과 프로필(소셜 링크, 연락처, 학력, 기술)을
//! 관리하는 REST API 서비스입니다.
//!
//! # Features
//!
//! - **계정**: 회원가입, 사용자명/이메일 로그인, 계정 삭제
//! - **인증**: HS256 JWT 단일 토큰, bcrypt 비밀번호 해싱
//! - **프로필**: 부분 수정(빈 값은 변경 안 함), 하위 문서 자가 복구
//! - **저장소**: MongoDB 또는 인메모리 (`DATA_STORE=memory`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 비즈니스 규칙, 토큰/해시
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← IdentityStore / ProfileStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB │ Memory │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use profile_service_backend::routes::{configure_all_routes, ApiServices};
//!
//! let services = ApiServices::new(users, profiles, tokens);
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &services));
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
