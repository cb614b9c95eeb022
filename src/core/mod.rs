//! # Core Module
//!
//! 서비스 전반에서 공유하는 기반 기능입니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: `actix_web::ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 컨텍스트와 함께 변환

pub mod errors;

pub use errors::*;
