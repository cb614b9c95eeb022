//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 요청 문자열 정리와 필수값 검증

pub mod string_utils;
