//! # Password Service
//!
//! bcrypt 기반 비밀번호 해싱/검증입니다.
//!
//! - 해시마다 새 salt를 사용하므로 같은 비밀번호도 매번 다른 해시가 나옵니다.
//! - 검증은 bcrypt 내부에서 상수 시간 비교를 수행합니다.
//! - 불일치는 에러가 아니라 `Ok(false)`이고, 해시 형식이 깨진 경우만
//!   [`PasswordError::InvalidHashFormat`]입니다.
//!
//! 해싱은 CPU를 오래 점유하므로 요청 처리 경로에서는 `*_blocking` 대신
//! `web::block`으로 감싼 비동기 메서드를 사용합니다.

use std::time::Instant;

use actix_web::web;
use thiserror::Error;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("비밀번호 해싱 실패: {0}")]
    HashingFailed(String),

    #[error("저장된 비밀번호 해시 형식이 올바르지 않습니다: {0}")]
    InvalidHashFormat(String),
}

impl From<PasswordError> for AppError {
    fn from(error: PasswordError) -> Self {
        AppError::InternalError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` / `ENVIRONMENT` 기준 비용으로 생성
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash_blocking(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    pub fn verify_blocking(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(plaintext, hash).map_err(|e| PasswordError::InvalidHashFormat(e.to_string()))
    }

    /// 블로킹 스레드 풀에서 해싱
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let service = self.clone();
        let plaintext = plaintext.to_string();
        let started = Instant::now();

        let hashed = web::block(move || service.hash_blocking(&plaintext))
            .await
            .map_err(|e| AppError::InternalError(format!("해싱 작업 실행 실패: {}", e)))??;

        log::debug!("비밀번호 해싱 완료 (cost={}, {:?})", self.cost, started.elapsed());
        Ok(hashed)
    }

    /// 블로킹 스레드 풀에서 검증
    pub async fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        let service = self.clone();
        let plaintext = plaintext.to_string();
        let hash = hash.to_string();
        let started = Instant::now();

        let matched = web::block(move || service.verify_blocking(&plaintext, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("검증 작업 실행 실패: {}", e)))??;

        log::debug!("비밀번호 검증 완료 ({:?})", started.elapsed());
        Ok(matched)
    }

    /// 비교할 해시가 없을 때 검증과 같은 비용의 bcrypt 연산만 수행합니다.
    ///
    /// 없는 계정과 비밀번호 불일치의 응답 시간이 같아야 합니다.
    pub async fn dummy_verify(&self, plaintext: &str) {
        if let Err(e) = self.hash(plaintext).await {
            log::debug!("더미 검증 실패: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        PasswordService::new(PasswordConfig::MIN_COST)
    }

    #[test]
    fn test_hash_then_verify_round_trip() {
        let service = service();
        let hash = service.hash_blocking("secret123").expect("hash");

        assert_ne!(hash, "secret123");
        assert!(service.verify_blocking("secret123", &hash).expect("verify"));
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let service = service();
        let hash = service.hash_blocking("secret123").expect("hash");

        assert_eq!(service.verify_blocking("secret124", &hash), Ok(false));
        assert_eq!(service.verify_blocking("", &hash), Ok(false));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let service = service();
        let first = service.hash_blocking("secret123").expect("hash");
        let second = service.hash_blocking("secret123").expect("hash");

        assert_ne!(first, second);
        assert!(service.verify_blocking("secret123", &first).expect("verify"));
        assert!(service.verify_blocking("secret123", &second).expect("verify"));
    }

    #[test]
    fn test_malformed_hash_is_reported() {
        let service = service();
        assert!(matches!(
            service.verify_blocking("secret123", "not-a-bcrypt-hash"),
            Err(PasswordError::InvalidHashFormat(_))
        ));
    }

    #[actix_web::test]
    async fn test_async_wrappers_use_blocking_pool() {
        let service = service();
        let hash = service.hash("secret123").await.expect("hash");

        assert!(service.verify("secret123", &hash).await.expect("verify"));
        assert!(!service.verify("wrong", &hash).await.expect("verify"));
    }
}
