//! # Token Service
//!
//! HS256 JWT 발급과 검증을 담당합니다.
//!
//! ## 검증 순서
//!
//! 1. 구조/헤더 파싱 (실패 시 [`TokenError::Malformed`])
//! 2. 서명 검증 (실패 시 [`TokenError::InvalidSignature`])
//! 3. 만료 확인: `now < exp`일 때만 유효 (아니면 [`TokenError::Expired`])
//!
//! 만료 확인은 `jsonwebtoken`의 내장 검사(leeway 포함)를 끄고 직접 수행합니다.
//! 기준 시각을 인자로 받는 `*_at` 메서드로 시계를 주입해 테스트할 수 있습니다.
//!
//! 서명 키는 생성 시 [`JwtConfig`]에서 받아 서비스 수명 동안 바뀌지 않습니다.
//! 서버 측 폐기 목록은 없습니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::models::token::{TokenClaims, TokenPayload};

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("토큰 서명이 올바르지 않습니다")]
    InvalidSignature,

    #[error("토큰이 만료되었습니다")]
    Expired,

    #[error("토큰 형식이 올바르지 않습니다")]
    Malformed,

    #[error("토큰 서명 실패: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidSignature | TokenError::Malformed => {
                AppError::AuthenticationError("Invalid token".to_string())
            }
            TokenError::Expired => AppError::AuthenticationError("Token expired".to_string()),
            TokenError::Signing(msg) => AppError::InternalError(format!("토큰 생성 실패: {}", msg)),
        }
    }
}

pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret());
        let decoding_key = DecodingKey::from_secret(config.secret());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// 기본 토큰 수명 (초)
    pub fn ttl_seconds(&self) -> i64 {
        self.config.token_ttl().num_seconds()
    }

    pub fn create_token(
        &self,
        subject_username: &str,
        subject_id: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.create_token_at(subject_username, subject_id, ttl, Utc::now())
    }

    /// `now` 시점에 발급된 토큰 생성 (만료 = `now + ttl`)
    pub fn create_token_at(
        &self,
        subject_username: &str,
        subject_id: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| TokenError::Signing("토큰 만료 시각 범위 초과".to_string()))?;

        let claims = TokenClaims {
            sub: subject_id.to_string(),
            username: subject_username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// 저장된 사용자에게 기본 수명의 토큰 발급
    pub fn issue_for(&self, user: &User) -> AppResult<String> {
        let subject_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        Ok(self.create_token(&user.username, &subject_id, self.config.token_ttl())?)
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        self.verify_token_at(token, Utc::now())
    }

    pub fn verify_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPayload, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        TokenPayload::from_claims(claims).ok_or(TokenError::Malformed)
    }

    /// `Authorization` 헤더 값에서 토큰 추출
    ///
    /// `Bearer ` 접두사가 있으면 제거하고, 없으면 값 전체를 토큰으로 봅니다.
    /// 비어 있으면 `None`.
    pub fn extract_token(header_value: &str) -> Option<&str> {
        let value = header_value.trim_start();
        let token = value
            .strip_prefix("Bearer ")
            .or_else(|| value.strip_prefix("bearer "))
            .unwrap_or(value)
            .trim();

        if token.is_empty() { None } else { Some(token) }
    }
}
