//! # Authentication Configuration Module
//!
//! 토큰 서명 키와 토큰 수명 설정을 관리합니다.
//!
//! 서명 키는 프로세스 시작 시 한 번만 읽어 [`JwtConfig`]에 담고,
//! 이후에는 [`TokenService`](crate::services::auth::TokenService)가 소유한 채
//! 변경 없이 사용합니다. 실행 중 키 교체는 지원하지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

use chrono::Duration;

/// 개발용 기본 서명 키 (운영 환경에서 사용 금지)
const DEFAULT_DEV_SECRET: &str = "your-secret-key";

/// 토큰 수명 상한 (10년)
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

/// JWT 서명/수명 설정
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    expiration_hours: i64,
}

impl JwtConfig {
    /// 수명은 `0..=MAX_EXPIRATION_HOURS` 범위로 잘라 저장합니다.
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: expiration_hours.clamp(0, MAX_EXPIRATION_HOURS),
        }
    }

    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// `JWT_SECRET`이 없으면 경고를 남기고 개발용 기본 키를 사용합니다.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_DEV_SECRET.to_string()
        });

        let expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(24);

        if expiration_hours > MAX_EXPIRATION_HOURS {
            log::warn!(
                "JWT_EXPIRATION_HOURS={} exceeds limit, using {}",
                expiration_hours,
                MAX_EXPIRATION_HOURS
            );
        }

        Self::new(secret, expiration_hours)
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }

    /// 발급 토큰의 기본 수명
    pub fn token_ttl(&self) -> Duration {
        Duration::try_hours(self.expiration_hours).unwrap_or_else(Duration::zero)
    }
}

// 서명 키가 로그에 찍히지 않도록 Debug를 직접 구현
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}
