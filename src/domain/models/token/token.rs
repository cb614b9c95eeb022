//! JWT 클레임 및 검증된 토큰 페이로드
//!
//! 토큰은 서버에 저장되지 않는 일시적인 값입니다. 폐기 목록이 없으므로
//! 검증은 서명과 만료 시각만으로 판정합니다.
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 사용자 ID (ObjectId hex)
/// - `username`: 발급 시점의 사용자명 (참고용, 사용자 식별에는 `sub` 사용)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID (UUID v4)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 검증을 통과한 토큰에서 꺼낸 정보
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPayload {
    pub subject_username: String,
    pub subject_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenPayload {
    /// 클레임의 타임스탬프를 `DateTime`으로 변환합니다.
    /// 표현할 수 없는 값이면 `None`.
    pub fn from_claims(claims: TokenClaims) -> Option<Self> {
        let issued_at = Utc.timestamp_opt(claims.iat, 0).single()?;
        let expires_at = Utc.timestamp_opt(claims.exp, 0).single()?;

        Some(Self {
            subject_username: claims.username,
            subject_id: claims.sub,
            issued_at,
            expires_at,
        })
    }
}
