use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 외부 노출용 사용자 프로젝션
///
/// `password_hash`는 포함되지 않습니다. 엔티티를 직접 직렬화해 응답하지 않고
/// 반드시 이 타입으로 변환해서 내보냅니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub description: String,
    pub avatar: Option<String>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            username,
            email,
            description,
            avatar,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            username,
            email,
            description,
            avatar,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 회원가입/로그인 성공 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    /// 토큰 유효 시간 (초)
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(user: User, token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: UserResponse::from(user),
        }
    }
}
