use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 인증 미들웨어가 토큰에서 추출해 요청 확장(extensions)에 넣는 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// 토큰 `sub` 클레임 (사용자 식별 기준)
    pub user_id: ObjectId,

    /// 토큰 발급 시점의 사용자명
    pub username: String,
}

impl AuthenticatedUser {
    pub fn user_id_hex(&self) -> String {
        self.user_id.to_hex()
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어를 거치지 않은 라우트에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}
