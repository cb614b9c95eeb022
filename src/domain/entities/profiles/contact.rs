use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자별 연락처 문서 (사용자당 1개, 가입 시 빈 값으로 생성)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// 로그인 이메일과 별개로 공개하는 연락용 이메일
    #[serde(default)]
    pub public_email: Option<String>,
}

impl Contact {
    pub fn empty(user_id: ObjectId) -> Self {
        Self {
            id: None,
            user_id,
            phone: None,
            website: None,
            location: None,
            public_email: None,
        }
    }
}
