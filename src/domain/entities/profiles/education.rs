use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 학력 항목 (사용자당 여러 개)
///
/// 항목마다 독립된 식별자를 갖지만 소유 사용자 밖에서는 의미가 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub level: String,
    pub school_name: String,
    #[serde(default)]
    pub subject: String,
    pub from_year: i32,
    /// 재학 중이면 `None`
    #[serde(default)]
    pub to_year: Option<i32>,
}

impl Education {
    pub fn new(
        user_id: ObjectId,
        level: String,
        school_name: String,
        subject: String,
        from_year: i32,
        to_year: Option<i32>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            level,
            school_name,
            subject,
            from_year,
            to_year,
        }
    }
}
