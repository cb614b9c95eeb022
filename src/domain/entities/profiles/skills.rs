use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자별 기술 목록 (집합 의미, 중복 없음)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Skills {
    pub fn empty(user_id: ObjectId) -> Self {
        Self {
            id: None,
            user_id,
            skills: Vec::new(),
        }
    }

    /// 없을 때만 추가. 추가되었으면 `true`
    pub fn add(&mut self, skill: &str) -> bool {
        if self.contains(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// 있으면 제거. 제거되었으면 `true`
    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        before != self.skills.len()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
