use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 소셜 링크 하나 (`platform`은 소문자로 정규화된 자유 문자열)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// 사용자별 소셜 링크 문서 (사용자당 1개)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Socials {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

impl Socials {
    /// 회원가입 시 생성되는 빈 문서
    pub fn empty(user_id: ObjectId) -> Self {
        Self {
            id: None,
            user_id,
            links: Vec::new(),
        }
    }

    /// 링크 목록 정규화
    ///
    /// - 플랫폼 이름은 trim 후 소문자로 통일
    /// - 같은 플랫폼이 여러 번 나오면 마지막 값이 남음
    /// - URL이 비어 있으면 해당 플랫폼을 제거
    pub fn normalize_links(links: Vec<SocialLink>) -> Vec<SocialLink> {
        let mut normalized: Vec<SocialLink> = Vec::with_capacity(links.len());

        for link in links {
            let platform = link.platform.trim().to_lowercase();
            if platform.is_empty() {
                continue;
            }
            let url = link.url.trim().to_string();

            let existing = normalized.iter().position(|l| l.platform == platform);
            match (existing, url.is_empty()) {
                (Some(pos), true) => {
                    normalized.remove(pos);
                }
                (Some(pos), false) => normalized[pos].url = url,
                (None, true) => {}
                (None, false) => normalized.push(SocialLink { platform, url }),
            }
        }

        normalized
    }

    pub fn url_for(&self, platform: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.platform == platform)
            .map(|l| l.url.as_str())
    }
}
