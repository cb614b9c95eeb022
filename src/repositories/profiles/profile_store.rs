use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::profiles::{Contact, Education, SocialLink, Socials, Skills};

/// 사용자 하위 문서(소셜, 연락처, 학력, 기술) 저장소 계약
///
/// 1:1 문서(`Socials`, `Contact`, `Skills`)의 생성은 멱등입니다.
/// 이미 있으면 아무것도 바꾸지 않으므로 가입 직후 생성과
/// 첫 조회 시 자가 복구 생성이 겹쳐도 안전합니다.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    // Socials
    async fn create_socials(&self, user_id: &ObjectId) -> AppResult<()>;

    async fn find_socials_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<Socials>>;

    /// 링크 목록 전체 교체 (문서가 없으면 생성)
    async fn update_socials_by_user_id(
        &self,
        user_id: &ObjectId,
        links: &[SocialLink],
    ) -> AppResult<()>;

    // Contact
    async fn create_contact(&self, user_id: &ObjectId) -> AppResult<()>;

    async fn find_contact(&self, user_id: &ObjectId) -> AppResult<Option<Contact>>;

    /// `contact.user_id` 기준 전체 교체 (문서가 없으면 생성)
    async fn update_contact(&self, contact: &Contact) -> AppResult<()>;

    // Education
    async fn find_education_by_user_id(&self, user_id: &ObjectId) -> AppResult<Vec<Education>>;

    async fn create_education(&self, education: Education) -> AppResult<ObjectId>;

    /// 사용자의 학력 목록 전체 교체
    async fn update_education_by_user_id(
        &self,
        user_id: &ObjectId,
        education: Vec<Education>,
    ) -> AppResult<()>;

    /// 소유자가 일치하는 항목만 삭제합니다. 삭제되었으면 `true`.
    async fn delete_education_by_id(&self, user_id: &ObjectId, id: &ObjectId) -> AppResult<bool>;

    // Skills
    async fn find_skills_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<Skills>>;

    /// 없을 때만 추가 (문서가 없으면 생성). 새로 추가되었으면 `true`.
    async fn add_skill_to_list(&self, user_id: &ObjectId, skill: &str) -> AppResult<bool>;

    /// 있으면 제거. 제거되었으면 `true`.
    async fn delete_skill_from_list(&self, user_id: &ObjectId, skill: &str) -> AppResult<bool>;

    /// 계정 삭제 시 모든 하위 문서 삭제
    async fn delete_all_for_user(&self, user_id: &ObjectId) -> AppResult<()>;
}
