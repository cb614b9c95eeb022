use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

/// 사용자 문서 저장소 계약
///
/// 조회 결과가 없으면 `Ok(None)`을 반환하고, 워크플로우가 상황에 맞는 에러로
/// 변환합니다. 모든 비교는 대소문자를 구분하는 정확 일치입니다.
///
/// `create`/`update`는 유일성 제약의 최종 판정자입니다. 사전 `exists_*` 검사를
/// 통과했더라도 동시 요청과 충돌하면 `AppError::DuplicateKey`를 반환해야 합니다.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 사용자명 또는 이메일과 일치하는 사용자
    async fn find_by_username_or_email(&self, identifier: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    /// 새 사용자를 저장하고 부여된 식별자를 반환합니다.
    async fn create(&self, user: User) -> AppResult<ObjectId>;

    /// 변경 가능한 필드(name, username, email, description, avatar, updated_at)를
    /// 통째로 교체합니다. 대상이 없으면 `false`.
    async fn update(&self, user: &User) -> AppResult<bool>;

    async fn update_avatar(&self, id: &ObjectId, avatar: Option<&str>) -> AppResult<bool>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}
