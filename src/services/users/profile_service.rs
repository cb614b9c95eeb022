//! # 프로필 워크플로우
//!
//! 인증된 사용자의 프로필 수정과 하위 문서(소셜, 연락처, 학력, 기술) 관리,
//! 공개 프로필 조회를 담당합니다.
//!
//! ## 부분 수정 규칙
//!
//! - 전달되지 않았거나 빈 값인 필드는 변경하지 않습니다.
//! - 사용자명/이메일이 현재 값과 다를 때만 중복 검사를 합니다.
//!   중복이면 아무것도 수정하지 않고 [`ProfileUpdateOutcome::AlreadyExists`]를 반환합니다.
//! - 저장 시점의 유니크 제약 위반도 같은 결과로 변환됩니다.
//! - 모든 필드가 비어 있으면 저장소에 쓰지 않습니다.
//!
//! ## 하위 문서 자가 복구
//!
//! 회원가입 중 하위 문서 생성이 실패했을 수 있으므로 1:1 문서(Socials, Contact)가
//! 없으면 조회 시점에 빈 문서를 만들어 반환합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::profiles::{
    AddSkillRequest, ContactResponse, EducationRequest, EducationResponse,
    PublicProfileResponse, ReplaceContactRequest, ReplaceEducationRequest, ReplaceSocialsRequest,
    SkillsResponse, SocialsResponse, UpdateAvatarRequest,
};
use crate::domain::dto::users::request::UpdateProfileRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::profiles::{Contact, Education, Socials, Skills};
use crate::domain::entities::users::{DuplicateField, User};
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::{IdentityStore, ProfileStore};
use crate::utils::string_utils::validate_required_string;

/// 프로필 수정 결과
#[derive(Debug)]
pub enum ProfileUpdateOutcome {
    Updated(UserResponse),
    /// 사용자명 또는 이메일이 이미 사용 중, 변경 없음
    AlreadyExists(DuplicateField),
    /// 저장소가 대상 문서를 찾지 못해 반영되지 않음
    NotPersisted,
}

fn validation_error(e: validator::ValidationErrors) -> AppError {
    AppError::ValidationError(e.to_string())
}

pub struct ProfileService {
    identities: Arc<dyn IdentityStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(identities: Arc<dyn IdentityStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            identities,
            profiles,
        }
    }

    async fn require_user(&self, auth: &AuthenticatedUser) -> AppResult<User> {
        self.identities
            .find_by_id(&auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn update_profile(
        &self,
        auth: &AuthenticatedUser,
        request: UpdateProfileRequest,
    ) -> AppResult<ProfileUpdateOutcome> {
        request.validate().map_err(validation_error)?;

        let mut user = self.require_user(auth).await?;

        if let Some(username) = request.username.as_deref() {
            if username != user.username && self.identities.exists_by_username(username).await? {
                log::warn!("프로필 수정 거절 (사용자명 중복): {} → {}", user.username, username);
                return Ok(ProfileUpdateOutcome::AlreadyExists(DuplicateField::Username));
            }
        }

        if let Some(email) = request.email.as_deref() {
            if email != user.email && self.identities.exists_by_email(email).await? {
                log::warn!("프로필 수정 거절 (이메일 중복): {}", user.username);
                return Ok(ProfileUpdateOutcome::AlreadyExists(DuplicateField::Email));
            }
        }

        if request.is_empty() {
            return Ok(ProfileUpdateOutcome::Updated(UserResponse::from(user)));
        }

        let UpdateProfileRequest {
            name,
            username,
            email,
            description,
        } = request;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(username) = username {
            user.username = username;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(description) = description {
            user.description = description;
        }
        user.touch();

        match self.identities.update(&user).await {
            Ok(true) => {
                log::info!("프로필 수정 완료: {}", user.username);
                Ok(ProfileUpdateOutcome::Updated(UserResponse::from(user)))
            }
            Ok(false) => {
                log::error!("프로필 수정 대상 없음: {}", auth.user_id_hex());
                Ok(ProfileUpdateOutcome::NotPersisted)
            }
            Err(AppError::DuplicateKey(field)) => {
                log::warn!("프로필 수정 경쟁에서 중복 감지 ({}): {}", field, auth.user_id_hex());
                Ok(ProfileUpdateOutcome::AlreadyExists(field))
            }
            Err(e) => Err(e),
        }
    }

    /// 아바타 참조 설정/제거 (파일 업로드는 외부에서 처리)
    pub async fn update_avatar(
        &self,
        auth: &AuthenticatedUser,
        request: UpdateAvatarRequest,
    ) -> AppResult<UserResponse> {
        request.validate().map_err(validation_error)?;

        if !self
            .identities
            .update_avatar(&auth.user_id, request.avatar.as_deref())
            .await?
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(UserResponse::from(self.require_user(auth).await?))
    }

    // ── Socials ──────────────────────────────────────────────

    pub async fn get_socials(&self, auth: &AuthenticatedUser) -> AppResult<SocialsResponse> {
        self.require_user(auth).await?;
        Ok(SocialsResponse::from(self.socials_or_heal(&auth.user_id).await?))
    }

    pub async fn replace_socials(
        &self,
        auth: &AuthenticatedUser,
        request: ReplaceSocialsRequest,
    ) -> AppResult<SocialsResponse> {
        request.validate().map_err(validation_error)?;
        self.require_user(auth).await?;

        let links = Socials::normalize_links(request.into_links());
        self.profiles
            .update_socials_by_user_id(&auth.user_id, &links)
            .await?;

        Ok(SocialsResponse { links })
    }

    async fn socials_or_heal(&self, user_id: &ObjectId) -> AppResult<Socials> {
        if let Some(socials) = self.profiles.find_socials_by_user_id(user_id).await? {
            return Ok(socials);
        }

        log::warn!("Socials 문서 누락, 자가 복구: {}", user_id.to_hex());
        self.profiles.create_socials(user_id).await?;

        Ok(self
            .profiles
            .find_socials_by_user_id(user_id)
            .await?
            .unwrap_or_else(|| Socials::empty(*user_id)))
    }

    // ── Contact ──────────────────────────────────────────────

    pub async fn get_contact(&self, auth: &AuthenticatedUser) -> AppResult<ContactResponse> {
        self.require_user(auth).await?;

        let contact = match self.profiles.find_contact(&auth.user_id).await? {
            Some(contact) => contact,
            None => {
                log::warn!("Contact 문서 누락, 자가 복구: {}", auth.user_id_hex());
                self.profiles.create_contact(&auth.user_id).await?;
                self.profiles
                    .find_contact(&auth.user_id)
                    .await?
                    .unwrap_or_else(|| Contact::empty(auth.user_id))
            }
        };

        Ok(ContactResponse::from(contact))
    }

    pub async fn replace_contact(
        &self,
        auth: &AuthenticatedUser,
        request: ReplaceContactRequest,
    ) -> AppResult<ContactResponse> {
        request.validate().map_err(validation_error)?;
        self.require_user(auth).await?;

        let contact = Contact {
            phone: request.phone,
            website: request.website,
            location: request.location,
            public_email: request.public_email,
            ..Contact::empty(auth.user_id)
        };
        self.profiles.update_contact(&contact).await?;

        Ok(ContactResponse::from(contact))
    }

    // ── Education ────────────────────────────────────────────

    pub async fn list_education(
        &self,
        auth: &AuthenticatedUser,
    ) -> AppResult<Vec<EducationResponse>> {
        self.require_user(auth).await?;
        self.education_of(&auth.user_id).await
    }

    pub async fn add_education(
        &self,
        auth: &AuthenticatedUser,
        request: EducationRequest,
    ) -> AppResult<EducationResponse> {
        request.validate().map_err(validation_error)?;
        self.require_user(auth).await?;

        let mut education = Self::education_from(auth.user_id, request);
        let id = self.profiles.create_education(education.clone()).await?;
        education.id = Some(id);

        Ok(EducationResponse::from(education))
    }

    /// 학력 목록 전체 교체
    pub async fn replace_education(
        &self,
        auth: &AuthenticatedUser,
        request: ReplaceEducationRequest,
    ) -> AppResult<Vec<EducationResponse>> {
        request.validate().map_err(validation_error)?;
        self.require_user(auth).await?;

        let entries: Vec<Education> = request
            .education
            .into_iter()
            .map(|entry| Self::education_from(auth.user_id, entry))
            .collect();

        self.profiles
            .update_education_by_user_id(&auth.user_id, entries)
            .await?;

        self.education_of(&auth.user_id).await
    }

    /// 본인 소유 항목만 삭제. 다른 사용자의 항목이면 NotFound
    pub async fn delete_education(&self, auth: &AuthenticatedUser, id: &str) -> AppResult<()> {
        let education_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        if !self
            .profiles
            .delete_education_by_id(&auth.user_id, &education_id)
            .await?
        {
            return Err(AppError::NotFound("Education entry not found".to_string()));
        }

        Ok(())
    }

    async fn education_of(&self, user_id: &ObjectId) -> AppResult<Vec<EducationResponse>> {
        Ok(self
            .profiles
            .find_education_by_user_id(user_id)
            .await?
            .into_iter()
            .map(EducationResponse::from)
            .collect())
    }

    fn education_from(user_id: ObjectId, request: EducationRequest) -> Education {
        Education::new(
            user_id,
            request.level.trim().to_string(),
            request.school_name.trim().to_string(),
            request.subject.trim().to_string(),
            request.from_year,
            request.to_year,
        )
    }

    // ── Skills ───────────────────────────────────────────────

    pub async fn list_skills(&self, auth: &AuthenticatedUser) -> AppResult<SkillsResponse> {
        self.require_user(auth).await?;
        self.skills_of(&auth.user_id).await
    }

    /// 이미 있으면 변경 없음
    pub async fn add_skill(
        &self,
        auth: &AuthenticatedUser,
        request: AddSkillRequest,
    ) -> AppResult<SkillsResponse> {
        let skill = Self::clean_skill(&request.skill)?;
        request.validate().map_err(validation_error)?;
        self.require_user(auth).await?;

        self.profiles.add_skill_to_list(&auth.user_id, &skill).await?;
        self.skills_of(&auth.user_id).await
    }

    /// 없으면 변경 없음
    pub async fn remove_skill(
        &self,
        auth: &AuthenticatedUser,
        skill: &str,
    ) -> AppResult<SkillsResponse> {
        let skill = Self::clean_skill(skill)?;
        self.require_user(auth).await?;

        self.profiles
            .delete_skill_from_list(&auth.user_id, &skill)
            .await?;
        self.skills_of(&auth.user_id).await
    }

    async fn skills_of(&self, user_id: &ObjectId) -> AppResult<SkillsResponse> {
        let skills = self
            .profiles
            .find_skills_by_user_id(user_id)
            .await?
            .unwrap_or_else(|| Skills::empty(*user_id));

        Ok(SkillsResponse::from(skills))
    }

    fn clean_skill(skill: &str) -> AppResult<String> {
        validate_required_string(skill, "기술 이름")
    }

    // ── Public profile ───────────────────────────────────────

    /// 비로그인 사용자용 집계 조회
    pub async fn public_profile(&self, username: &str) -> AppResult<PublicProfileResponse> {
        let user = self
            .identities
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        let socials = self
            .profiles
            .find_socials_by_user_id(&user_id)
            .await?
            .map(|s| s.links)
            .unwrap_or_default();
        let education = self.education_of(&user_id).await?;
        let skills = self.skills_of(&user_id).await?.skills;

        Ok(PublicProfileResponse {
            user: UserResponse::from(user),
            socials,
            education,
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::profiles::SocialLinkRequest;
    use crate::repositories::MemoryStore;

    /// 사전 중복 검사가 항상 통과하는 저장소. 검사와 저장 사이에 다른 요청이
    /// 같은 값을 차지한 상황을 재현합니다.
    struct StaleExistsCheck(Arc<MemoryStore>);

    #[async_trait::async_trait]
    impl IdentityStore for StaleExistsCheck {
        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
            self.0.find_by_username(username).await
        }
        async fn find_by_username_or_email(&self, identifier: &str) -> AppResult<Option<User>> {
            self.0.find_by_username_or_email(identifier).await
        }
        async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
            self.0.find_by_id(id).await
        }
        async fn exists_by_email(&self, _email: &str) -> AppResult<bool> {
            Ok(false)
        }
        async fn exists_by_username(&self, _username: &str) -> AppResult<bool> {
            Ok(false)
        }
        async fn create(&self, user: User) -> AppResult<ObjectId> {
            self.0.create(user).await
        }
        async fn update(&self, user: &User) -> AppResult<bool> {
            self.0.update(user).await
        }
        async fn update_avatar(&self, id: &ObjectId, avatar: Option<&str>) -> AppResult<bool> {
            self.0.update_avatar(id, avatar).await
        }
        async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
            self.0.delete(id).await
        }
    }

    fn service_with_store() -> (ProfileService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (ProfileService::new(store.clone(), store.clone()), store)
    }

    async fn seed_user(store: &MemoryStore, username: &str, email: &str) -> AuthenticatedUser {
        let user = User::new(
            username.to_string(),
            username.to_string(),
            email.to_string(),
            "$2b$04$hash".to_string(),
            "original".to_string(),
        );
        let user_id = store.create(user).await.expect("seeded");

        AuthenticatedUser {
            user_id,
            username: username.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_empty_update_leaves_user_unchanged() {
        let (service, store) = service_with_store();
        let auth = seed_user(&store, "ann1", "ann@x.com").await;
        let before = store.find_by_id(&auth.user_id).await.expect("ok").expect("user");

        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"name":"","username":"","email":"","description":""}"#)
                .expect("json");
        let outcome = service.update_profile(&auth, request).await.expect("ok");

        assert!(matches!(outcome, ProfileUpdateOutcome::Updated(_)));
        let after = store.find_by_id(&auth.user_id).await.expect("ok").expect("user");
        assert_eq!(before, after);
    }

    #[actix_web::test]
    async fn test_conflicting_username_is_rejected_without_mutation() {
        let (service, store) = service_with_store();
        seed_user(&store, "alice", "alice@x.com").await;
        let bob = seed_user(&store, "bob", "bob@x.com").await;

        let request = UpdateProfileRequest {
            username: Some("alice".to_string()),
            description: Some("changed".to_string()),
            ..Default::default()
        };
        let outcome = service.update_profile(&bob, request).await.expect("ok");

        assert!(matches!(
            outcome,
            ProfileUpdateOutcome::AlreadyExists(DuplicateField::Username)
        ));
        let stored = store.find_by_id(&bob.user_id).await.expect("ok").expect("bob");
        assert_eq!(stored.username, "bob");
        assert_eq!(stored.description, "original");
    }

    #[actix_web::test]
    async fn test_write_time_duplicate_becomes_already_exists() {
        let store = Arc::new(MemoryStore::new());
        let service = ProfileService::new(Arc::new(StaleExistsCheck(store.clone())), store.clone());
        seed_user(&store, "alice", "alice@x.com").await;
        let bob = seed_user(&store, "bob", "bob@x.com").await;

        let request = UpdateProfileRequest {
            name: Some("Bobby".to_string()),
            email: Some("alice@x.com".to_string()),
            ..Default::default()
        };
        let outcome = service.update_profile(&bob, request).await.expect("ok");

        assert!(matches!(
            outcome,
            ProfileUpdateOutcome::AlreadyExists(DuplicateField::Email)
        ));
        let stored = store.find_by_id(&bob.user_id).await.expect("ok").expect("bob");
        assert_eq!(stored.email, "bob@x.com");
        assert_eq!(stored.name, "bob");
    }

    #[actix_web::test]
    async fn test_blank_education_fields_are_rejected() {
        let (service, store) = service_with_store();
        let auth = seed_user(&store, "ann1", "ann@x.com").await;

        let request: EducationRequest =
            serde_json::from_str(r#"{"level":"   ","school_name":"  ","from_year":2015}"#)
                .expect("json");
        let result = service.add_education(&auth, request).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let request: ReplaceEducationRequest = serde_json::from_str(
            r#"{"education":[{"level":"Bachelor","school_name":" ","from_year":2015}]}"#,
        )
        .expect("json");
        let result = service.replace_education(&auth, request).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let stored = store.find_education_by_user_id(&auth.user_id).await.expect("ok");
        assert!(stored.is_empty());
    }

    #[actix_web::test]
    async fn test_conflicting_email_is_rejected() {
        let (service, store) = service_with_store();
        seed_user(&store, "alice", "alice@x.com").await;
        let bob = seed_user(&store, "bob", "bob@x.com").await;

        let request = UpdateProfileRequest {
            email: Some("alice@x.com".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            service.update_profile(&bob, request).await.expect("ok"),
            ProfileUpdateOutcome::AlreadyExists(DuplicateField::Email)
        ));
    }

    #[actix_web::test]
    async fn test_update_applies_only_supplied_fields() {
        let (service, store) = service_with_store();
        let auth = seed_user(&store, "ann1", "ann@x.com").await;

        let request = UpdateProfileRequest {
            email: Some("ann2@x.com".to_string()),
            // 자기 자신의 현재 사용자명은 중복이 아님
            username: Some("ann1".to_string()),
            ..Default::default()
        };
        let ProfileUpdateOutcome::Updated(user) =
            service.update_profile(&auth, request).await.expect("ok")
        else {
            panic!("expected update");
        };

        assert_eq!(user.email, "ann2@x.com");
        assert_eq!(user.username, "ann1");
        assert_eq!(user.description, "original");
    }

    #[actix_web::test]
    async fn test_missing_child_records_are_healed_on_first_access() {
        let (service, store) = service_with_store();
        let auth = seed_user(&store, "ann1", "ann@x.com").await;
        assert!(store
            .find_socials_by_user_id(&auth.user_id)
            .await
            .expect("ok")
            .is_none());

        let socials = service.get_socials(&auth).await.expect("healed");
        assert!(socials.links.is_empty());
        assert!(store
            .find_socials_by_user_id(&auth.user_id)
            .await
            .expect("ok")
            .is_some());

        let contact = service.get_contact(&auth).await.expect("healed");
        assert!(contact.phone.is_none());
        assert!(store.find_contact(&auth.user_id).await.expect("ok").is_some());
    }

    #[actix_web::test]
    async fn test_replace_socials_normalizes_links() {
        let (service, store) = service_with_store();
        let auth = seed_user(&store, "ann1", "ann@x.com").await;

        let request = ReplaceSocialsRequest {
            links: vec![
                SocialLinkRequest {
                    platform: "GitHub".to_string(),
                    url: "https://github.com/ann".to_string(),
                },
                SocialLinkRequest {
                    platform: "twitter".to_string(),
                    url: String::new(),
                },
            ],
        };
        let socials = service.replace_socials(&auth, request).await.expect("ok");

        assert_eq!(socials.links.len(), 1);
        assert_eq!(socials.links[0].platform, "github");
        assert_eq!(service.get_socials(&auth).await.expect("ok"), socials);
    }

    #[actix_web::test]
    async fn test_skills_add_is_idempotent_and_blank_is_rejected() {
        let (service, store) = service_with_store();
        let auth = seed_user(&store, "ann1", "ann@x.com").await;

        let add = |skill: &str| AddSkillRequest {
            skill: skill.to_string(),
        };

        service.add_skill(&auth, add(" rust ")).await.expect("ok");
        let skills = service.add_skill(&auth, add("rust")).await.expect("ok");
        assert_eq!(skills.skills, vec!["rust".to_string()]);

        assert!(matches!(
            service.add_skill(&auth, add("   ")).await,
            Err(AppError::ValidationError(_))
        ));

        let skills = service.remove_skill(&auth, "go").await.expect("noop");
        assert_eq!(skills.skills.len(), 1);
        let skills = service.remove_skill(&auth, "rust").await.expect("ok");
        assert!(skills.skills.is_empty());
    }

    #[actix_web::test]
    async fn test_education_delete_is_scoped_to_owner() {
        let (service, store) = service_with_store();
        let ann = seed_user(&store, "ann1", "ann@x.com").await;
        let bob = seed_user(&store, "bob", "bob@x.com").await;

        let entry = service
            .add_education(
                &ann,
                EducationRequest {
                    level: "Bachelor".to_string(),
                    school_name: "KAIST".to_string(),
                    subject: "CS".to_string(),
                    from_year: 2015,
                    to_year: Some(2019),
                },
            )
            .await
            .expect("added");

        assert!(matches!(
            service.delete_education(&bob, &entry.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_education(&ann, "not-an-id").await,
            Err(AppError::ValidationError(_))
        ));
        service.delete_education(&ann, &entry.id).await.expect("deleted");
        assert!(service.list_education(&ann).await.expect("ok").is_empty());
    }

    #[actix_web::test]
    async fn test_public_profile_aggregates_children() {
        let (service, store) = service_with_store();
        let auth = seed_user(&store, "ann1", "ann@x.com").await;
        service
            .add_skill(
                &auth,
                AddSkillRequest {
                    skill: "rust".to_string(),
                },
            )
            .await
            .expect("ok");

        let profile = service.public_profile("ann1").await.expect("found");
        assert_eq!(profile.user.username, "ann1");
        assert_eq!(profile.skills, vec!["rust".to_string()]);
        assert!(profile.socials.is_empty());

        assert!(matches!(
            service.public_profile("ghost").await,
            Err(AppError::NotFound(_))
        ));
    }
}
