//! # 사용자 인증 워크플로우
//!
//! 회원가입, 로그인, 현재 사용자 조회, 계정 삭제를 담당합니다.
//!
//! ## 회원가입 흐름
//!
//! ```text
//! RegisterRequest
//!   │ 1. 입력 검증 (validator)            ── 실패 → 400
//!   │ 2. exists_by_email                  ── 있음 → AlreadyExists(Email)
//!   │ 3. exists_by_username               ── 있음 → AlreadyExists(Username)
//!   │ 4. bcrypt 해싱 (blocking pool)
//!   │ 5. IdentityStore::create            ── DuplicateKey → AlreadyExists(field)
//!   │ 6. 빈 Socials / Contact 생성         ── 실패 → 로그만 남기고 계속 (첫 조회 시 자가 복구)
//!   ▼ 7. 토큰 발급
//! Registered(AuthResponse)
//! ```
//!
//! 2-3단계의 사전 검사는 빠른 응답을 위한 것이고, 유일성의 최종 판정은 5단계
//! 저장소 제약입니다. 동시에 같은 이메일로 가입해도 하나만 성공하고
//! 나머지는 사전 검사와 같은 "already exists" 결과를 받습니다.
//!
//! 중복은 에러가 아니라 [`RegistrationOutcome::AlreadyExists`]로 표현되며,
//! HTTP 계층이 200 응답의 메시지로 전달합니다.
//!
//! ## 로그인 흐름
//!
//! 사용자명 또는 이메일로 조회한 뒤 비밀번호를 검증합니다. 사용자 없음과
//! 비밀번호 불일치는 같은 401 메시지로 응답해 계정 존재 여부를 드러내지 않습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{RegisterRequest, SignInRequest};
use crate::domain::dto::users::response::{AuthResponse, UserResponse};
use crate::domain::entities::users::{DuplicateField, User};
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::{IdentityStore, ProfileStore};
use crate::services::auth::{PasswordService, TokenService};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// 회원가입 결과
#[derive(Debug)]
pub enum RegistrationOutcome {
    Registered(AuthResponse),
    /// 이메일 또는 사용자명이 이미 사용 중 (에러가 아닌 정상 결과)
    AlreadyExists(DuplicateField),
}

pub struct UserService {
    identities: Arc<dyn IdentityStore>,
    profiles: Arc<dyn ProfileStore>,
    passwords: PasswordService,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        profiles: Arc<dyn ProfileStore>,
        passwords: PasswordService,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            identities,
            profiles,
            passwords,
            tokens,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegistrationOutcome> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if self.identities.exists_by_email(&request.email).await? {
            log::warn!("회원가입 거절 (이메일 중복): {}", request.email);
            return Ok(RegistrationOutcome::AlreadyExists(DuplicateField::Email));
        }

        if self.identities.exists_by_username(&request.username).await? {
            log::warn!("회원가입 거절 (사용자명 중복): {}", request.username);
            return Ok(RegistrationOutcome::AlreadyExists(DuplicateField::Username));
        }

        let password_hash = self.passwords.hash(&request.password).await?;

        let mut user = User::new(
            request.name,
            request.username,
            request.email,
            password_hash,
            request.description,
        );

        let user_id = match self.identities.create(user.clone()).await {
            Ok(id) => id,
            Err(AppError::DuplicateKey(field)) => {
                log::warn!("회원가입 경쟁에서 중복 감지 ({}): {}", field, user.username);
                return Ok(RegistrationOutcome::AlreadyExists(field));
            }
            Err(e) => return Err(e),
        };
        user.id = Some(user_id);

        if let Err(e) = self.create_child_records(&user_id).await {
            // 사용자는 이미 생성됨. 하위 문서는 첫 조회 시 다시 생성된다.
            log::error!(
                "하위 문서 생성 실패, 사용자 {}는 자가 복구 대기 상태: {}",
                user_id.to_hex(),
                e
            );
        }

        let token = self.tokens.issue_for(&user)?;

        log::info!("✅ 회원가입 완료: {} ({})", user.username, user_id.to_hex());

        Ok(RegistrationOutcome::Registered(AuthResponse::new(
            user,
            token,
            self.tokens.ttl_seconds(),
        )))
    }

    pub async fn sign_in(&self, request: SignInRequest) -> AppResult<AuthResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let Some(user) = self
            .identities
            .find_by_username_or_email(&request.username_or_email)
            .await?
        else {
            self.passwords.dummy_verify(&request.password).await;
            log::warn!("로그인 실패 (사용자 없음): {}", request.username_or_email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        if !self
            .passwords
            .verify(&request.password, &user.password_hash)
            .await?
        {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", user.username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue_for(&user)?;

        log::info!("로그인 성공: {}", user.username);

        Ok(AuthResponse::new(user, token, self.tokens.ttl_seconds()))
    }

    /// 토큰의 사용자 ID로 현재 사용자 조회
    pub async fn current_user(&self, auth: &AuthenticatedUser) -> AppResult<UserResponse> {
        Ok(UserResponse::from(self.load_user(&auth.user_id).await?))
    }

    pub async fn load_user(&self, id: &ObjectId) -> AppResult<User> {
        self.identities
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// 사용자 문서와 모든 하위 문서 영구 삭제
    pub async fn delete_account(&self, auth: &AuthenticatedUser) -> AppResult<()> {
        if !self.identities.delete(&auth.user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        self.profiles.delete_all_for_user(&auth.user_id).await?;

        log::warn!("계정 삭제 완료: {} ({})", auth.username, auth.user_id_hex());
        Ok(())
    }

    async fn create_child_records(&self, user_id: &ObjectId) -> AppResult<()> {
        self.profiles.create_socials(user_id).await?;
        self.profiles.create_contact(user_id).await?;
        Ok(())
    }
}
