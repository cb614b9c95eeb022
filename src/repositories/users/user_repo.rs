use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::{collections, duplicate_key_message, Database};
use crate::domain::entities::users::{DuplicateField, User};
use crate::repositories::users::identity_store::IdentityStore;

const EMAIL_INDEX: &str = "email_unique";
const USERNAME_INDEX: &str = "username_unique";

/// MongoDB `users` 컬렉션 저장소
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(collections::USERS)
    }

    /// 유니크 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 있으면 MongoDB가 무시합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(EMAIL_INDEX.to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(USERNAME_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 드라이버 에러를 AppError로 변환 (11000 → DuplicateKey)
    fn map_write_error(error: mongodb::error::Error) -> AppError {
        match duplicate_key_message(&error) {
            Some(message) => AppError::DuplicateKey(duplicate_field(message)),
            None => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// 11000 메시지의 인덱스 이름으로 충돌 필드를 판별합니다.
///
/// 키 값에 "username"이 들어간 이메일도 있으므로 인덱스 이름만 봅니다.
fn duplicate_field(message: &str) -> DuplicateField {
    if message.contains(USERNAME_INDEX) {
        DuplicateField::Username
    } else {
        DuplicateField::Email
    }
}

#[async_trait]
impl IdentityStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username_or_email(&self, identifier: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! {
                "$or": [
                    { "username": identifier },
                    { "email": identifier },
                ]
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "email": email })
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "username": username })
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn create(&self, user: User) -> AppResult<ObjectId> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(Self::map_write_error)?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let id = user
            .id
            .ok_or_else(|| {
                AppError::InternalError("저장되지 않은 사용자는 수정할 수 없습니다".to_string())
            })?;

        let result = self
            .collection()
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "name": &user.name,
                        "username": &user.username,
                        "email": &user.email,
                        "description": &user.description,
                        "avatar": user.avatar.as_deref(),
                        "updated_at": user.updated_at,
                    }
                },
            )
            .await
            .map_err(Self::map_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn update_avatar(&self, id: &ObjectId, avatar: Option<&str>) -> AppResult<bool> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "avatar": avatar, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
