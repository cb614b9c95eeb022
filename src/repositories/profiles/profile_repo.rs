use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_bson};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::{collections, Database};
use crate::domain::entities::profiles::{Contact, Education, SocialLink, Socials, Skills};
use crate::repositories::profiles::profile_store::ProfileStore;

/// MongoDB 하위 문서 저장소 (`socials`, `contacts`, `educations`, `skills`)
pub struct ProfileRepository {
    db: Arc<Database>,
}

fn db_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

impl ProfileRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn socials(&self) -> Collection<Socials> {
        self.db.collection(collections::SOCIALS)
    }

    fn contacts(&self) -> Collection<Contact> {
        self.db.collection(collections::CONTACTS)
    }

    fn educations(&self) -> Collection<Education> {
        self.db.collection(collections::EDUCATIONS)
    }

    fn skills(&self) -> Collection<Skills> {
        self.db.collection(collections::SKILLS)
    }

    fn user_id_index(unique: bool) -> IndexModel {
        IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(unique)
                    .name(if unique { "user_id_unique" } else { "user_id" }.to_string())
                    .build(),
            )
            .build()
    }

    /// 1:1 하위 문서는 `user_id` 유니크 인덱스로 사용자당 하나만 허용
    pub async fn create_indexes(&self) -> AppResult<()> {
        self.socials()
            .create_index(Self::user_id_index(true))
            .await
            .map_err(db_error)?;
        self.contacts()
            .create_index(Self::user_id_index(true))
            .await
            .map_err(db_error)?;
        self.skills()
            .create_index(Self::user_id_index(true))
            .await
            .map_err(db_error)?;
        self.educations()
            .create_index(Self::user_id_index(false))
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn create_socials(&self, user_id: &ObjectId) -> AppResult<()> {
        self.socials()
            .update_one(
                doc! { "user_id": *user_id },
                doc! { "$setOnInsert": { "user_id": *user_id, "links": [] } },
            )
            .upsert(true)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn find_socials_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<Socials>> {
        self.socials()
            .find_one(doc! { "user_id": *user_id })
            .await
            .map_err(db_error)
    }

    async fn update_socials_by_user_id(
        &self,
        user_id: &ObjectId,
        links: &[SocialLink],
    ) -> AppResult<()> {
        let links = to_bson(links).context("소셜 링크 직렬화 실패")?;

        self.socials()
            .update_one(
                doc! { "user_id": *user_id },
                doc! { "$set": { "links": links } },
            )
            .upsert(true)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn create_contact(&self, user_id: &ObjectId) -> AppResult<()> {
        self.contacts()
            .update_one(
                doc! { "user_id": *user_id },
                doc! { "$setOnInsert": { "user_id": *user_id } },
            )
            .upsert(true)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn find_contact(&self, user_id: &ObjectId) -> AppResult<Option<Contact>> {
        self.contacts()
            .find_one(doc! { "user_id": *user_id })
            .await
            .map_err(db_error)
    }

    async fn update_contact(&self, contact: &Contact) -> AppResult<()> {
        self.contacts()
            .update_one(
                doc! { "user_id": contact.user_id },
                doc! {
                    "$set": {
                        "phone": contact.phone.as_deref(),
                        "website": contact.website.as_deref(),
                        "location": contact.location.as_deref(),
                        "public_email": contact.public_email.as_deref(),
                    }
                },
            )
            .upsert(true)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn find_education_by_user_id(&self, user_id: &ObjectId) -> AppResult<Vec<Education>> {
        let cursor = self
            .educations()
            .find(doc! { "user_id": *user_id })
            .sort(doc! { "from_year": 1 })
            .await
            .map_err(db_error)?;

        cursor.try_collect().await.map_err(db_error)
    }

    async fn create_education(&self, education: Education) -> AppResult<ObjectId> {
        let result = self
            .educations()
            .insert_one(&education)
            .await
            .map_err(db_error)?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })
    }

    async fn update_education_by_user_id(
        &self,
        user_id: &ObjectId,
        education: Vec<Education>,
    ) -> AppResult<()> {
        self.educations()
            .delete_many(doc! { "user_id": *user_id })
            .await
            .map_err(db_error)?;

        if education.is_empty() {
            return Ok(());
        }

        self.educations()
            .insert_many(education)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn delete_education_by_id(&self, user_id: &ObjectId, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .educations()
            .delete_one(doc! { "_id": *id, "user_id": *user_id })
            .await
            .map_err(db_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn find_skills_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<Skills>> {
        self.skills()
            .find_one(doc! { "user_id": *user_id })
            .await
            .map_err(db_error)
    }

    async fn add_skill_to_list(&self, user_id: &ObjectId, skill: &str) -> AppResult<bool> {
        let result = self
            .skills()
            .update_one(
                doc! { "user_id": *user_id },
                doc! { "$addToSet": { "skills": skill } },
            )
            .upsert(true)
            .await
            .map_err(db_error)?;

        Ok(result.modified_count > 0 || result.upserted_id.is_some())
    }

    async fn delete_skill_from_list(&self, user_id: &ObjectId, skill: &str) -> AppResult<bool> {
        let result = self
            .skills()
            .update_one(
                doc! { "user_id": *user_id },
                doc! { "$pull": { "skills": skill } },
            )
            .await
            .map_err(db_error)?;

        Ok(result.modified_count > 0)
    }

    async fn delete_all_for_user(&self, user_id: &ObjectId) -> AppResult<()> {
        let filter = doc! { "user_id": *user_id };

        self.socials()
            .delete_many(filter.clone())
            .await
            .map_err(db_error)?;
        self.contacts()
            .delete_many(filter.clone())
            .await
            .map_err(db_error)?;
        self.educations()
            .delete_many(filter.clone())
            .await
            .map_err(db_error)?;
        self.skills().delete_many(filter).await.map_err(db_error)?;

        Ok(())
    }
}
