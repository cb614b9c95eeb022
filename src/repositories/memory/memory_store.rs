//! # In-Memory Store
//!
//! `IdentityStore`와 `ProfileStore`를 프로세스 메모리로 구현합니다.
//! MongoDB 유니크 인덱스와 같은 제약(이메일, 사용자명, 1:1 하위 문서)을 강제하며,
//! 유일성 검사와 삽입은 하나의 쓰기 락 안에서 수행되어 동시 가입 경쟁에서도
//! 정확히 하나만 성공합니다.
//!
//! `DATA_STORE=memory`로 실행하거나 테스트에서 사용합니다.
//! 재시작하면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::profiles::{Contact, Education, SocialLink, Socials, Skills};
use crate::domain::entities::users::{DuplicateField, User};
use crate::repositories::profiles::ProfileStore;
use crate::repositories::users::IdentityStore;

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<ObjectId, User>>,
    socials: RwLock<HashMap<ObjectId, Socials>>,
    contacts: RwLock<HashMap<ObjectId, Contact>>,
    educations: RwLock<Vec<Education>>,
    skills: RwLock<HashMap<ObjectId, Skills>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// `except` 이외의 사용자 중 이메일/사용자명이 겹치는지 검사
fn find_conflict(
    users: &HashMap<ObjectId, User>,
    candidate: &User,
    except: Option<ObjectId>,
) -> Option<DuplicateField> {
    users
        .values()
        .filter(|u| except.is_none() || u.id != except)
        .find_map(|u| {
            if u.email == candidate.email {
                Some(DuplicateField::Email)
            } else if u.username == candidate.username {
                Some(DuplicateField::Username)
            } else {
                None
            }
        })
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        read(&self.users).len()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users)
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_username_or_email(&self, identifier: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users)
            .values()
            .find(|u| u.username == identifier || u.email == identifier)
            .cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(read(&self.users).get(id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(read(&self.users).values().any(|u| u.email == email))
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(read(&self.users).values().any(|u| u.username == username))
    }

    async fn create(&self, mut user: User) -> AppResult<ObjectId> {
        let mut users = write(&self.users);

        if let Some(field) = find_conflict(&users, &user, None) {
            return Err(AppError::DuplicateKey(field));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id, user);

        Ok(id)
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let id = user.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자는 수정할 수 없습니다".to_string())
        })?;

        let mut users = write(&self.users);

        if let Some(field) = find_conflict(&users, user, Some(id)) {
            return Err(AppError::DuplicateKey(field));
        }

        match users.get_mut(&id) {
            Some(stored) => {
                stored.name = user.name.clone();
                stored.username = user.username.clone();
                stored.email = user.email.clone();
                stored.description = user.description.clone();
                stored.avatar = user.avatar.clone();
                stored.updated_at = user.updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_avatar(&self, id: &ObjectId, avatar: Option<&str>) -> AppResult<bool> {
        match write(&self.users).get_mut(id) {
            Some(stored) => {
                stored.avatar = avatar.map(str::to_string);
                stored.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(write(&self.users).remove(id).is_some())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn create_socials(&self, user_id: &ObjectId) -> AppResult<()> {
        write(&self.socials)
            .entry(*user_id)
            .or_insert_with(|| Socials {
                id: Some(ObjectId::new()),
                ..Socials::empty(*user_id)
            });
        Ok(())
    }

    async fn find_socials_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<Socials>> {
        Ok(read(&self.socials).get(user_id).cloned())
    }

    async fn update_socials_by_user_id(
        &self,
        user_id: &ObjectId,
        links: &[SocialLink],
    ) -> AppResult<()> {
        write(&self.socials)
            .entry(*user_id)
            .or_insert_with(|| Socials {
                id: Some(ObjectId::new()),
                ..Socials::empty(*user_id)
            })
            .links = links.to_vec();
        Ok(())
    }

    async fn create_contact(&self, user_id: &ObjectId) -> AppResult<()> {
        write(&self.contacts)
            .entry(*user_id)
            .or_insert_with(|| Contact {
                id: Some(ObjectId::new()),
                ..Contact::empty(*user_id)
            });
        Ok(())
    }

    async fn find_contact(&self, user_id: &ObjectId) -> AppResult<Option<Contact>> {
        Ok(read(&self.contacts).get(user_id).cloned())
    }

    async fn update_contact(&self, contact: &Contact) -> AppResult<()> {
        let mut contacts = write(&self.contacts);
        let id = contacts
            .get(&contact.user_id)
            .and_then(|c| c.id)
            .unwrap_or_else(ObjectId::new);

        contacts.insert(
            contact.user_id,
            Contact {
                id: Some(id),
                ..contact.clone()
            },
        );
        Ok(())
    }

    async fn find_education_by_user_id(&self, user_id: &ObjectId) -> AppResult<Vec<Education>> {
        let mut entries: Vec<Education> = read(&self.educations)
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.from_year);
        Ok(entries)
    }

    async fn create_education(&self, mut education: Education) -> AppResult<ObjectId> {
        let id = ObjectId::new();
        education.id = Some(id);
        write(&self.educations).push(education);
        Ok(id)
    }

    async fn update_education_by_user_id(
        &self,
        user_id: &ObjectId,
        education: Vec<Education>,
    ) -> AppResult<()> {
        let mut educations = write(&self.educations);
        educations.retain(|e| &e.user_id != user_id);
        educations.extend(education.into_iter().map(|mut e| {
            e.id = Some(ObjectId::new());
            e.user_id = *user_id;
            e
        }));
        Ok(())
    }

    async fn delete_education_by_id(&self, user_id: &ObjectId, id: &ObjectId) -> AppResult<bool> {
        let mut educations = write(&self.educations);
        let before = educations.len();
        educations.retain(|e| !(e.id.as_ref() == Some(id) && &e.user_id == user_id));
        Ok(educations.len() != before)
    }

    async fn find_skills_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<Skills>> {
        Ok(read(&self.skills).get(user_id).cloned())
    }

    async fn add_skill_to_list(&self, user_id: &ObjectId, skill: &str) -> AppResult<bool> {
        Ok(write(&self.skills)
            .entry(*user_id)
            .or_insert_with(|| Skills {
                id: Some(ObjectId::new()),
                ..Skills::empty(*user_id)
            })
            .add(skill))
    }

    async fn delete_skill_from_list(&self, user_id: &ObjectId, skill: &str) -> AppResult<bool> {
        Ok(write(&self.skills)
            .get_mut(user_id)
            .is_some_and(|skills| skills.remove(skill)))
    }

    async fn delete_all_for_user(&self, user_id: &ObjectId) -> AppResult<()> {
        write(&self.socials).remove(user_id);
        write(&self.contacts).remove(user_id);
        write(&self.skills).remove(user_id);
        write(&self.educations).retain(|e| &e.user_id != user_id);
        Ok(())
    }
}
