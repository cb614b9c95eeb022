//! 사용자 엔티티 정의
//!
//! `users` 컬렉션에 저장되는 사용자 문서와 유일성 제약 필드를 정의합니다.
//! `email`, `username`은 저장소의 유니크 인덱스로 보호되며 대소문자를 그대로 비교합니다.

use std::fmt;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `password_hash`는 항상 bcrypt 해시이며 평문이 저장되는 경로는 없습니다.
/// 외부 응답에는 [`UserResponse`](crate::domain::dto::users::response::UserResponse)
/// 프로젝션만 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자명 (unique)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 자기소개
    #[serde(default)]
    pub description: String,
    /// 아바타 이미지 참조 (URL 또는 파일 식별자)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 식별자는 저장소가 `create` 시점에 부여합니다.
    pub fn new(
        name: String,
        username: String,
        email: String,
        password_hash: String,
        description: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            username,
            email,
            password_hash,
            description,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

/// 유일성 제약이 걸린 사용자 필드
///
/// 중복 검사(사전 확인)와 저장소 유니크 인덱스 위반이 모두 이 값으로 보고됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateField {
    Email,
    Username,
}

impl DuplicateField {
    /// 클라이언트에 전달하는 "already exists" 안내 문구
    pub fn message(&self) -> &'static str {
        match self {
            DuplicateField::Email => "User with the same email already exists",
            DuplicateField::Username => "User with the same username already exists",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateField::Email => "email",
            DuplicateField::Username => "username",
        }
    }
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
