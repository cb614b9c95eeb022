//! # MongoDB 연결 관리
//!
//! 클라이언트 생성과 연결 확인(ping), 컬렉션 이름, 드라이버 에러 분류를 담당합니다.
//!
//! ## 환경 변수
//!
//! - `MONGODB_URI` (기본값: `mongodb://localhost:27017`)
//! - `DATABASE_NAME` (기본값: `profile_service_dev`)

use std::env;

use log::info;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{options::ClientOptions, Client, Collection};

use crate::core::errors::{AppError, AppResult};

/// MongoDB 유니크 인덱스 위반 에러 코드
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// 컬렉션 이름
pub mod collections {
    pub const USERS: &str = "users";
    pub const SOCIALS: &str = "socials";
    pub const CONTACTS: &str = "contacts";
    pub const EDUCATIONS: &str = "educations";
    pub const SKILLS: &str = "skills";
}

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub async fn new() -> AppResult<Self> {
        let mongodb_uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name =
            env::var("DATABASE_NAME").unwrap_or_else(|_| "profile_service_dev".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some("profile_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// 유니크 인덱스 위반이면 위반 메시지를 반환합니다.
///
/// 메시지에는 인덱스 이름(`email_unique` 등)이 포함되어 어떤 필드가 충돌했는지
/// 구분하는 데 사용합니다.
pub fn duplicate_key_message(error: &mongodb::error::Error) -> Option<&str> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.as_str())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(command_error.message.as_str())
        }
        _ => None,
    }
}
