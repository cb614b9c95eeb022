//! # 사용자 핸들러
//!
//! 현재 사용자(`/api/v1/me`)와 공개 프로필(`/api/v1/users/{username}`) 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/me` | Bearer | 현재 사용자 조회 |
//! | `PUT` | `/me` | Bearer | 프로필 부분 수정 |
//! | `DELETE` | `/me` | Bearer | 계정 삭제 |
//! | `GET` | `/users/{username}` | - | 공개 프로필 |
//!
//! `/me` 하위 라우트는 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가
//! 요청 확장에 넣은 [`AuthenticatedUser`]를 추출해 사용합니다.

use actix_web::{delete, get, put, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UpdateProfileRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::already_exists_response;
use crate::services::users::{ProfileService, ProfileUpdateOutcome, UserService};

#[get("")]
pub async fn get_me(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = service.current_user(&user).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 프로필 부분 수정
///
/// 빈 문자열 필드는 "변경 안 함"으로 처리됩니다.
///
/// ```json
/// // 요청
/// { "email": "ann2@x.com", "username": "" }
/// // 응답 (200)
/// { "success": true, "message": "Profile updated successfully", "user": { ... } }
/// // 중복 (200)
/// { "success": false, "message": "User with the same email already exists", "conflict": "email" }
/// ```
#[put("")]
pub async fn update_me(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = service.update_profile(&user, payload.into_inner()).await?;

    let response = match outcome {
        ProfileUpdateOutcome::Updated(updated) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Profile updated successfully",
            "user": updated,
        })),
        ProfileUpdateOutcome::AlreadyExists(field) => already_exists_response(field),
        ProfileUpdateOutcome::NotPersisted => {
            log::error!("프로필 저장 실패: 사용자 {}", user.user_id_hex());
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to update profile",
            }))
        }
    };

    Ok(response)
}

#[delete("")]
pub async fn delete_me(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    service.delete_account(&user).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Account deleted successfully",
    })))
}

/// 공개 프로필 (인증 불필요)
#[get("/{username}")]
pub async fn public_profile(
    service: web::Data<ProfileService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.public_profile(&username).await?;
    Ok(HttpResponse::Ok().json(profile))
}
