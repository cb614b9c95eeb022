//! 프로필 하위 문서 핸들러 (`/api/v1/me/...`)
//!
//! 아바타, 소셜 링크, 연락처, 학력, 기술 목록을 다룹니다. 모두 인증이 필요하며
//! 변경 후 최신 상태를 그대로 돌려줍니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::profiles::{
    AddSkillRequest, EducationRequest, ReplaceContactRequest, ReplaceEducationRequest,
    ReplaceSocialsRequest, UpdateAvatarRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::ProfileService;

/// `{"avatar": null}` 또는 빈 문자열이면 아바타를 제거합니다.
#[put("/avatar")]
pub async fn update_avatar(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateAvatarRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update_avatar(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

// ── Socials ──────────────────────────────────────────────

#[get("/socials")]
pub async fn get_socials(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_socials(&user).await?))
}

#[put("/socials")]
pub async fn replace_socials(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<ReplaceSocialsRequest>,
) -> Result<HttpResponse, AppError> {
    let socials = service.replace_socials(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(socials))
}

// ── Contact ──────────────────────────────────────────────

#[get("/contact")]
pub async fn get_contact(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_contact(&user).await?))
}

#[put("/contact")]
pub async fn replace_contact(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<ReplaceContactRequest>,
) -> Result<HttpResponse, AppError> {
    let contact = service.replace_contact(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(contact))
}

// ── Education ────────────────────────────────────────────

#[get("/education")]
pub async fn list_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_education(&user).await?))
}

#[post("/education")]
pub async fn add_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.add_education(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/education")]
pub async fn replace_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<ReplaceEducationRequest>,
) -> Result<HttpResponse, AppError> {
    let entries = service.replace_education(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// 다른 사용자의 학력 ID는 404
#[delete("/education/{id}")]
pub async fn delete_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_education(&user, &id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Education deleted successfully",
    })))
}

// ── Skills ───────────────────────────────────────────────

#[get("/skills")]
pub async fn list_skills(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_skills(&user).await?))
}

#[post("/skills")]
pub async fn add_skill(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<AddSkillRequest>,
) -> Result<HttpResponse, AppError> {
    let skills = service.add_skill(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[delete("/skills/{skill}")]
pub async fn remove_skill(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    skill: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let skills = service.remove_skill(&user, &skill).await?;
    Ok(HttpResponse::Ok().json(skills))
}
