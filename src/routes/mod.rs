//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별 스코프로 묶어 등록합니다.
//!
//! ## Public 라우트
//! - `GET /health`
//! - `POST /api/v1/auth/sign-up`, `POST /api/v1/auth/sign-in`
//! - `GET /api/v1/users/{username}`
//!
//! ## Protected 라우트 (`AuthMiddleware`)
//! - `/api/v1/me` 및 하위 경로 전체
//!
//! 서비스 인스턴스는 [`ApiServices`]로 묶어 `web::Data`로 등록합니다.
//!
//! ```rust,ignore
//! let services = ApiServices::new(users, profiles, tokens);
//! App::new().configure(|cfg| configure_all_routes(cfg, &services))
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenService;
use crate::services::users::{ProfileService, UserService};

/// 핸들러에 주입되는 서비스 묶음
#[derive(Clone)]
pub struct ApiServices {
    pub users: web::Data<UserService>,
    pub profiles: web::Data<ProfileService>,
    pub tokens: web::Data<TokenService>,
}

impl ApiServices {
    pub fn new(
        users: Arc<UserService>,
        profiles: Arc<ProfileService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users: web::Data::from(users),
            profiles: web::Data::from(profiles),
            tokens: web::Data::from(tokens),
        }
    }
}

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, services: &ApiServices) {
    cfg.app_data(services.users.clone())
        .app_data(services.profiles.clone())
        .app_data(services.tokens.clone())
        .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(handlers::path_error_handler));

    cfg.service(handlers::health_check);

    configure_auth_routes(cfg);
    configure_me_routes(cfg);
    configure_public_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::sign_up)
            .service(handlers::auth::sign_in),
    );
}

/// 현재 사용자 라우트. 전부 Bearer 토큰이 필요합니다.
///
/// ```bash
/// curl http://localhost:8080/api/v1/me -H "Authorization: Bearer eyJhbGciOi..."
/// ```
fn configure_me_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware)
            .service(handlers::users::get_me)
            .service(handlers::users::update_me)
            .service(handlers::users::delete_me)
            .service(handlers::profiles::update_avatar)
            .service(handlers::profiles::get_socials)
            .service(handlers::profiles::replace_socials)
            .service(handlers::profiles::get_contact)
            .service(handlers::profiles::replace_contact)
            .service(handlers::profiles::list_education)
            .service(handlers::profiles::add_education)
            .service(handlers::profiles::replace_education)
            .service(handlers::profiles::delete_education)
            .service(handlers::profiles::list_skills)
            .service(handlers::profiles::add_skill)
            .service(handlers::profiles::remove_skill),
    );
}

fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/users").service(handlers::users::public_profile));
}
