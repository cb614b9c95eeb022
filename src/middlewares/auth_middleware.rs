//! # Bearer 인증 미들웨어
//!
//! 보호된 스코프에 `wrap`하면 모든 요청의 `Authorization` 헤더를 검증하고,
//! 성공 시 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 확장에 넣습니다. 실패하면 핸들러를 호출하지 않고 401을 반환합니다.
//!
//! 헤더 값은 토큰 그대로(`<token>`) 또는 `Bearer <token>` 형식 모두 허용합니다.
//! 토큰 검증에는 앱 데이터로 등록된 `web::Data<TokenService>`를 사용합니다.
//!
//! ```rust,ignore
//! web::scope("/me")
//!     .wrap(AuthMiddleware)
//!     .route("", web::get().to(get_me))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Duration;
    use mongodb::bson::oid::ObjectId;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    fn token_service() -> web::Data<TokenService> {
        web::Data::new(TokenService::new(JwtConfig::new("middleware-secret", 1)))
    }

    #[actix_web::test]
    async fn test_header_forms_and_failures() {
        let tokens = token_service();
        let user_id = ObjectId::new().to_hex();
        let valid = tokens
            .create_token("ann1", &user_id, Duration::hours(1))
            .expect("token");
        let expired = tokens
            .create_token("ann1", &user_id, Duration::zero())
            .expect("token");

        let app = test::init_service(
            App::new().app_data(tokens.clone()).service(
                web::resource("/whoami")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let cases = [
            (None, StatusCode::UNAUTHORIZED),
            (Some(valid.clone()), StatusCode::OK),
            (Some(format!("Bearer {}", valid)), StatusCode::OK),
            (Some(expired), StatusCode::UNAUTHORIZED),
            (Some("garbage".to_string()), StatusCode::UNAUTHORIZED),
        ];

        for (header, expected) in cases {
            let mut req = test::TestRequest::get().uri("/whoami");
            if let Some(value) = header.as_deref() {
                req = req.insert_header(("Authorization", value));
            }
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), expected, "header: {:?}", header);
        }
    }

    #[actix_web::test]
    async fn test_non_object_id_subject_is_rejected() {
        let tokens = token_service();
        let token = tokens
            .create_token("ann1", "not-an-object-id", Duration::hours(1))
            .expect("token");

        let app = test::init_service(
            App::new().app_data(tokens.clone()).service(
                web::resource("/whoami")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
