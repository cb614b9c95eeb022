//! HTTP 전 구간 흐름 테스트 (인메모리 저장소)

use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use profile_service_backend::config::JwtConfig;
use profile_service_backend::repositories::{IdentityStore, MemoryStore, ProfileStore};
use profile_service_backend::routes::{configure_all_routes, ApiServices};
use profile_service_backend::services::auth::{PasswordService, TokenService};
use profile_service_backend::services::users::{ProfileService, UserService};

fn services() -> ApiServices {
    let store = Arc::new(MemoryStore::new());
    let identities: Arc<dyn IdentityStore> = store.clone();
    let profiles: Arc<dyn ProfileStore> = store;
    let tokens = Arc::new(TokenService::new(JwtConfig::new("api-flow-secret", 1)));

    let users = Arc::new(UserService::new(
        identities.clone(),
        profiles.clone(),
        PasswordService::new(4),
        tokens.clone(),
    ));
    let profile_service = Arc::new(ProfileService::new(identities, profiles));

    ApiServices::new(users, profile_service, tokens)
}

macro_rules! init_app {
    ($services:expr) => {
        test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &$services))).await
    };
}

/// 회원가입 후 응답 본문을 반환합니다.
macro_rules! sign_up {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/sign-up")
            .set_json($body)
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

fn ann() -> Value {
    json!({
        "name": "Ann",
        "username": "ann1",
        "email": "ann@x.com",
        "password": "secret123",
        "description": ""
    })
}

fn token_of(body: &Value) -> String {
    body["token"].as_str().expect("token in response").to_string()
}

#[actix_web::test]
async fn test_register_fetch_update_fetch() {
    let services = services();
    let app = init_app!(services);

    let registered = sign_up!(app, ann());
    assert_eq!(registered["success"], true);
    assert_eq!(registered["message"], "User created successfully");
    assert_eq!(registered["user"]["username"], "ann1");
    assert!(registered["user"].get("password_hash").is_none());
    let token = token_of(&registered);

    // 토큰 그대로, 그리고 Bearer 접두사 모두 허용
    for header in [token.clone(), format!("Bearer {}", token)] {
        let req = test::TestRequest::get()
            .uri("/api/v1/me")
            .insert_header(("Authorization", header))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["username"], "ann1");
        assert_eq!(me["email"], "ann@x.com");
    }

    let req = test::TestRequest::put()
        .uri("/api/v1/me")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "email": "ann2@x.com", "username": "" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["success"], true);
    assert_eq!(updated["message"], "Profile updated successfully");
    assert_eq!(updated["user"]["email"], "ann2@x.com");

    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header(("Authorization", token))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["email"], "ann2@x.com");
    assert_eq!(me["username"], "ann1");
}

#[actix_web::test]
async fn test_duplicate_registration_is_soft_failure() {
    let services = services();
    let app = init_app!(services);

    sign_up!(app, ann());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/sign-up")
        .set_json(json!({
            "name": "Other",
            "username": "other",
            "email": "ann@x.com",
            "password": "secret123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["conflict"], "email");
    assert_eq!(body["message"], "User with the same email already exists");

    let body = sign_up!(
        app,
        json!({
            "name": "Other",
            "username": "ann1",
            "email": "other@x.com",
            "password": "secret123"
        })
    );
    assert_eq!(body["success"], false);
    assert_eq!(body["conflict"], "username");
}

#[actix_web::test]
async fn test_protected_routes_require_valid_token() {
    let services = services();
    let app = init_app!(services);

    let req = test::TestRequest::get().uri("/api/v1/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "unauthorized");

    for header in ["garbage", "Bearer ", "Bearer not.a.jwt"] {
        let req = test::TestRequest::get()
            .uri("/api/v1/me/skills")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header: {}", header);
    }

    // 다른 비밀키로 서명된 토큰
    let foreign = TokenService::new(JwtConfig::new("someone-else", 1))
        .create_token(
            "ann1",
            "507f1f77bcf86cd799439011",
            chrono::Duration::hours(1),
        )
        .expect("token");
    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header(("Authorization", foreign))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_sign_in_by_username_or_email() {
    let services = services();
    let app = init_app!(services);
    sign_up!(app, ann());

    for identifier in ["ann1", "ann@x.com"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/sign-in")
            .set_json(json!({ "usernameOrEmail": identifier, "password": "secret123" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true, "identifier: {}", identifier);
        assert_eq!(body["user"]["username"], "ann1");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    for (identifier, password) in [("ann1", "wrong-pass"), ("nobody", "secret123")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/sign-in")
            .set_json(json!({ "usernameOrEmail": identifier, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[actix_web::test]
async fn test_invalid_input_is_bad_request() {
    let services = services();
    let app = init_app!(services);

    let mut short_password = ann();
    short_password["password"] = json!("12345");
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/sign-up")
        .set_json(short_password)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/sign-up")
        .insert_header(ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_into_taken_email_changes_nothing() {
    let services = services();
    let app = init_app!(services);

    let token = token_of(&sign_up!(app, ann()));
    sign_up!(
        app,
        json!({
            "name": "Bob",
            "username": "bob1",
            "email": "bob@x.com",
            "password": "secret123"
        })
    );

    let req = test::TestRequest::put()
        .uri("/api/v1/me")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "name": "Annie", "email": "bob@x.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["conflict"], "email");

    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header(("Authorization", token))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["name"], "Ann");
    assert_eq!(me["email"], "ann@x.com");
}

#[actix_web::test]
async fn test_profile_sections_and_public_profile() {
    let services = services();
    let app = init_app!(services);
    let token = token_of(&sign_up!(app, ann()));

    // 회원가입 직후 소셜/연락처는 빈 상태
    let req = test::TestRequest::get()
        .uri("/api/v1/me/socials")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let socials: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(socials["links"], json!([]));

    let req = test::TestRequest::put()
        .uri("/api/v1/me/socials")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "links": [
            { "platform": " GitHub ", "url": "https://github.com/ann" },
            { "platform": "twitter", "url": "" }
        ]}))
        .to_request();
    let socials: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        socials["links"],
        json!([{ "platform": "github", "url": "https://github.com/ann" }])
    );

    let req = test::TestRequest::put()
        .uri("/api/v1/me/contact")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "location": "Seoul", "website": "" }))
        .to_request();
    let contact: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(contact["location"], "Seoul");
    assert_eq!(contact["website"], Value::Null);

    let req = test::TestRequest::post()
        .uri("/api/v1/me/education")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({
            "level": "Bachelor",
            "school_name": "KAIST",
            "subject": "CS",
            "from_year": 2015,
            "to_year": 2019
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let education: Value = test::read_body_json(resp).await;
    let education_id = education["id"].as_str().expect("education id").to_string();

    for skill in ["rust", " rust ", "go"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/me/skills")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "skill": skill }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::delete()
        .uri("/api/v1/me/skills/go")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let skills: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(skills["skills"], json!(["rust"]));

    let req = test::TestRequest::get()
        .uri("/api/v1/users/ann1")
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["user"]["username"], "ann1");
    assert!(profile["user"].get("password_hash").is_none());
    assert_eq!(profile["socials"][0]["platform"], "github");
    assert_eq!(profile["education"][0]["school_name"], "KAIST");
    assert_eq!(profile["skills"], json!(["rust"]));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/me/education/{}", education_id))
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/me/education")
        .insert_header(("Authorization", token))
        .to_request();
    let education: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(education, json!([]));

    let req = test::TestRequest::get()
        .uri("/api/v1/users/nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_blank_education_entry_is_bad_request() {
    let services = services();
    let app = init_app!(services);
    let token = token_of(&sign_up!(app, ann()));

    let req = test::TestRequest::post()
        .uri("/api/v1/me/education")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "level": "   ", "school_name": "  ", "from_year": 2015 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");

    let req = test::TestRequest::get()
        .uri("/api/v1/me/education")
        .insert_header(("Authorization", token))
        .to_request();
    let education: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(education, json!([]));
}

#[actix_web::test]
async fn test_deleted_account_token_no_longer_resolves() {
    let services = services();
    let app = init_app!(services);
    let token = token_of(&sign_up!(app, ann()));

    let req = test::TestRequest::delete()
        .uri("/api/v1/me")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 같은 이메일/사용자명으로 재가입 가능
    let body = sign_up!(app, ann());
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn test_health() {
    let services = services();
    let app = init_app!(services);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}
