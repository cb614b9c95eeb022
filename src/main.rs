//! 프로필 서비스 메인 애플리케이션
//!
//! 설정을 읽고 저장소와 서비스를 조립해 [`ApiServices`]로 묶은 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use profile_service_backend::config::{JwtConfig, RateLimitConfig, ServerConfig, StoreBackend};
use profile_service_backend::core::errors::AppResult;
use profile_service_backend::db::Database;
use profile_service_backend::repositories::{
    IdentityStore, MemoryStore, ProfileRepository, ProfileStore, UserRepository,
};
use profile_service_backend::routes::{configure_all_routes, ApiServices};
use profile_service_backend::services::auth::{PasswordService, TokenService};
use profile_service_backend::services::users::{ProfileService, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 프로필 서비스 시작중...");

    let services = initialize_services()
        .await
        .map_err(|e| {
            error!("서비스 초기화 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서: Rate Limiting → CORS → 요청 로깅 → 경로 정규화
async fn start_http_server(services: ApiServices) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 유효하지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &services))
    })
    .bind(&bind_address)?
    .workers(workers)
    .run()
    .await
}

/// PROFILE 환경변수에 따라 `.env.dev` / `.env.prod` / `.env`를 로드합니다
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 stderr로 출력
    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// `RUST_LOG` 기준 로깅 초기화 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 저장소와 서비스를 생성해 핸들러용 묶음으로 반환합니다
async fn initialize_services() -> AppResult<ApiServices> {
    let (identities, profiles) = initialize_data_stores().await?;

    let tokens = Arc::new(TokenService::new(JwtConfig::from_env()));
    let passwords = PasswordService::from_config();
    info!("🔐 bcrypt cost: {}", passwords.cost());

    let users = Arc::new(UserService::new(
        identities.clone(),
        profiles.clone(),
        passwords,
        tokens.clone(),
    ));
    let profile_service = Arc::new(ProfileService::new(identities, profiles));

    Ok(ApiServices::new(users, profile_service, tokens))
}

/// `DATA_STORE`에 따라 MongoDB 또는 인메모리 저장소를 준비합니다
async fn initialize_data_stores() -> AppResult<(Arc<dyn IdentityStore>, Arc<dyn ProfileStore>)> {
    match StoreBackend::current() {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);

            let users = UserRepository::new(database.clone());
            users.create_indexes().await?;

            let profiles = ProfileRepository::new(database.clone());
            profiles.create_indexes().await?;

            let identities: Arc<dyn IdentityStore> = Arc::new(users);
            let profiles: Arc<dyn ProfileStore> = Arc::new(profiles);
            Ok((identities, profiles))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용 중: 재시작 시 모든 데이터가 사라집니다");
            let store = Arc::new(MemoryStore::new());
            let identities: Arc<dyn IdentityStore> = store.clone();
            let profiles: Arc<dyn ProfileStore> = store;
            Ok((identities, profiles))
        }
    }
}

/// 프론트엔드 개발 서버와 자체 서버 Origin을 허용합니다
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
