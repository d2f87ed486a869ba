//! 사용자 가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 설정하고 사용자 생성 핸들러를 조립한 뒤 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_signup_service::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use user_signup_service::db::{Database, MongoTransactionManager};
use user_signup_service::handlers::users::CreateUserHandler;
use user_signup_service::routes::configure_all_routes;
use user_signup_service::services::users::user_service::UserServiceImpl;
use user_signup_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 가입 서비스 시작중... (environment: {:?})", Environment::current());

    let database = initialize_database().await.map_err(std::io::Error::other)?;

    let handler = web::Data::new(CreateUserHandler::new(
        Arc::new(MongoTransactionManager::new(database.clone())),
        Arc::new(UserServiceImpl::new()),
    ));

    let result = start_http_server(handler, database.database_name()).await;

    database.shutdown().await;
    info!("👋 서버 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 종료 신호를 받으면 `SHUTDOWN_TIMEOUT_SECS` 동안 처리 중인 요청을 기다립니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    handler: web::Data<CreateUserHandler>,
    database_name: &str,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    print_startup_summary(&bind_address, database_name, workers);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::other(format!(
                "잘못된 Rate Limiting 설정: {:?}",
                rate_limit_config
            ))
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(handler.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .shutdown_timeout(ServerConfig::shutdown_timeout().as_secs())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename {
        Some(filename) => match dotenv::from_filename(filename) {
            Ok(_) => eprintln!("[{}] {} 파일 로드 됨", profile, filename),
            Err(e) => eprintln!("[{}] {} 파일 로드 실패: {}", profile, filename, e),
        },
        None => {
            dotenv().ok();
            eprintln!("[{}] 기본 .env 파일 로드", profile);
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB에 연결하고 필요한 인덱스를 생성합니다
async fn initialize_database() -> Result<Database, user_signup_service::errors::AppError> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.inspect_err(|e| {
        error!("❌ MongoDB 연결 실패: {}", e);
    })?;

    database.user_repository().create_indexes().await.inspect_err(|e| {
        error!("❌ 인덱스 생성 실패: {}", e);
    })?;

    info!("✅ 사용자 컬렉션 인덱스 준비 완료");

    Ok(database)
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
