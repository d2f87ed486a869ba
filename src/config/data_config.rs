//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, Rate Limiting, CORS 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 누락되거나 잘못된 값은 기본값으로 대체됩니다.

use std::env;
use std::time::Duration;
use log::error;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다. 기본값은 `Production`.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// actix 워커 스레드 수
    pub fn workers() -> usize {
        parse_env_or("SERVER_WORKERS", 4)
    }

    /// 종료 신호 수신 후 처리 중인 요청을 기다리는 시간
    pub fn shutdown_timeout() -> Duration {
        Duration::from_secs(parse_env_or("SHUTDOWN_TIMEOUT_SECS", 1))
    }
}

/// MongoDB 연결 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "user_signup_dev")
///
/// 트랜잭션을 사용하므로 URI는 레플리카 셋 또는 샤드 클러스터를 가리켜야 합니다.
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_signup_dev".to_string())
    }

    /// 모니터링에서 클라이언트를 식별하기 위한 애플리케이션 이름
    pub fn app_name() -> String {
        "user_signup".to_string()
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: parse_env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 허용 Origin 설정
///
/// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분된 Origin 목록을 지정합니다.
pub struct CorsConfig;

impl CorsConfig {
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 환경 변수를 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().unwrap_or_else(|e| {
        error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
        default
    })
}
