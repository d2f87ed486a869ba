//! # Routes
//!
//! 애플리케이션의 모든 HTTP 라우트를 구성합니다.
//!
//! | 경로 | 설명 |
//! |------|------|
//! | `GET /health` | 헬스 체크 |
//! | `POST /api/v1/users` | 사용자 생성 |
//!
//! 핸들러가 사용하는 [`crate::handlers::users::CreateUserHandler`]는
//! `main`에서 `web::Data`로 등록합니다.

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(handlers::users::json_config())
            .service(handlers::users::create_user)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_signup_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
