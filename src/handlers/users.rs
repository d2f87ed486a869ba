//! # User HTTP Handlers
//!
//! 사용자 생성 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//!
//! ## 처리 흐름
//!
//! ```text
//! 요청 ─▶ 검증 ──실패──▶ 400 {"error": "email: ..."}   (트랜잭션 없음)
//!          │
//!          ▼
//!      트랜잭션 시작 ─▶ 사용자 삽입 ──실패──▶ 롤백 ─▶ 저장소 에러 그대로
//!                          │
//!                          ▼
//!                        커밋 ─▶ 201 {"id": "<id>"}
//! ```
//!
//! 실패는 모두 해당 요청에서 종료되며 재시도하지 않습니다.

use std::sync::Arc;
use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse, post};
use validator::Validate;
use crate::db::transaction::{transaction, TransactionManager};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::CreateUserResponse;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::services::users::user_service::UserService;
use crate::utils::validation::format_validation_errors;

/// 사용자 생성 요청을 검증하고 트랜잭션 안에서 저장하는 핸들러
///
/// 저장소와 서비스는 트레이트 객체로 주입되므로 테스트에서 대역으로 바꿀 수 있습니다.
pub struct CreateUserHandler {
    db: Arc<dyn TransactionManager>,
    user_service: Arc<dyn UserService>,
}

impl CreateUserHandler {
    pub fn new(db: Arc<dyn TransactionManager>, user_service: Arc<dyn UserService>) -> Self {
        Self { db, user_service }
    }

    /// 검증 → 저장 → 응답 변환
    pub async fn execute(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        self.validate(&request)?;

        let service = Arc::clone(&self.user_service);
        let user = User::new(request.email);

        let created_user = transaction(self.db.as_ref(), move |tx| {
            Box::pin(async move { service.create_user(tx, user).await })
        })
        .await?;

        CreateUserResponse::try_from(created_user)
    }

    /// 필드 규칙을 검사합니다. 부수 효과가 없습니다.
    pub fn validate(&self, request: &CreateUserRequest) -> AppResult<()> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(format_validation_errors(&e)))
    }
}

/// 요청 본문 추출 설정
///
/// 본문을 JSON으로 읽지 못하면 actix 기본 텍스트 응답 대신
/// `{"error": ...}` 형태의 400 응답을 반환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}

fn reject_payload(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("요청 본문 파싱 실패: {}", error);
    AppError::ValidationError(error.to_string()).into()
}

#[post("")]
pub async fn create_user(
    handler: web::Data<CreateUserHandler>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = handler.execute(payload.into_inner()).await.inspect_err(|e| {
        if e.is_persistence() {
            log::warn!("사용자 생성 실패: {}", e);
        } else {
            log::debug!("사용자 생성 요청 거부: {}", e);
        }
    })?;

    Ok(HttpResponse::Created().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use rstest::rstest;
    use crate::services::users::user_service::UserServiceImpl;
    use crate::test_support::{FakeTransactionManager, InsertOutcome};

    fn handler_with(manager: &FakeTransactionManager) -> CreateUserHandler {
        CreateUserHandler::new(Arc::new(manager.clone()), Arc::new(UserServiceImpl::new()))
    }

    fn users_scope() -> actix_web::Scope {
        web::scope("/api/v1/users")
            .app_data(json_config())
            .service(create_user)
    }

    #[actix_web::test]
    async fn test_execute_success() {
        let manager = FakeTransactionManager::new(InsertOutcome::AssignId(1));

        let response = handler_with(&manager)
            .execute(CreateUserRequest::new("user@example.com"))
            .await;

        assert_eq!(response, Ok(CreateUserResponse { id: "1".to_string() }));
        let journal = manager.journal();
        assert_eq!(journal.inserted, vec![User::new("user@example.com")]);
        assert_eq!(journal.committed, 1);
        assert_eq!(journal.rolled_back, 0);
    }

    #[rstest]
    #[case::invalid_format("invalid value", "email: must be in a valid format.")]
    #[case::blank("", "email: cannot be blank.")]
    #[case::too_long(
        format!("{}@example.com", "a".repeat(309)),
        "email: the length must be between 1 and 320."
    )]
    #[actix_web::test]
    async fn test_execute_validation_error_skips_storage(
        #[case] email: String,
        #[case] expected: &str,
    ) {
        let manager = FakeTransactionManager::new(InsertOutcome::AssignId(1));

        let response = handler_with(&manager)
            .execute(CreateUserRequest::new(email))
            .await;

        assert_eq!(response, Err(AppError::ValidationError(expected.to_string())));
        let journal = manager.journal();
        assert_eq!(journal.begun, 0);
        assert!(journal.inserted.is_empty());
    }

    #[actix_web::test]
    async fn test_execute_storage_error_is_returned_unchanged() {
        let manager = FakeTransactionManager::new(InsertOutcome::Fail("err".to_string()));

        let response = handler_with(&manager)
            .execute(CreateUserRequest::new("user@example.com"))
            .await;

        assert_eq!(response, Err(AppError::DatabaseError("err".to_string())));
        assert_eq!(response.unwrap_err().to_string(), "err");
        let journal = manager.journal();
        assert_eq!(journal.committed, 0);
        assert_eq!(journal.rolled_back, 1);
    }

    #[actix_web::test]
    async fn test_validate_has_no_side_effects() {
        let manager = FakeTransactionManager::new(InsertOutcome::AssignId(1));
        let handler = handler_with(&manager);

        assert_eq!(handler.validate(&CreateUserRequest::new("user@example.com")), Ok(()));
        assert_eq!(
            handler.validate(&CreateUserRequest::default()),
            Err(AppError::ValidationError("email: cannot be blank.".to_string()))
        );
        assert_eq!(manager.journal().begun, 0);
    }

    #[actix_web::test]
    async fn test_post_users_route() {
        let manager = FakeTransactionManager::new(InsertOutcome::AssignId(42));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(handler_with(&manager)))
                .service(users_scope()),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(serde_json::json!({ "email": "user@example.com" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({ "id": "42" }));
    }

    #[actix_web::test]
    async fn test_post_users_route_validation_error() {
        let manager = FakeTransactionManager::new(InsertOutcome::AssignId(1));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(handler_with(&manager)))
                .service(users_scope()),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(serde_json::json!({}))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "email: cannot be blank." }));
        assert_eq!(manager.journal().begun, 0);
    }

    #[actix_web::test]
    async fn test_post_users_route_conflict() {
        let manager = FakeTransactionManager::new(InsertOutcome::Conflict("duplicate email".to_string()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(handler_with(&manager)))
                .service(users_scope()),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(serde_json::json!({ "email": "user@example.com" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "duplicate email" }));
    }

    #[rstest]
    #[case::null_email(String::from(r#"{"email": null}"#), Some("email: cannot be blank."))]
    #[case::multibyte_over_limit(
        format!(r#"{{"email": "{}"}}"#, "가".repeat(321)),
        Some("email: the length must be between 1 and 320.")
    )]
    #[case::garbage(String::from("not json"), None)]
    #[case::wrong_type(String::from(r#"{"email": 5}"#), None)]
    #[actix_web::test]
    async fn test_post_users_route_rejects_bad_body(
        #[case] body: String,
        #[case] expected: Option<&str>,
    ) {
        let manager = FakeTransactionManager::new(InsertOutcome::AssignId(1));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(handler_with(&manager)))
                .service(users_scope()),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        match expected {
            Some(message) => assert_eq!(body["error"], message),
            None => assert!(body["error"].is_string()),
        }
        assert_eq!(manager.journal().begun, 0);
    }
}
