//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 요청 처리 중 발생하는 에러는 두 종류로 나뉩니다.
//!
//! - **검증 에러** ([`AppError::ValidationError`]): 저장소에 접근하기 전에 발견된 입력 오류
//! - **영속성 에러** ([`AppError::DatabaseError`], [`AppError::ConflictError`]):
//!   저장소가 보고한 오류. 메시지는 저장소가 보고한 그대로 전달됩니다.
//!
//! 두 종류 모두 요청을 종료시키며, 재시도하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! async fn insert(user: User) -> AppResult<User> {
//!     collection.insert_one(&user).await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!     Ok(user)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 에러
///
/// 검증 에러와 영속성 에러의 `Display`는 메시지를 가공하지 않습니다.
/// 클라이언트가 받는 `error` 필드가 곧 원본 메시지입니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 필드 규칙 위반 (예: `email: cannot be blank.`)
    #[error("{0}")]
    ValidationError(String),

    /// 저장소 연결/쿼리/트랜잭션 오류
    #[error("{0}")]
    DatabaseError(String),

    /// 유니크 제약 위반
    #[error("{0}")]
    ConflictError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 저장소에서 비롯된 에러인지 확인합니다.
    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::ConflictError(_))
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥 메시지를 붙여 [`AppError::InternalError`]로 변환합니다.
///
/// 주로 부트스트랩 단계(설정 파싱, 연결 생성)에서 사용합니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
