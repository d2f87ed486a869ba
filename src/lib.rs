//! 사용자 가입 서비스
//!
//! 이메일을 검증하고, 트랜잭션 안에서 사용자를 저장한 뒤 부여된 id를 반환하는
//! 사용자 생성 API입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 트랜잭션 경계, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 사용자 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소 (세션 트랜잭션)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_signup_service::db::{Database, MongoTransactionManager};
//! use user_signup_service::handlers::users::CreateUserHandler;
//! use user_signup_service::services::users::user_service::UserServiceImpl;
//!
//! let database = Database::new().await?;
//! let handler = CreateUserHandler::new(
//!     Arc::new(MongoTransactionManager::new(database)),
//!     Arc::new(UserServiceImpl::new()),
//! );
//! let response = handler.execute(CreateUserRequest::new("user@example.com")).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
pub(crate) mod test_support;
