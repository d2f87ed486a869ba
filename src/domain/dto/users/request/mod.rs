//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! - **자동 역직렬화**: `serde`를 통한 JSON ↔ Rust 타입 변환
//! - **입력 검증**: `validator` 크레이트를 통한 필드 규칙 검증
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 [`crate::utils::validation::format_validation_errors`]로 메시지를 만든 뒤
//! HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod create_user_request;

pub use create_user_request::CreateUserRequest;
