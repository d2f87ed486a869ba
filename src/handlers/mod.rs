//! # HTTP Handlers
//!
//! 요청/응답 매핑을 담당하는 핸들러 모듈입니다.
//! 핸들러는 입력 검증과 트랜잭션 경계를 관리하고, 실제 작업은 서비스 계층에 위임합니다.
//!
//! - [`users`] - 사용자 생성 (`POST /api/v1/users`)
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 [`crate::errors::errors::AppError`]의 `ResponseError` 구현을 통해
//! `{"error": "<message>"}` JSON 응답으로 변환됩니다.

pub mod users;
