//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문으로 사용되는 DTO 모듈입니다.
//! 요청 DTO는 `validator` 크레이트로 입력을 검증하고,
//! 응답 DTO는 엔티티에서 `TryFrom` 변환으로 생성됩니다.

pub mod users;

pub use users::*;
