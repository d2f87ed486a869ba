//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 사용자 엔티티와 API 계약(DTO)을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속되는 핵심 객체 (User)
//! └── DTOs          - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Application Layer (Services, Handlers)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 엔티티는 저장소 표현(BSON 문서)과 분리되어 있습니다.
//! 저장소 문서와의 변환은 리포지토리 계층이 담당합니다.

pub mod entities;
pub mod dto;
