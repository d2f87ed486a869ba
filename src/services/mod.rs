//! 서비스 계층
//!
//! 트랜잭션 핸들을 받아 도메인 작업을 수행합니다.
//! 트랜잭션의 시작과 종료는 호출자(핸들러)가 관리합니다.

pub mod users;
