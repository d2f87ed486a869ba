//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 MongoDB 세션을 받아
//! 호출자의 트랜잭션 안에서 사용자를 기록합니다.

pub mod user_repo;
