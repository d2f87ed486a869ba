//! 리포지토리 계층
//!
//! MongoDB 컬렉션 접근을 캡슐화합니다.

pub mod users;
