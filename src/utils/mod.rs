//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일 형식, 문자 단위 길이 검사
//! - [`validation`] - 검증 에러를 클라이언트 메시지로 변환
//! - [`display_terminal`] - 시작 배너 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::is_valid_email;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert!(is_valid_email("user@example.com"));
//! print_boxed_title("User Signup Service");
//! ```

pub mod string_utils;
pub mod validation;
pub mod display_terminal;
