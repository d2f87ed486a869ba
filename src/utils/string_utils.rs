//! 문자열 검사 유틸리티
//!
//! 이메일 형식 검사와 문자 단위 길이 계산을 제공합니다.

use once_cell::sync::Lazy;
use regex::Regex;

/// 이메일 주소의 최대 길이 (문자 수)
pub const EMAIL_MAX_LENGTH: usize = 320;

/// `local@domain` 형식의 이메일 패턴
///
/// 로컬 파트는 별도 길이 제한이 없고, 도메인 라벨은 하이픈으로 시작하거나 끝날 수 없으며
/// 최대 63자입니다. 전체 길이 제한은 [`EMAIL_MAX_LENGTH`]로 따로 검사합니다.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern must compile")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// 바이트가 아닌 문자(유니코드 스칼라 값) 단위의 길이
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

pub fn is_length_between(value: &str, min: usize, max: usize) -> bool {
    let length = char_length(value);
    length >= min && length <= max
}
