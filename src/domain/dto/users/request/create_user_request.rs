//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::{is_length_between, is_valid_email, EMAIL_MAX_LENGTH};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// `email` 키가 없거나 값이 `null`이면 빈 문자열로 역직렬화되어 필수값 규칙에 걸립니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_email"))]
    pub email: String,
}

impl CreateUserRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 이메일 규칙을 순서대로 검사하고 첫 번째 위반만 보고합니다.
///
/// 1. 비어 있지 않을 것
/// 2. 1자 이상 320자 이하 (문자 단위)
/// 3. 이메일 형식일 것
fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("required")
            .with_message("cannot be blank".into()));
    }

    if !is_length_between(email, 1, EMAIL_MAX_LENGTH) {
        return Err(ValidationError::new("length")
            .with_message(format!("the length must be between 1 and {}", EMAIL_MAX_LENGTH).into()));
    }

    if !is_valid_email(email) {
        return Err(ValidationError::new("format")
            .with_message("must be in a valid format".into()));
    }

    Ok(())
}
