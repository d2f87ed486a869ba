//! `validator` 검증 결과를 클라이언트용 메시지로 변환합니다.
//!
//! 형식은 `"<field>: <message>."`이며, 필드마다 첫 번째 위반만 사용합니다.
//! 여러 필드가 실패하면 필드 이름 순으로 정렬해 `"; "`로 연결합니다.
//!
//! ```text
//! email: cannot be blank.
//! email: must be in a valid format.
//! email: cannot be blank; name: the length must be between 1 and 50.
//! ```

use validator::{ValidationError, ValidationErrors};

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut violations: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            field_errors
                .first()
                .map(|error| (field.to_string(), violation_message(error)))
        })
        .collect();

    violations.sort_by(|a, b| a.0.cmp(&b.0));

    let joined = violations
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ");

    format!("{}.", joined)
}

/// 메시지가 없으면 에러 코드를 그대로 사용합니다.
fn violation_message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| error.code.to_string())
}
