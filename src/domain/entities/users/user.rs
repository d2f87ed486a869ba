//! 사용자 엔티티
//!
//! 저장소에 기록되는 사용자 레코드입니다. `id`는 저장소가 삽입 시점에 부여하며,
//! 부여된 이후에는 변경되지 않습니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 부여한 식별자. 삽입 전에는 `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub email: String,
}

impl User {
    /// 아직 저장되지 않은 사용자를 생성합니다.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
        }
    }

    /// 저장소가 부여한 id를 설정한 사용자를 반환합니다.
    pub fn with_id(self, id: u64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
