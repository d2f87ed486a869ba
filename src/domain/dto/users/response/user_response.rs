//! 사용자 응답 DTO
//!
//! 엔티티를 클라이언트에 노출할 형태로 변환합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 사용자 생성 응답
///
/// `id`는 저장소가 부여한 부호 없는 정수의 10진수 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: String,
}

impl TryFrom<User> for CreateUserResponse {
    type Error = AppError;

    /// 저장되지 않은(id가 없는) 사용자는 변환할 수 없습니다.
    fn try_from(user: User) -> Result<Self, Self::Error> {
        let id = user.id.ok_or_else(|| {
            AppError::InternalError("저장된 사용자에 id가 없습니다".to_string())
        })?;

        Ok(Self { id: id.to_string() })
    }
}
