//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티를 MongoDB `users` 컬렉션에 기록합니다.
//! 사용자 삽입은 호출자가 넘겨준 [`ClientSession`] 위에서 실행되므로
//! 호출자의 트랜잭션에 포함됩니다.
//!
//! ## 식별자 발급
//!
//! MongoDB에는 자동 증가 정수 키가 없으므로 `counters` 컬렉션의
//! `{ _id: "users", seq }` 문서를 `$inc`로 증가시켜 id를 발급합니다.
//! 카운터 갱신은 세션 밖에서 단일 원자 연산으로 실행됩니다. 모든 요청이
//! 같은 카운터 문서를 쓰므로 트랜잭션 안에 두면 동시 요청끼리 `WriteConflict`가 납니다.
//! 삽입이 실패해 롤백되어도 발급된 번호는 돌아오지 않으며, id에 빈 번호가 생길 수 있습니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: 이메일 유니크 인덱스. 중복 삽입은 [`AppError::ConflictError`]가 됩니다.

use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    ClientSession, Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const USER_SEQUENCE: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `users` 컬렉션의 저장 형태
///
/// BSON에는 부호 없는 64비트 정수가 없으므로 `_id`는 `i64`로 저장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: i64,
    pub email: String,
}

impl UserDocument {
    pub fn from_user(user: &User, id: u64) -> AppResult<Self> {
        let id = i64::try_from(id)
            .map_err(|_| AppError::DatabaseError(format!("사용자 id 범위 초과: {}", id)))?;

        Ok(Self {
            id,
            email: user.email.clone(),
        })
    }

    pub fn into_user(self) -> AppResult<User> {
        let id = u64::try_from(self.id)
            .map_err(|_| AppError::DatabaseError(format!("음수 사용자 id: {}", self.id)))?;

        Ok(User::new(self.email).with_id(id))
    }
}

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    database: mongodb::Database,
}

impl UserRepository {
    pub fn new(database: mongodb::Database) -> Self {
        Self { database }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.database.collection::<UserDocument>(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.database.collection::<Document>(COUNTERS_COLLECTION)
    }

    /// 다음 사용자 id를 발급합니다. 첫 번째 id는 1입니다.
    pub async fn next_id(&self) -> AppResult<u64> {
        let counter = self
            .counters()
            .find_one_and_update(
                doc! { "_id": USER_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| AppError::DatabaseError("사용자 id 카운터를 읽을 수 없습니다".to_string()))?;

        let seq = counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        u64::try_from(seq)
            .map_err(|_| AppError::DatabaseError(format!("잘못된 사용자 id 카운터 값: {}", seq)))
    }

    /// 세션의 트랜잭션 안에서 사용자를 삽입합니다.
    pub async fn insert(&self, session: &mut ClientSession, user: User) -> AppResult<User> {
        let id = self.next_id().await?;
        let document = UserDocument::from_user(&user, id)?;

        self.collection()
            .insert_one(&document)
            .session(&mut *session)
            .await
            .map_err(map_write_error)?;

        log::debug!("사용자 삽입: id={}", id);

        document.into_user()
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 쓰기 에러를 변환합니다. 중복 키는 `ConflictError`, 그 외는 `DatabaseError`.
/// 메시지는 드라이버가 보고한 그대로 유지합니다.
fn map_write_error(error: MongoError) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(error.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trip_keeps_id() {
        let user = User::new("user@example.com");
        let document = UserDocument::from_user(&user, 9).unwrap();

        assert_eq!(document.id, 9);
        assert_eq!(document.into_user().unwrap(), user.with_id(9));
    }

    #[test]
    fn test_document_rejects_out_of_range_id() {
        let user = User::new("user@example.com");

        assert!(matches!(
            UserDocument::from_user(&user, u64::MAX),
            Err(AppError::DatabaseError(_))
        ));
    }

    #[test]
    fn test_negative_stored_id_is_rejected() {
        let document = UserDocument { id: -1, email: "user@example.com".to_string() };

        assert!(matches!(document.into_user(), Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_document_bson_shape() {
        let document = UserDocument { id: 3, email: "user@example.com".to_string() };
        let bson = mongodb::bson::to_document(&document).unwrap();

        assert_eq!(bson, doc! { "_id": 3_i64, "email": "user@example.com" });
    }
}
