//! 사용자 생성 서비스
//!
//! 검증을 통과한 사용자를 호출자가 관리하는 트랜잭션 안에서 한 번의 삽입으로 저장합니다.

use async_trait::async_trait;
use crate::db::transaction::Transaction;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;

/// 사용자 생성 작업
#[async_trait]
pub trait UserService: Send + Sync {
    /// `user`(id 없음)를 저장하고 id가 부여된 엔티티를 반환합니다.
    ///
    /// 저장소 에러는 가공하지 않고 그대로 반환합니다.
    /// 커밋/롤백은 호출자의 책임입니다.
    async fn create_user(&self, tx: &mut dyn Transaction, user: User) -> AppResult<User>;
}

#[derive(Debug, Default, Clone)]
pub struct UserServiceImpl;

impl UserServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, tx: &mut dyn Transaction, user: User) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let created_user = tx.insert_user(user).await?;

        log::info!(
            "User creation took: {:?} (id={:?})",
            start_time.elapsed(),
            created_user.id
        );

        Ok(created_user)
    }
}
