//! 트랜잭션 추상화
//!
//! 저장소 협력자를 두 개의 트레이트로 나눕니다.
//!
//! - [`TransactionManager`]: 새 트랜잭션을 시작합니다.
//! - [`Transaction`]: 트랜잭션 범위 안의 쓰기 작업과 커밋/롤백을 제공합니다.
//!
//! 실제 구현은 MongoDB 세션 기반의 [`crate::db::MongoTransactionManager`]이며,
//! 테스트에서는 호출을 기록하는 가짜 구현을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::db::transaction::transaction;
//!
//! let service = Arc::clone(&user_service);
//! let created = transaction(manager.as_ref(), move |tx| {
//!     Box::pin(async move { service.create_user(tx, user).await })
//! })
//! .await?;
//! ```

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use log::{debug, error};
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;

/// 트랜잭션을 시작하는 저장소 핸들
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> AppResult<Box<dyn Transaction>>;
}

/// 하나의 요청 범위에서만 사용되는 트랜잭션 핸들
///
/// `commit`/`rollback`은 핸들을 소비하므로 한 트랜잭션은 한 번만 종료됩니다.
#[async_trait]
pub trait Transaction: Send {
    /// 사용자를 삽입하고 저장소가 부여한 id가 채워진 엔티티를 반환합니다.
    async fn insert_user(&mut self, user: User) -> AppResult<User>;

    async fn commit(self: Box<Self>) -> AppResult<()>;

    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// `work`를 하나의 트랜잭션 안에서 실행합니다.
///
/// `work`가 `Ok`를 반환하면 커밋하고, `Err`를 반환하면 롤백한 뒤 그 에러를 그대로 반환합니다.
/// 롤백 자체가 실패하면 로그만 남기고 `work`의 에러를 반환합니다.
/// 커밋이 실패하면 커밋 에러를 반환합니다.
pub async fn transaction<T, F>(manager: &dyn TransactionManager, work: F) -> AppResult<T>
where
    F: for<'t> FnOnce(&'t mut dyn Transaction) -> BoxFuture<'t, AppResult<T>>,
{
    let mut tx = manager.begin().await?;

    match work(tx.as_mut()).await {
        Ok(value) => {
            tx.commit().await?;
            debug!("트랜잭션 커밋 완료");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                error!("트랜잭션 롤백 실패: {} (원인: {})", rollback_err, err);
            } else {
                debug!("트랜잭션 롤백 완료: {}", err);
            }
            Err(err)
        }
    }
}
