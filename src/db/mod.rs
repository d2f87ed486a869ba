//! Database Connection Management Module
//!
//! MongoDB 연결 관리와 트랜잭션 실행을 담당하는 모듈입니다.
//!
//! - [`Database`]: 클라이언트 연결과 데이터베이스 핸들
//! - [`MongoTransactionManager`]: 요청마다 새 세션/트랜잭션을 여는 저장소 협력자
//! - [`transaction`]: 트랜잭션 트레이트와 커밋/롤백 헬퍼
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URI (트랜잭션은 레플리카 셋에서만 동작)
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//!
//! # 사용할 데이터베이스 이름
//! export DATABASE_NAME="user_signup"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::{Database, MongoTransactionManager};
//!
//! let database = Database::new().await?;
//! let manager = MongoTransactionManager::new(database.clone());
//! ```

pub mod transaction;

use async_trait::async_trait;
use log::info;
use mongodb::{options::ClientOptions, Client, ClientSession};
use crate::config::DatabaseConfig;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::user_repo::UserRepository;
use transaction::{Transaction, TransactionManager};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부적으로 커넥션 풀 공유)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 환경 변수의 연결 정보로 MongoDB에 연결하고 `ping`으로 연결을 검증합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::uri(), &DatabaseConfig::name()).await
    }

    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .context("MongoDB URI 파싱 실패")?;

        // 모니터링에서 클라이언트 식별용
        client_options.app_name = Some(DatabaseConfig::app_name());

        let client = Client::with_options(client_options)
            .context("MongoDB 클라이언트 생성 실패")?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 사용자 리포지토리를 생성합니다.
    pub fn user_repository(&self) -> UserRepository {
        UserRepository::new(self.get_database())
    }

    /// 연결 풀을 정리하고 진행 중인 세션을 종료합니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB 연결 종료: {}", self.database_name);
    }
}

/// 요청마다 새 클라이언트 세션을 열고 트랜잭션을 시작합니다.
#[derive(Clone)]
pub struct MongoTransactionManager {
    database: Database,
}

impl MongoTransactionManager {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl TransactionManager for MongoTransactionManager {
    async fn begin(&self) -> AppResult<Box<dyn Transaction>> {
        let mut session = self
            .database
            .client()
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        session
            .start_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Box::new(MongoTransaction {
            session,
            users: self.database.user_repository(),
        }))
    }
}

/// 하나의 `ClientSession`에 묶인 트랜잭션
pub struct MongoTransaction {
    session: ClientSession,
    users: UserRepository,
}

#[async_trait]
impl Transaction for MongoTransaction {
    async fn insert_user(&mut self, user: User) -> AppResult<User> {
        self.users.insert(&mut self.session, user).await
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MongoTransaction { mut session, .. } = *self;
        session
            .commit_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let MongoTransaction { mut session, .. } = *self;
        session
            .abort_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
