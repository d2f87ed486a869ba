//! 테스트용 저장소 대역
//!
//! [`FakeTransactionManager`]는 실제 데이터베이스 없이 트랜잭션 흐름을 검증하기 위한
//! 가짜 구현입니다. 시작/삽입/커밋/롤백 호출을 [`Journal`]에 기록하고,
//! 삽입 결과는 생성 시 지정한 [`InsertOutcome`]을 따릅니다.

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::db::transaction::{Transaction, TransactionManager};
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

/// 삽입 호출에 대한 스크립트된 결과
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// 주어진 id를 부여하고 성공
    AssignId(u64),
    /// `DatabaseError`로 실패
    Fail(String),
    /// `ConflictError`로 실패
    Conflict(String),
}

/// 저장소 호출 기록
#[derive(Debug, Clone, Default)]
pub struct Journal {
    pub begun: usize,
    pub committed: usize,
    pub rolled_back: usize,
    pub inserted: Vec<User>,
}

#[derive(Clone)]
pub struct FakeTransactionManager {
    outcome: InsertOutcome,
    begin_error: Option<String>,
    commit_error: Option<String>,
    rollback_error: Option<String>,
    journal: Arc<Mutex<Journal>>,
}

impl FakeTransactionManager {
    pub fn new(outcome: InsertOutcome) -> Self {
        Self {
            outcome,
            begin_error: None,
            commit_error: None,
            rollback_error: None,
            journal: Arc::new(Mutex::new(Journal::default())),
        }
    }

    pub fn failing_begin(mut self, message: &str) -> Self {
        self.begin_error = Some(message.to_string());
        self
    }

    pub fn failing_commit(mut self, message: &str) -> Self {
        self.commit_error = Some(message.to_string());
        self
    }

    pub fn failing_rollback(mut self, message: &str) -> Self {
        self.rollback_error = Some(message.to_string());
        self
    }

    /// 현재까지의 호출 기록 스냅샷
    pub fn journal(&self) -> Journal {
        self.journal.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionManager for FakeTransactionManager {
    async fn begin(&self) -> AppResult<Box<dyn Transaction>> {
        if let Some(message) = &self.begin_error {
            return Err(AppError::DatabaseError(message.clone()));
        }

        self.journal.lock().unwrap().begun += 1;

        Ok(Box::new(FakeTransaction {
            outcome: self.outcome.clone(),
            commit_error: self.commit_error.clone(),
            rollback_error: self.rollback_error.clone(),
            journal: Arc::clone(&self.journal),
        }))
    }
}

struct FakeTransaction {
    outcome: InsertOutcome,
    commit_error: Option<String>,
    rollback_error: Option<String>,
    journal: Arc<Mutex<Journal>>,
}

#[async_trait]
impl Transaction for FakeTransaction {
    async fn insert_user(&mut self, user: User) -> AppResult<User> {
        self.journal.lock().unwrap().inserted.push(user.clone());

        match &self.outcome {
            InsertOutcome::AssignId(id) => Ok(user.with_id(*id)),
            InsertOutcome::Fail(message) => Err(AppError::DatabaseError(message.clone())),
            InsertOutcome::Conflict(message) => Err(AppError::ConflictError(message.clone())),
        }
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let FakeTransaction { commit_error, journal, .. } = *self;
        if let Some(message) = commit_error {
            return Err(AppError::DatabaseError(message));
        }
        journal.lock().unwrap().committed += 1;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let FakeTransaction { rollback_error, journal, .. } = *self;
        journal.lock().unwrap().rolled_back += 1;
        match rollback_error {
            Some(message) => Err(AppError::DatabaseError(message)),
            None => Ok(()),
        }
    }
}
