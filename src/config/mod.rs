//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limiting, CORS 설정
//!
//! 환경 변수는 `main`에서 `PROFILE`에 맞는 `.env` 파일을 로드한 뒤 읽습니다.
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//! export SHUTDOWN_TIMEOUT_SECS="1"
//!
//! # MongoDB (트랜잭션을 위해 레플리카 셋 필요)
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="user_signup"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
