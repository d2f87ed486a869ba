//! 사용자 서비스 모듈
//!
//! ```rust,ignore
//! use crate::services::users::user_service::{UserService, UserServiceImpl};
//!
//! let service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new());
//! let created = service.create_user(tx, User::new("user@example.com")).await?;
//! ```

pub mod user_service;
