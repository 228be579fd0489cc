//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 trait 객체(`Arc<dyn UserStore>`)로 저장소를 받으므로
//! 테스트에서는 인메모리 구현으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let repository = UserRepository::new(&database);
//! let user = repository.find_by_username_or_email(Some("janedoe"), None).await?;
//! ```

pub mod users;

pub use users::*;
