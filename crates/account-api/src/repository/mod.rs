//! 계정 저장소.
//!
//! 저장소 접근은 [`AccountStore`] 트레이트 뒤에 있습니다. 운영 환경은
//! Postgres 구현([`PgAccountStore`])을 사용하고, 테스트는 인메모리
//! 구현([`MemoryAccountStore`])을 사용합니다.
//!
//! 구현체가 보장해야 하는 제약:
//! - 이메일 유니크 (동시 삽입 시 정확히 하나만 성공)
//! - 호출 단위 원자성 (부분 수정이 다른 호출자에게 노출되지 않음)
//! - 목록은 id 오름차순 고정 순서

mod accounts;
#[cfg(any(test, feature = "test-utils"))]
mod memory;

pub use accounts::PgAccountStore;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryAccountStore;

use async_trait::async_trait;

use account_core::{Account, AccountChanges, NewAccountRecord};

/// 저장소 에러.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// 이메일 유니크 제약 위반
    #[error("이미 등록된 이메일입니다")]
    DuplicateEmail,
    /// 그 외 저장소 장애 (호출자에게는 불투명)
    #[error("저장소 에러: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Backend(err.to_string())
    }
}

/// 계정 저장소 인터페이스.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 이메일로 계정 조회.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// id로 계정 조회.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError>;

    /// 새 계정 삽입. 이메일 중복이면 [`StoreError::DuplicateEmail`].
    async fn insert(&self, record: NewAccountRecord) -> Result<Account, StoreError>;

    /// 부분 수정. id가 없으면 `None`.
    async fn update(&self, id: i64, changes: AccountChanges)
        -> Result<Option<Account>, StoreError>;

    /// 삭제. id가 없으면 `false`.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// id 오름차순으로 페이지 조회.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Account>, StoreError>;
}
