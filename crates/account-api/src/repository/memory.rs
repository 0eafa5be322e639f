//! 테스트용 인메모리 계정 저장소.
//!
//! Postgres 없이 서비스와 라우터 로직을 검증할 때 사용합니다. Postgres
//! 구현과 같은 제약(이메일 유니크, id 오름차순 목록)을 따릅니다.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use account_core::{Account, AccountChanges, NewAccountRecord};

use super::{AccountStore, StoreError};

#[derive(Default)]
struct Inner {
    next_id: i64,
    accounts: BTreeMap<i64, Account>,
}

/// 인메모리 저장소.
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

impl MemoryAccountStore {
    /// 빈 저장소 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 테스트 픽스처용 계정 시드.
    pub async fn seed(&self, record: NewAccountRecord) -> Account {
        self.insert(record).await.expect("seed 계정 삽입 실패")
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .accounts
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.get(&id).cloned())
    }

    async fn insert(&self, record: NewAccountRecord) -> Result<Account, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.accounts.values().any(|a| a.email == record.email) {
            return Err(StoreError::DuplicateEmail);
        }

        inner.next_id += 1;
        let account = Account {
            id: inner.next_id,
            email: record.email,
            password_hash: record.password_hash,
            role: record.role,
        };
        inner.accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn update(
        &self,
        id: i64,
        changes: AccountChanges,
    ) -> Result<Option<Account>, StoreError> {
        let mut inner = self.inner.write().await;

        if !inner.accounts.contains_key(&id) {
            return Ok(None);
        }

        // 다른 계정이 이미 쓰는 이메일로는 바꿀 수 없다
        if let Some(ref email) = changes.email {
            if inner
                .accounts
                .values()
                .any(|a| a.id != id && a.email == *email)
            {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let account = inner
            .accounts
            .get_mut(&id)
            .expect("존재 확인 후 조회 실패");
        if let Some(email) = changes.email {
            account.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            account.password_hash = password_hash;
        }
        if let Some(role) = changes.role {
            account.role = role;
        }

        Ok(Some(account.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.accounts.remove(&id).is_some())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Account>, StoreError> {
        let inner = self.inner.read().await;
        // BTreeMap 순회는 id 오름차순이다
        Ok(inner
            .accounts
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
