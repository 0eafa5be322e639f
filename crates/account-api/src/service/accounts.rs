//! 계정 서비스.
//!
//! 등록, 로그인, 목록 조회, 수정, 삭제의 다섯 가지 유스케이스를
//! 구현합니다. 관리 작업은 저장소 접근 전에 접근 정책을 먼저
//! 검사합니다. 대상 존재 여부는 권한이 확인된 뒤에만 드러납니다.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use utoipa::ToSchema;

use account_core::{
    policy, Account, AccountChanges, AccountError, AccountResult, NewAccountRecord, Role,
};

use crate::auth::{hash_password, verify_password, TokenIssuer};
use crate::repository::{AccountStore, StoreError};

/// 목록 조회 limit 상한.
pub const MAX_PAGE_SIZE: i64 = 500;

/// 로그인 성공 시 발급되는 토큰.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IssuedToken {
    /// JWT access token
    pub access_token: String,
    /// 항상 "bearer"
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

/// 계정 부분 수정 입력 (평문 비밀번호).
///
/// `password`가 있으면 저장 전에 다시 해싱됩니다.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// 계정 서비스.
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    tokens: Arc<TokenIssuer>,
}

impl AccountService {
    /// 저장소와 토큰 발급기로 서비스 생성.
    pub fn new(store: Arc<dyn AccountStore>, tokens: Arc<TokenIssuer>) -> Self {
        Self { store, tokens }
    }

    /// 계정 등록.
    ///
    /// 인증 없이 호출할 수 있습니다. 이메일이 이미 존재하면
    /// [`AccountError::EmailTaken`]을 반환합니다.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> AccountResult<Account> {
        if self
            .store
            .find_by_email(email)
            .await
            .map_err(store_error)?
            .is_some()
        {
            return Err(AccountError::EmailTaken);
        }

        let password_hash =
            hash_password(password).map_err(|_| AccountError::Internal("비밀번호 해싱 실패".to_string()))?;

        let record = NewAccountRecord {
            email: email.to_string(),
            password_hash,
            role,
        };

        match self.store.insert(record).await {
            Ok(account) => {
                info!(id = account.id, role = %account.role, "계정 등록 완료");
                Ok(account)
            }
            // 사전 조회와 삽입 사이의 경쟁은 유니크 제약이 잡는다
            Err(StoreError::DuplicateEmail) => Err(AccountError::EmailTaken),
            Err(e) => Err(store_error(e)),
        }
    }

    /// 로그인 및 토큰 발급.
    ///
    /// 존재하지 않는 이메일과 비밀번호 불일치를 구분하지 않고
    /// [`AccountError::InvalidCredentials`]를 반환합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AccountResult<IssuedToken> {
        let account = self
            .store
            .find_by_email(email)
            .await
            .map_err(store_error)?
            .ok_or(AccountError::InvalidCredentials)?;

        if verify_password(password, &account.password_hash).is_err() {
            debug!(id = account.id, "비밀번호 불일치");
            return Err(AccountError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .issue(&account.email)
            .map_err(|e| AccountError::Internal(format!("토큰 발급 실패: {}", e)))?;

        Ok(IssuedToken {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.tokens.ttl_secs(),
        })
    }

    /// 계정 목록 조회 (Admin/Management 전용).
    pub async fn list_accounts(
        &self,
        skip: i64,
        limit: i64,
        acting: &Account,
    ) -> AccountResult<Vec<Account>> {
        if !policy::can_list_accounts(acting.role) {
            return Err(AccountError::Forbidden);
        }

        if skip < 0 {
            return Err(AccountError::Validation(
                "skip은 0 이상이어야 합니다".to_string(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AccountError::Validation(format!(
                "limit은 1 이상 {} 이하여야 합니다",
                MAX_PAGE_SIZE
            )));
        }

        self.store.list(skip, limit).await.map_err(store_error)
    }

    /// 계정 수정 (Admin 전용).
    ///
    /// 권한 검사가 존재 확인보다 먼저입니다. 권한이 없으면 대상 id의
    /// 존재 여부와 무관하게 [`AccountError::Forbidden`]입니다.
    pub async fn update_account(
        &self,
        id: i64,
        update: AccountUpdate,
        acting: &Account,
    ) -> AccountResult<Account> {
        if !policy::can_update_account(acting.role) {
            return Err(AccountError::Forbidden);
        }

        let password_hash = match update.password.as_deref() {
            Some(password) => Some(
                hash_password(password)
                    .map_err(|_| AccountError::Internal("비밀번호 해싱 실패".to_string()))?,
            ),
            None => None,
        };

        let changes = AccountChanges {
            email: update.email,
            password_hash,
            role: update.role,
        };

        match self.store.update(id, changes).await {
            Ok(Some(account)) => {
                info!(id, actor = acting.id, "계정 수정 완료");
                Ok(account)
            }
            Ok(None) => Err(AccountError::NotFound),
            Err(StoreError::DuplicateEmail) => Err(AccountError::EmailTaken),
            Err(e) => Err(store_error(e)),
        }
    }

    /// 계정 삭제 (Admin 전용).
    ///
    /// 수정과 같은 순서 규칙을 따릅니다: 권한 먼저, 존재 확인은 그 다음.
    pub async fn delete_account(&self, id: i64, acting: &Account) -> AccountResult<()> {
        if !policy::can_delete_account(acting.role) {
            return Err(AccountError::Forbidden);
        }

        if self.store.delete(id).await.map_err(store_error)? {
            info!(id, actor = acting.id, "계정 삭제 완료");
            Ok(())
        } else {
            Err(AccountError::NotFound)
        }
    }
}

fn store_error(err: StoreError) -> AccountError {
    match err {
        StoreError::DuplicateEmail => AccountError::EmailTaken,
        StoreError::Backend(msg) => AccountError::Internal(msg),
    }
}
