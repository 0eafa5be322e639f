//! Postgres 계정 저장소.
//!
//! accounts 테이블에 대한 모든 데이터베이스 작업을 처리합니다. 역할은
//! TEXT 컬럼으로 저장하고 도메인 경계에서 [`Role`]로 변환합니다.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use account_core::{Account, AccountChanges, NewAccountRecord, Role};

use super::{AccountStore, StoreError};

/// accounts 테이블 행.
#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    password_hash: String,
    role: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role)
            .ok_or_else(|| StoreError::Backend(format!("알 수 없는 역할 값: {}", row.role)))?;

        Ok(Account {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            role,
        })
    }
}

/// Postgres 저장소.
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// 연결 풀에서 저장소 생성.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// accounts 테이블이 없으면 생성합니다.
    ///
    /// 이메일 유니크 제약이 동시 등록 경쟁을 데이터베이스 수준에서
    /// 차단합니다.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id            BIGSERIAL PRIMARY KEY,
                email         TEXT      NOT NULL UNIQUE,
                password_hash TEXT      NOT NULL,
                role          TEXT      NOT NULL DEFAULT 'user'
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_hash, role
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_hash, role
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn insert(&self, record: NewAccountRecord) -> Result<Account, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, role
            "#,
        )
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        Account::try_from(row)
    }

    async fn update(
        &self,
        id: i64,
        changes: AccountChanges,
    ) -> Result<Option<Account>, StoreError> {
        // 단일 UPDATE 문으로 부분 수정 (읽기-수정-쓰기가 한 호출에서 끝남)
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET email         = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash),
                role          = COALESCE($4, role)
            WHERE id = $1
            RETURNING id, email, password_hash, role
            "#,
        )
        .bind(id)
        .bind(changes.email.as_deref())
        .bind(changes.password_hash.as_deref())
        .bind(changes.role.map(|r| r.as_str()))
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Account>, StoreError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_hash, role
            FROM accounts
            ORDER BY id ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Account::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let row = AccountRow {
            id: 7,
            email: "a@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: "management".to_string(),
        };

        let account = Account::try_from(row).unwrap();
        assert_eq!(account.id, 7);
        assert_eq!(account.role, Role::Management);
    }

    #[test]
    fn test_row_conversion_rejects_unknown_role() {
        let row = AccountRow {
            id: 7,
            email: "a@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: "superuser".to_string(),
        };

        assert!(matches!(
            Account::try_from(row),
            Err(StoreError::Backend(_))
        ));
    }
}
