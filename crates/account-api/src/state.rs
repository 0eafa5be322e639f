//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 프로세스 시작 시 한 번 구성되어 Arc로 래핑된 채 모든
//! 요청에서 공유됩니다. 요청 간 가변 상태는 없으므로 잠금이 필요하지
//! 않습니다.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenIssuer;
use crate::repository::AccountStore;
use crate::service::AccountService;

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
pub struct AppState {
    /// 계정 저장소 (Postgres 또는 테스트용 인메모리)
    pub store: Arc<dyn AccountStore>,

    /// 토큰 발급기/검증기
    pub tokens: Arc<TokenIssuer>,

    /// 데이터베이스 연결 풀 (헬스 체크용, 인메모리 저장소면 None)
    pub db_pool: Option<PgPool>,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(store: Arc<dyn AccountStore>, tokens: TokenIssuer) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            db_pool: None,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 헬스 체크용 데이터베이스 풀 설정.
    pub fn with_db_pool(mut self, pool: PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// 계정 서비스 생성.
    ///
    /// 서비스는 무상태이므로 요청마다 만들어도 Arc 복제 비용뿐입니다.
    pub fn service(&self) -> AccountService {
        AccountService::new(Arc::clone(&self.store), Arc::clone(&self.tokens))
    }

    /// 서버 업타임(초) 반환.
    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }

    /// 데이터베이스 연결 상태 확인.
    pub async fn is_db_healthy(&self) -> bool {
        if let Some(pool) = &self.db_pool {
            sqlx::query("SELECT 1").fetch_one(pool).await.is_ok()
        } else {
            false
        }
    }
}

/// 테스트용 AppState 생성 헬퍼.
///
/// 인메모리 저장소와 고정 시크릿으로 구성합니다. 시드가 필요한
/// 테스트를 위해 저장소 핸들도 함께 반환합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> (
    Arc<AppState>,
    Arc<crate::repository::MemoryAccountStore>,
) {
    use secrecy::SecretString;

    let store = Arc::new(crate::repository::MemoryAccountStore::new());
    let dyn_store: Arc<dyn AccountStore> = store.clone();

    let secret = SecretString::new("test-secret-key-for-account-api-tests".into());
    let tokens = TokenIssuer::new(&secret, 30);

    (Arc::new(AppState::new(dyn_store, tokens)), store)
}
