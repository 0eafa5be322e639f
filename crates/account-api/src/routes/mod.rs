//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/users` - 계정 등록/목록
//! - `/users/token` - 로그인 및 토큰 발급
//! - `/users/{id}` - 계정 수정/삭제

pub mod accounts;
pub mod health;

pub use accounts::{
    accounts_router, AccountResponse, DeleteResponse, ListQuery, LoginForm, RegisterRequest,
    UpdateAccountRequest,
};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/users", accounts_router())
}
