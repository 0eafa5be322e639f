//! 계정 관리 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (등록, 로그인, 계정 관리)
//! - JWT 인증 및 역할 기반 접근 제어
//! - Argon2 비밀번호 해싱
//! - Postgres 계정 저장소 (트레이트 뒤에 격리)
//! - 헬스 체크 엔드포인트
//! - OpenAPI 문서 및 Swagger UI
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: JWT 발급/검증, 비밀번호 해싱, 인증 추출기
//! - [`service`]: 계정 유스케이스 (등록/로그인/목록/수정/삭제)
//! - [`repository`]: 계정 저장소 트레이트 및 구현
//! - [`error`]: 통합 API 에러 응답
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use auth::{hash_password, verify_password, Claims, CurrentAccount, TokenIssuer};
pub use error::{ApiError, ApiErrorBody, ApiResult};
pub use repository::{AccountStore, PgAccountStore, StoreError};
pub use routes::create_api_router;
pub use service::{AccountService, AccountUpdate, IssuedToken};
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
