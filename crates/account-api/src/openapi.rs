//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use account_core::Role;

use crate::error::ApiErrorBody;
use crate::routes::{
    AccountResponse, ComponentHealth, ComponentStatus, DeleteResponse, HealthResponse, LoginForm,
    RegisterRequest, UpdateAccountRequest,
};
use crate::service::IssuedToken;

/// Account API 문서.
///
/// 모든 엔드포인트와 스키마를 포함하는 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        version = "0.1.0",
        description = r#"
# 계정 관리 REST API

계정 등록, 로그인(JWT 발급), 역할 기반 계정 관리를 제공합니다.

## 역할

- **admin**: 계정 목록 조회, 수정, 삭제
- **management**: 계정 목록 조회
- **user**: 자신의 등록/로그인만 가능

## 인증

보호된 엔드포인트는 JWT Bearer 토큰 인증이 필요합니다.
`POST /users/token`으로 토큰을 발급받아
`Authorization: Bearer <token>` 헤더에 포함하세요.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(
            name = "Account Service Team",
            url = "https://github.com/user/account-service"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "accounts", description = "계정 - 등록, 로그인, 관리")
    ),
    components(
        schemas(
            // ===== Accounts =====
            AccountResponse,
            RegisterRequest,
            UpdateAccountRequest,
            LoginForm,
            DeleteResponse,
            IssuedToken,
            Role,

            // ===== Common =====
            ApiErrorBody,

            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,
        )
    ),
    paths(
        // ===== Health =====
        crate::routes::health::health_check,
        crate::routes::health::health_ready,

        // ===== Accounts =====
        crate::routes::accounts::register_account,
        crate::routes::accounts::login,
        crate::routes::accounts::list_accounts,
        crate::routes::accounts::update_account,
        crate::routes::accounts::delete_account,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// 다음 경로에 문서 UI를 마운트합니다:
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
