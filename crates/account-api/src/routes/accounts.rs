//! 계정 API.
//!
//! 등록, 로그인, 목록 조회, 수정, 삭제 엔드포인트를 제공합니다.
//! 핸들러는 요청을 검증해 [`AccountService`]를 호출하고 결과를 HTTP
//! 응답으로 변환하는 일만 합니다.
//!
//! # 엔드포인트
//!
//! - `POST /users` - 계정 등록 (인증 불필요)
//! - `POST /users/token` - 로그인 및 토큰 발급 (form 인코딩)
//! - `GET /users?skip&limit` - 계정 목록 (Admin/Management)
//! - `PUT /users/{id}` - 계정 수정 (Admin)
//! - `DELETE /users/{id}` - 계정 삭제 (Admin)

use axum::{
    extract::{Path, Query, State},
    routing::{post, put},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use account_core::{Account, AccountError, Role};

use crate::auth::CurrentAccount;
use crate::error::{ApiError, ApiErrorBody, ApiResult};
use crate::service::{AccountUpdate, IssuedToken};
use crate::state::AppState;

// ==================== 요청/응답 타입 ====================

/// 등록 요청.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// 이메일 (유니크)
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: String,
    /// 평문 비밀번호
    #[validate(length(min = 1, message = "비밀번호는 비어 있을 수 없습니다"))]
    pub password: String,
    /// 역할 (생략 시 user)
    #[serde(default)]
    pub role: Option<Role>,
}

/// 로그인 form. `username` 필드에 이메일을 넣습니다 (OAuth2 password
/// flow 호환).
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// 계정 수정 요청.
///
/// 생략된 필드는 변경되지 않습니다.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountRequest {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "비밀번호는 비어 있을 수 없습니다"))]
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// 계정 응답. 비밀번호 해시는 절대 포함되지 않습니다.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            role: account.role,
        }
    }
}

/// 삭제 확인 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub detail: String,
}

/// 목록 조회 쿼리 파라미터.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// 건너뛸 레코드 수
    #[serde(default)]
    pub skip: i64,
    /// 최대 반환 수 (1..=500)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

// ==================== 핸들러 ====================

/// 계정 등록.
///
/// `POST /users`
#[utoipa::path(
    post,
    path = "/users",
    tag = "accounts",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "등록된 계정", body = AccountResponse),
        (status = 400, description = "이메일 중복 또는 입력 오류", body = ApiErrorBody)
    )
)]
pub async fn register_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<AccountResponse>> {
    request
        .validate()
        .map_err(|e| ApiError(AccountError::Validation(e.to_string())))?;

    // 호출자가 지정한 역할을 그대로 받는다. 공개 엔드포인트이므로 admin
    // 자가 등록이 가능하다는 점에 주의 (배포 시 강제 user 고정 검토).
    let role = request.role.unwrap_or_default();
    let account = state
        .service()
        .register(&request.email, &request.password, role)
        .await?;

    Ok(Json(account.into()))
}

/// 로그인 및 토큰 발급.
///
/// `POST /users/token`
#[utoipa::path(
    post,
    path = "/users/token",
    tag = "accounts",
    responses(
        (status = 200, description = "발급된 access token", body = IssuedToken),
        (status = 400, description = "이메일 또는 비밀번호 불일치", body = ApiErrorBody)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Json<IssuedToken>> {
    let issued = state
        .service()
        .authenticate(&form.username, &form.password)
        .await?;

    Ok(Json(issued))
}

/// 계정 목록 조회.
///
/// `GET /users?skip&limit` - Bearer 토큰 필요, Admin/Management 전용.
#[utoipa::path(
    get,
    path = "/users",
    tag = "accounts",
    params(ListQuery),
    responses(
        (status = 200, description = "계정 목록 (id 오름차순)", body = [AccountResponse]),
        (status = 401, description = "토큰 누락/무효", body = ApiErrorBody),
        (status = 403, description = "권한 부족", body = ApiErrorBody)
    )
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
    CurrentAccount(acting): CurrentAccount,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let accounts = state
        .service()
        .list_accounts(query.skip, query.limit, &acting)
        .await?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// 계정 수정.
///
/// `PUT /users/{id}` - Bearer 토큰 필요, Admin 전용.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "accounts",
    request_body = UpdateAccountRequest,
    params(("id" = i64, Path, description = "대상 계정 id")),
    responses(
        (status = 200, description = "수정된 계정", body = AccountResponse),
        (status = 401, description = "토큰 누락/무효", body = ApiErrorBody),
        (status = 403, description = "권한 부족", body = ApiErrorBody),
        (status = 404, description = "계정 없음", body = ApiErrorBody)
    )
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    CurrentAccount(acting): CurrentAccount,
    Json(request): Json<UpdateAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    request
        .validate()
        .map_err(|e| ApiError(AccountError::Validation(e.to_string())))?;

    let update = AccountUpdate {
        email: request.email,
        password: request.password,
        role: request.role,
    };
    let account = state.service().update_account(id, update, &acting).await?;

    Ok(Json(account.into()))
}

/// 계정 삭제.
///
/// `DELETE /users/{id}` - Bearer 토큰 필요, Admin 전용.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "accounts",
    params(("id" = i64, Path, description = "대상 계정 id")),
    responses(
        (status = 200, description = "삭제 확인", body = DeleteResponse),
        (status = 401, description = "토큰 누락/무효", body = ApiErrorBody),
        (status = 403, description = "권한 부족", body = ApiErrorBody),
        (status = 404, description = "계정 없음", body = ApiErrorBody)
    )
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    CurrentAccount(acting): CurrentAccount,
) -> ApiResult<Json<DeleteResponse>> {
    state.service().delete_account(id, &acting).await?;

    Ok(Json(DeleteResponse {
        detail: "계정이 삭제되었습니다".to_string(),
    }))
}

/// 계정 라우터 생성.
pub fn accounts_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(register_account).get(list_accounts))
        .route("/token", post(login))
        .route("/{id}", put(update_account).delete(delete_account))
}
