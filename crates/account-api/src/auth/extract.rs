//! Axum용 인증 추출기.
//!
//! Authorization 헤더의 Bearer 토큰을 검증하고, 토큰 subject에 해당하는
//! 계정을 저장소에서 로드하여 핸들러에 주입합니다.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;

use account_core::{Account, AccountError};

use crate::error::ApiError;
use crate::state::AppState;

/// 인증된 계정 추출기.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(
///     CurrentAccount(acting): CurrentAccount,
/// ) -> impl IntoResponse {
///     format!("Authenticated as {}", acting.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

/// 인증 거부.
///
/// 토큰 누락, 헤더 형식 오류, 검증 실패, 계정 없음을 구분하지 않고
/// 모두 401 `UNAUTHENTICATED`로 응답합니다.
pub type AuthRejection = ApiError;

impl FromRequestParts<Arc<AppState>> for CurrentAccount {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        // Authorization 헤더에서 Bearer 토큰 추출
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError(AccountError::Unauthenticated))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError(AccountError::Unauthenticated))?;

        // 토큰 검증 (실패 원인은 구분하지 않음)
        let subject = state
            .tokens
            .verify(token)
            .map_err(|_| ApiError(AccountError::Unauthenticated))?;

        // subject 계정 로드. 저장소 장애는 인증 실패가 아니라 내부 에러다.
        let account = state
            .store
            .find_by_email(&subject)
            .await
            .map_err(|e| ApiError(AccountError::Internal(e.to_string())))?;

        account
            .map(CurrentAccount)
            .ok_or(ApiError(AccountError::Unauthenticated))
    }
}
