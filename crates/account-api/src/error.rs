//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공합니다. 핸들러는
//! [`ApiResult`]를 반환하고 `?`로 에러를 전파하면 상태 코드와
//! `{"error": {"code", "message"}}` 본문으로 변환됩니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use account_core::AccountError;

/// API 에러 본문.
///
/// # 예시
///
/// ```json
/// {
///   "error": {
///     "code": "EMAIL_TAKEN",
///     "message": "이미 등록된 이메일입니다"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    /// 에러 코드 (예: "EMAIL_TAKEN", "FORBIDDEN")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
}

/// [`AccountError`]의 HTTP 래퍼.
#[derive(Debug)]
pub struct ApiError(pub AccountError);

/// API 핸들러 Result 타입.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// 상태 코드와 에러 코드 매핑.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            AccountError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AccountError::EmailTaken => (StatusCode::BAD_REQUEST, "EMAIL_TAKEN"),
            AccountError::InvalidCredentials => (StatusCode::BAD_REQUEST, "INVALID_CREDENTIALS"),
            AccountError::Unauthenticated => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            AccountError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AccountError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AccountError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // 내부 장애 상세는 로그로만 남기고 응답에서는 숨긴다
        let message = if self.0.is_internal() {
            tracing::error!("요청 처리 실패: {}", self.0);
            "내부 에러가 발생했습니다".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({
            "error": ApiErrorBody {
                code: code.to_string(),
                message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AccountError::Validation("bad email".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (AccountError::EmailTaken, StatusCode::BAD_REQUEST),
            (AccountError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (AccountError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AccountError::Forbidden, StatusCode::FORBIDDEN),
            (AccountError::NotFound, StatusCode::NOT_FOUND),
            (
                AccountError::Internal("db down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn test_internal_detail_is_hidden() {
        let response =
            ApiError(AccountError::Internal("connection to 10.0.0.3 refused".to_string()))
                .into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        assert!(text.contains("INTERNAL_ERROR"));
        assert!(!text.contains("10.0.0.3"));
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError(AccountError::EmailTaken).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed["error"]["code"], "EMAIL_TAKEN");
        assert!(parsed["error"]["message"].is_string());
    }
}
