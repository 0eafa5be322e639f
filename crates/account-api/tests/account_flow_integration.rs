//! 계정 수명주기 통합 테스트
//!
//! 등록부터 삭제까지 전체 흐름을 HTTP 라우터를 통해 검증합니다.
//! 저장소는 인메모리 구현을 사용합니다.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use account_api::repository::{AccountStore, MemoryAccountStore};
use account_api::routes::create_api_router;
use account_api::state::{create_test_state, AppState};
use account_core::{AccountChanges, Role};

fn test_app() -> (Router, Arc<AppState>, Arc<MemoryAccountStore>) {
    let (state, store) = create_test_state();
    let app = create_api_router().with_state(state.clone());
    (app, state, store)
}

fn register_request(email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"email": email, "password": password}).to_string(),
        ))
        .unwrap()
}

fn login_request(email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/users/token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={}&password={}", email, password)))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_account_lifecycle_over_http() {
    let (app, _state, store) = test_app();

    // 1. 등록
    let response = app
        .clone()
        .oneshot(register_request("a@x.com", "pw1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let registered = body_json(response).await;
    assert_eq!(registered["email"], "a@x.com");
    assert_eq!(registered["role"], "user");
    let account_id = registered["id"].as_i64().unwrap();

    // 2. 같은 이메일 재등록은 비밀번호가 달라도 거부
    let response = app
        .clone()
        .oneshot(register_request("a@x.com", "pw2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "EMAIL_TAKEN");

    // 3. 로그인 후 bearer 토큰 발급
    let response = app
        .clone()
        .oneshot(login_request("a@x.com", "pw1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let issued = body_json(response).await;
    assert_eq!(issued["token_type"], "bearer");
    let token = issued["access_token"].as_str().unwrap().to_string();

    // 4. 일반 사용자 역할로는 목록 조회 불가
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/users")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // 5. 토큰 없이는 401
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 6. 저장소 직접 수정으로 관리자 승격 (발급된 토큰은 그대로 유효)
    store
        .update(
            account_id,
            AccountChanges {
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    // 7. 관리자 권한으로 목록 조회
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/users?skip=0&limit=10")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    // 8. 다른 계정을 등록하고 관리자가 이메일을 변경
    let response = app
        .clone()
        .oneshot(register_request("target@x.com", "pw"))
        .await
        .unwrap();
    let target_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/users/{}", target_id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email": "b@x.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "b@x.com");

    // 9. 삭제 후 같은 id 수정은 404
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/users/{}", target_id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/users/{}", target_id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email": "c@x.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    println!("✅ 계정 수명주기 통합 테스트 성공");
}

#[tokio::test]
async fn test_credential_failures_are_indistinguishable_over_http() {
    let (app, _state, _store) = test_app();

    app.clone()
        .oneshot(register_request("a@x.com", "pw1"))
        .await
        .unwrap();

    let wrong_password = app
        .clone()
        .oneshot(login_request("a@x.com", "wrong"))
        .await
        .unwrap();
    let unknown_email = app
        .oneshot(login_request("ghost@x.com", "pw1"))
        .await
        .unwrap();

    // 상태 코드와 본문이 완전히 같아야 이메일 존재 여부가 새지 않는다
    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(wrong_password).await,
        body_json(unknown_email).await
    );
}
