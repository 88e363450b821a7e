use reqwest::StatusCode;
use rolodex_core::AuditAction;
use serde_json::{Value, json};

use crate::helpers::{TestApp, refresh_cookie};

fn ann() -> Value {
    json!({"name": "Ann", "email": "ann@x.com", "password": "s3cret1"})
}

fn ann_credentials() -> Value {
    json!({"email": "ann@x.com", "password": "s3cret1"})
}

#[tokio::test]
async fn ann_signs_up_signs_in_and_refreshes() {
    let app = TestApp::new().await;

    let response = app.post_sign_up(&ann()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], 1);

    let response = app.post_sign_in(&ann_credentials()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first_cookie = refresh_cookie(&response);
    let body: Value = response.json().await.unwrap();
    let access_token = body["token"].as_str().unwrap().to_string();

    let response = app.get_session(Some(&access_token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user_id"], 1);

    let response = app.post_refresh(Some(&first_cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second_cookie = refresh_cookie(&response);
    assert_ne!(second_cookie, first_cookie);
    let body: Value = response.json().await.unwrap();
    let refreshed_token = body["token"].as_str().unwrap().to_string();

    let response = app.get_session(Some(&refreshed_token)).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user_id"], 1);

    let actions: Vec<AuditAction> = app
        .audit_sink
        .events()
        .await
        .iter()
        .map(|event| event.action)
        .collect();
    assert_eq!(actions, vec![AuditAction::Register, AuditAction::Login]);
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;

    app.post_sign_up(&ann()).await;
    let response = app.post_sign_up(&ann()).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn should_return_422_for_malformed_input() {
    let app = TestApp::new().await;

    let cases = [
        json!({"name": "Ann", "email": "ann.x.com", "password": "s3cret1"}),
        json!({"name": "Ann", "email": "ann@x.com", "password": "123"}),
        json!({"name": "   ", "email": "ann@x.com", "password": "s3cret1"}),
    ];

    for case in cases {
        let response = app.post_sign_up(&case).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "input: {case}"
        );
    }
}

#[tokio::test]
async fn should_return_400_for_unknown_credentials() {
    let app = TestApp::new().await;
    app.post_sign_up(&ann()).await;

    let response = app
        .post_sign_in(&json!({"email": "ann@x.com", "password": "wrong-password"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post_sign_in(&json!({"email": "bob@x.com", "password": "s3cret1"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_401_for_replayed_or_missing_refresh_token() {
    let app = TestApp::new().await;
    app.post_sign_up(&ann()).await;
    let response = app.post_sign_in(&ann_credentials()).await;
    let cookie = refresh_cookie(&response);

    assert_eq!(app.post_refresh(Some(&cookie)).await.status(), StatusCode::OK);
    assert_eq!(
        app.post_refresh(Some(&cookie)).await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.post_refresh(None).await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_return_401_without_bearer_token() {
    let app = TestApp::new().await;

    assert_eq!(app.get_session(None).await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.get_session(Some("invalid_token")).await.status(),
        StatusCode::UNAUTHORIZED
    );
}
