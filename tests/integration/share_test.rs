//! Integration tests for share link creation, access and management.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use notebin_entity::share::Share;

#[tokio::test]
async fn test_single_view_link_is_used_up_after_first_visit() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("note.js", "let answer = 42;").await;

    let token = app
        .create_share(
            &session,
            json!({ "fileId": "note.js", "password": "", "expire": 3600, "maxVisits": 1 }),
        )
        .await;

    let first = app.request("GET", &format!("/share?k={token}"), None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert!(first.text.contains("let answer = 42;"));
    assert_eq!(first.header("content-type"), Some("text/html; charset=UTF-8"));

    app.wait_for_views(&token, 1).await;

    let second = app.request("GET", &format!("/share?k={token}"), None, None).await;
    assert_eq!(second.status, StatusCode::GONE);
    assert!(second.text.contains("Link used up"));
    assert_eq!(app.views(&token).await, Some(1));
}

#[tokio::test]
async fn test_password_link_prompts_until_password_matches() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("note.js", "hidden text").await;

    let token = app
        .create_share(
            &session,
            json!({ "fileId": "note.js", "password": "secret", "expire": 0, "maxVisits": 0 }),
        )
        .await;
    let path = format!("/share?k={token}");

    let prompt = app.request("GET", &path, None, None).await;
    assert_eq!(prompt.status, StatusCode::OK);
    assert!(prompt.text.contains("Password required"));
    assert!(!prompt.text.contains("hidden text"));
    assert!(!prompt.text.contains("Incorrect password"));

    let wrong = app.submit_password(&path, "wrong").await;
    assert_eq!(wrong.status, StatusCode::OK);
    assert!(wrong.text.contains("Password required"));
    assert!(wrong.text.contains("Incorrect password"));
    assert!(!wrong.text.contains("hidden text"));
    assert_eq!(app.views(&token).await, Some(0));

    let right = app.submit_password(&path, "secret").await;
    assert_eq!(right.status, StatusCode::OK);
    assert!(right.text.contains("hidden text"));
    app.wait_for_views(&token, 1).await;
}

#[tokio::test]
async fn test_raw_mode_serves_plain_text() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("snippet", "<b>not html</b>").await;

    let token = app
        .create_share(&session, json!({ "fileId": "snippet" }))
        .await;

    let response = app
        .request("GET", &format!("/share?k={token}&raw=true"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "<b>not html</b>");
    assert_eq!(
        response.header("content-type"),
        Some("text/plain; charset=UTF-8")
    );
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    app.wait_for_views(&token, 1).await;
}

#[tokio::test]
async fn test_raw_mode_password_prompt_keeps_raw_flag() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("snippet", "raw secret").await;

    let token = app
        .create_share(&session, json!({ "fileId": "snippet", "password": "pw" }))
        .await;
    let path = format!("/share?k={token}&raw=true");

    let prompt = app.request("GET", &path, None, None).await;
    assert_eq!(prompt.status, StatusCode::OK);
    assert!(prompt.text.contains("raw=true"));

    let unlocked = app.submit_password(&path, "pw").await;
    assert_eq!(unlocked.status, StatusCode::OK);
    assert_eq!(unlocked.text, "raw secret");
}

#[tokio::test]
async fn test_missing_token_is_invalid_link() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/share", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.text.contains("Invalid link"));

    let empty = app.request("GET", "/share?k=", None, None).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/share?k=nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text.contains("Link not found"));

    let raw = app.request("GET", "/share?k=nope&raw=true", None, None).await;
    assert_eq!(raw.status, StatusCode::NOT_FOUND);
    assert_eq!(raw.header("content-type"), Some("text/plain; charset=UTF-8"));
}

#[tokio::test]
async fn test_failed_view_count_does_not_fail_the_response() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("note.js", "still served").await;
    let token = app
        .create_share(&session, json!({ "fileId": "note.js", "maxVisits": 1 }))
        .await;

    app.store.fail_writes(true);
    let response = app.request("GET", &format!("/share?k={token}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("still served"));

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    app.store.fail_writes(false);
    assert_eq!(app.views(&token).await, Some(0));
}

#[tokio::test]
async fn test_store_failure_during_resolve_is_server_error() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    let token = app
        .create_share(&session, json!({ "fileId": "note.js" }))
        .await;

    app.store.fail_reads(true);
    let response = app.request("GET", &format!("/share?k={token}"), None, None).await;
    app.store.fail_reads(false);

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text.contains("Server error"));
    assert!(!response.text.contains("read failed"));
}

#[tokio::test]
async fn test_expired_link_reports_expiry_before_anything_else() {
    let app = helpers::TestApp::new();
    app.put_content("f1", "old").await;

    let now = Utc::now();
    let share = Share::new(
        "expired-token",
        "f1",
        "pw",
        Some(now - Duration::hours(1)),
        5,
        now - Duration::hours(2),
    );
    app.put_share(&share).await;

    let response = app.request("GET", "/share?k=expired-token", None, None).await;
    assert_eq!(response.status, StatusCode::GONE);
    assert!(response.text.contains("Link expired"));
}

#[tokio::test]
async fn test_exhausted_link_wins_over_password_prompt() {
    let app = helpers::TestApp::new();
    app.put_content("f1", "text").await;

    let mut share = Share::new("spent", "f1", "pw", None, 2, Utc::now());
    share.views = 2;
    app.put_share(&share).await;

    let response = app.request("GET", "/share?k=spent", None, None).await;
    assert_eq!(response.status, StatusCode::GONE);
    assert!(response.text.contains("Link used up"));

    let unlocked = app.submit_password("/share?k=spent", "pw").await;
    assert_eq!(unlocked.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_missing_source_does_not_consume_a_view() {
    let app = helpers::TestApp::new();
    let share = Share::new("orphan", "gone", "", None, 3, Utc::now());
    app.put_share(&share).await;

    let response = app.request("GET", "/share?k=orphan", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text.contains("Content missing"));

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(app.views("orphan").await, Some(0));
}

#[tokio::test]
async fn test_create_returns_public_url_and_no_expiry_for_zero() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    let response = app
        .request(
            "POST",
            "/api/share/create",
            Some(json!({ "fileId": "note.js", "expire": "0", "maxVisits": null })),
            Some(&session),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    let token = response.body["token"].as_str().unwrap();
    assert_eq!(
        response.body["url"].as_str().unwrap(),
        format!("http://notes.test/share?k={token}")
    );
    assert!(response.body["expiresAt"].is_null());
    assert_eq!(response.body["isPasswordProtected"], json!(false));

    let stored = app.shares.get(token).await.unwrap().unwrap();
    assert_eq!(stored.expire, None);
    assert_eq!(stored.views, 0);
}

#[tokio::test]
async fn test_create_reports_expiry_in_millis() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    let before = Utc::now().timestamp_millis();
    let response = app
        .request(
            "POST",
            "/api/share/create",
            Some(json!({ "fileId": "note.js", "expire": 3600 })),
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let expires_at = response.body["expiresAt"].as_i64().unwrap();
    assert!(expires_at >= before + 3_600_000);
    assert!(expires_at <= Utc::now().timestamp_millis() + 3_600_000);
}

#[tokio::test]
async fn test_create_rejects_missing_file_id_and_bad_numbers() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    let missing = app
        .request("POST", "/api/share/create", Some(json!({})), Some(&session))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let negative = app
        .request(
            "POST",
            "/api/share/create",
            Some(json!({ "fileId": "f", "expire": -5 })),
            Some(&session),
        )
        .await;
    assert!(negative.status.is_client_error());
}

#[tokio::test]
async fn test_share_api_requires_admin_session() {
    let app = helpers::TestApp::new();

    let create = app
        .request("POST", "/api/share/create", Some(json!({ "fileId": "f" })), None)
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);

    let list = app.request("GET", "/api/share/list", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);

    let delete = app
        .request("DELETE", "/api/share/delete?token=x", None, None)
        .await;
    assert_eq!(delete.status, StatusCode::UNAUTHORIZED);

    let batch = app
        .request("POST", "/api/share/batch_delete", Some(json!({ "tokens": [] })), None)
        .await;
    assert_eq!(batch.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_prunes_expired_but_keeps_exhausted() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    let now = Utc::now();

    let expired = Share::new("old", "f1", "", Some(now - Duration::minutes(1)), 0, now - Duration::hours(1));
    let mut exhausted = Share::new("spent", "f1", "pw", None, 1, now - Duration::minutes(30));
    exhausted.views = 1;
    let live = Share::new("live", "f2", "", Some(now + Duration::hours(1)), 0, now);
    for share in [&expired, &exhausted, &live] {
        app.put_share(share).await;
    }

    let first = app.request("GET", "/api/share/list", None, Some(&session)).await;
    assert_eq!(first.status, StatusCode::OK);
    let tokens: Vec<&str> = first.body["shares"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["token"].as_str().unwrap())
        .collect();
    assert_eq!(tokens, vec!["spent", "live"]);
    assert_eq!(first.body["shares"][0]["hasPassword"], json!(true));
    assert!(first.body["shares"][0].get("password").is_none());

    assert!(app.shares.get("old").await.unwrap().is_none());

    let second = app.request("GET", "/api/share/list", None, Some(&session)).await;
    assert_eq!(second.body, first.body);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_share(&Share::new("t1", "f1", "", None, 0, Utc::now()))
        .await;

    let first = app
        .request("DELETE", "/api/share/delete?token=t1", None, Some(&session))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["removed"], json!(true));
    assert!(app.shares.get("t1").await.unwrap().is_none());

    let again = app
        .request("DELETE", "/api/share/delete?token=t1", None, Some(&session))
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["removed"], json!(false));

    let missing = app
        .request("DELETE", "/api/share/delete", None, Some(&session))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_delete_tolerates_unknown_tokens() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    for token in ["a", "b", "c"] {
        app.put_share(&Share::new(token, "f1", "", None, 0, Utc::now()))
            .await;
    }

    let response = app
        .request(
            "POST",
            "/api/share/batch_delete",
            Some(json!({ "tokens": ["a", "c", "zzz"] })),
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["removed"], json!(2));
    assert!(app.shares.get("a").await.unwrap().is_none());
    assert!(app.shares.get("b").await.unwrap().is_some());
    assert!(app.shares.get("c").await.unwrap().is_none());

    let malformed = app
        .request("POST", "/api/share/batch_delete", Some(json!({})), Some(&session))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_preview_bypasses_share_index() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("draft", "work in progress").await;

    let anonymous = app.request("GET", "/share?id=draft", None, None).await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);
    assert!(anonymous.text.contains("Access denied"));
    assert!(!anonymous.text.contains("work in progress"));

    let preview = app
        .request("GET", "/share?id=draft", None, Some(&session))
        .await;
    assert_eq!(preview.status, StatusCode::OK);
    assert!(preview.text.contains("work in progress"));

    let missing = app
        .request("GET", "/share?id=nothing", None, Some(&session))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
