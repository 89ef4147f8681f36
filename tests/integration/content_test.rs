//! Integration tests for the admin content API.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use notebin_entity::keys::{ADMIN_CONFIG_KEY, SHARE_INDEX_KEY};
use notebin_entity::share::Share;

#[tokio::test]
async fn test_save_and_get_content() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    let save = app
        .request(
            "POST",
            "/api/save",
            Some(json!({ "id": "  hello.rs ", "code": "fn main() {}" })),
            Some(&session),
        )
        .await;
    assert_eq!(save.status, StatusCode::OK);
    assert_eq!(save.body["id"], json!("hello.rs"));

    let get = app
        .request("GET", "/api/get?id=hello.rs", None, Some(&session))
        .await;
    assert_eq!(get.status, StatusCode::OK);
    assert_eq!(get.body["code"], json!("fn main() {}"));
}

#[tokio::test]
async fn test_save_without_id_generates_short_id() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    let save = app
        .request("POST", "/api/save", Some(json!({ "code": "x" })), Some(&session))
        .await;
    assert_eq!(save.status, StatusCode::OK);
    let id = save.body["id"].as_str().unwrap();
    assert_eq!(id.len(), 8);
}

#[tokio::test]
async fn test_save_rejects_reserved_ids_and_empty_code() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    for id in [ADMIN_CONFIG_KEY, SHARE_INDEX_KEY] {
        let response = app
            .request(
                "POST",
                "/api/save",
                Some(json!({ "id": id, "code": "{}" })),
                Some(&session),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "id {id}");
    }

    let empty = app
        .request(
            "POST",
            "/api/save",
            Some(json!({ "id": "a", "code": "" })),
            Some(&session),
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_content_is_not_found() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    let response = app
        .request("GET", "/api/get?id=ghost", None, Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_list_hides_system_records() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("b-note", "bb").await;
    app.put_content("a-note", "a").await;
    app.create_share(&session, json!({ "fileId": "a-note" })).await;

    let response = app.request("GET", "/api/list", None, Some(&session)).await;
    assert_eq!(response.status, StatusCode::OK);
    let keys: Vec<&str> = response.body["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["a-note", "b-note"]);
    assert_eq!(response.body["files"][1]["size"], json!(2));
}

#[tokio::test]
async fn test_delete_content_cascades_to_its_shares() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;
    app.put_content("f1", "one").await;
    app.put_content("f2", "two").await;
    for (token, file_id) in [("a", "f1"), ("b", "f1"), ("c", "f2")] {
        app.put_share(&Share::new(token, file_id, "", None, 0, Utc::now()))
            .await;
    }

    let response = app
        .request("DELETE", "/api/delete?id=f1", None, Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["removedShares"], json!(2));

    assert!(app.shares.get("a").await.unwrap().is_none());
    assert!(app.shares.get("b").await.unwrap().is_none());
    assert!(app.shares.get("c").await.unwrap().is_some());

    let gone = app.request("GET", "/api/get?id=f1", None, Some(&session)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let link = app.request("GET", "/share?k=c", None, None).await;
    assert_eq!(link.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_refuses_system_records() {
    let app = helpers::TestApp::new();
    let session = app.login_admin().await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/delete?id={ADMIN_CONFIG_KEY}"),
            None,
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let still_logged_in = app
        .request("GET", "/api/list", None, Some(&session))
        .await;
    assert_eq!(still_logged_in.status, StatusCode::OK);
}

#[tokio::test]
async fn test_content_api_requires_admin_session() {
    let app = helpers::TestApp::new();

    for (method, path) in [
        ("POST", "/api/save"),
        ("GET", "/api/get?id=x"),
        ("DELETE", "/api/delete?id=x"),
        ("GET", "/api/list"),
    ] {
        let response = app
            .request(method, path, Some(json!({ "code": "x" })), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
    }
}
