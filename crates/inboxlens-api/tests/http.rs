//! HTTP-level tests for the API client.
//!
//! A local `mockito` server stands in for the analysis backend so the
//! request shapes and error normalization can be checked end to end.

use mockito::{Matcher, Server};
use serde_json::json;

use inboxlens_api::{
    ApiClient, BatchEmail, CONNECTIVITY_MESSAGE, ClientConfig, EmailBackend, ListFilters,
    ProcessEmailRequest,
};

fn client_for(server: &Server) -> ApiClient {
    let config = ClientConfig::parse(&format!("{}/api/v1", server.url())).unwrap();
    ApiClient::new(config).unwrap()
}

#[tokio::test]
async fn test_process_email_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/email/process")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "user_id": "user_1",
            "sender": "boss@company.com",
            "subject": "Q4 budget",
            "body": "Please approve"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "status": "success",
                "data": {
                    "success": true,
                    "email_id": "e-1",
                    "category": "Work",
                    "importance_score": 85,
                    "is_important": true,
                    "suggested_reply": "Approved."
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let request =
        ProcessEmailRequest::new("user_1", "boss@company.com", "Q4 budget", "Please approve");
    let payload = client
        .process_email(&request)
        .await
        .unwrap()
        .into_payload()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(payload.id.as_deref(), Some("e-1"));
    assert_eq!(payload.category.as_deref(), Some("Work"));
    assert_eq!(payload.importance_score, Some(85));
}

async fn submit<B: EmailBackend>(
    backend: &B,
    request: &ProcessEmailRequest,
) -> inboxlens_api::Result<inboxlens_api::ProcessResponse> {
    backend.process_email(request).await
}

#[tokio::test]
async fn test_process_email_through_backend_trait() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/email/process")
        .with_status(200)
        .with_body(r#"{"success": true, "data": {"category": "Spam"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = submit(&client, &ProcessEmailRequest::new("u", "a@x.com", "Win", ""))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.success);
}

#[tokio::test]
async fn test_backend_error_message_is_normalized() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/email/process")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Email must have either subject or body", "status": "error"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .process_email(&ProcessEmailRequest::new("u", "a@x.com", "", ""))
        .await
        .unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.message, "Email must have either subject or body");
    assert_eq!(err.details["status"], "error");
}

#[tokio::test]
async fn test_server_error_without_json_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/stats")
        .match_query(Matcher::UrlEncoded("user_id".into(), "u".into()))
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_stats("u").await.unwrap_err();
    assert_eq!(err.status, 503);
    assert_eq!(err.message, "An error occurred");
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/health")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.health_check().await.unwrap_err();
    assert_eq!(err.status, 0);
    assert!(err.message.starts_with("Invalid response from server"));
}

#[tokio::test]
async fn test_connectivity_failure() {
    // Reserve a port, then release it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::parse(&format!("http://127.0.0.1:{port}/api/v1")).unwrap();
    let client = ApiClient::new(config).unwrap();

    let err = client.health_check().await.unwrap_err();
    assert_eq!(err.status, 0);
    assert_eq!(err.message, CONNECTIVITY_MESSAGE);
    assert!(err.is_connectivity());
}

#[tokio::test]
async fn test_get_emails_with_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/emails")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user_id".into(), "user_1".into()),
            Matcher::UrlEncoded("category".into(), "Work".into()),
            Matcher::UrlEncoded("is_important".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "status": "success",
                "total": 1,
                "data": [{
                    "email_id": "e-9",
                    "sender": "boss@company.com",
                    "subject": "Budget",
                    "category": "Work",
                    "is_important": true,
                    "importance_score": 77
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let filters = ListFilters {
        category: Some("Work".into()),
        important_only: Some(true),
    };
    let list = client.get_emails("user_1", &filters).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.total, 1);
    assert_eq!(list.data[0].id.as_deref(), Some("e-9"));
    assert_eq!(list.data[0].sender.as_deref(), Some("boss@company.com"));
}

#[tokio::test]
async fn test_get_email_by_id_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/emails/missing")
        .match_query(Matcher::UrlEncoded("user_id".into(), "u".into()))
        .with_status(404)
        .with_body(r#"{"error": "Email not found or access denied", "status": "error"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_email_by_id("missing", "u").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message, "Email not found or access denied");
}

#[tokio::test]
async fn test_delete_email() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v1/emails/e-1")
        .match_query(Matcher::UrlEncoded("user_id".into(), "u".into()))
        .with_status(200)
        .with_body(r#"{"status": "success", "message": "Email deleted successfully"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let ack = client.delete_email("e-1", "u").await.unwrap();

    mock.assert_async().await;
    assert_eq!(ack.status, "success");
    assert_eq!(ack.message.as_deref(), Some("Email deleted successfully"));
}

#[tokio::test]
async fn test_get_stats() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/stats")
        .match_query(Matcher::UrlEncoded("user_id".into(), "u".into()))
        .with_status(200)
        .with_body(
            r#"{"status": "success", "data": {"total": 4, "important": 1, "by_category": {"Work": 3, "Spam": 1}}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let stats = client.get_stats("u").await.unwrap().data;
    assert_eq!(stats.total, 4);
    assert_eq!(stats.important, 1);
    assert_eq!(stats.by_category.get("Work"), Some(&3));
}

#[tokio::test]
async fn test_health_unhealthy_is_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/health")
        .with_status(500)
        .with_body(r#"{"status": "unhealthy", "error": "database down"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.health_check().await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "database down");
}

#[tokio::test]
async fn test_process_batch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/email/batch")
        .match_body(Matcher::PartialJson(json!({"user_id": "u"})))
        .with_status(200)
        .with_body(
            json!({
                "status": "success",
                "total": 2,
                "processed": 1,
                "failed": 1,
                "results": [
                    {"success": true, "email_id": "b-1", "category": "Personal"},
                    {"success": false, "error": "rate limited", "email_subject": "Two"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let emails = vec![
        BatchEmail {
            sender: "a@x.com".into(),
            subject: "One".into(),
            body: "1".into(),
        },
        BatchEmail {
            sender: "b@x.com".into(),
            subject: "Two".into(),
            body: "2".into(),
        },
    ];
    let batch = client.process_batch("u", emails).await.unwrap();

    mock.assert_async().await;
    assert_eq!(batch.processed, 1);
    assert_eq!(batch.failed, 1);
    assert_eq!(batch.results[0].analysis.id.as_deref(), Some("b-1"));
    assert_eq!(batch.results[1].error.as_deref(), Some("rate limited"));
}
