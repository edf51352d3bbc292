//! Tests for the Userbase client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use userbase_client::{ClientConfig, ClientError, UsersClient};
use userbase_core::User;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> UsersClient {
    UsersClient::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_http_url() {
        let client = UsersClient::new(ClientConfig::new("http://localhost:8080"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        match UsersClient::new(ClientConfig::new("")) {
            Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match UsersClient::new(ClientConfig::new("example.com")) {
            Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("http://")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_trailing_slashes_removed() {
        let client = UsersClient::new(ClientConfig::new("http://example.com///")).unwrap();
        assert_eq!(client.url(), "http://example.com");
    }
}

// =============================================================================
// Read Tests
// =============================================================================

mod reads {
    use super::*;

    #[tokio::test]
    async fn test_list_users() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "name": "Name 1" },
                { "id": 2, "name": "Name 2" }
            ])))
            .mount(&server)
            .await;

        let users = client_for(&server).await.list_users().await.unwrap();
        assert_eq!(users, vec![User::new(1, "Name 1"), User::new(2, "Name 2")]);
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/7"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "id": 7, "name": "Name 7" })),
            )
            .mount(&server)
            .await;

        let user = client_for(&server).await.get_user(7).await.unwrap();
        assert_eq!(user, Some(User::new(7, "Name 7")));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/8"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let user = client_for(&server).await.get_user(8).await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_count() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/count"))
            .respond_with(ResponseTemplate::new(200).set_body_string("100000"))
            .mount(&server)
            .await;

        let count = client_for(&server).await.count().await.unwrap();
        assert_eq!(count, 100_000);
    }

    #[tokio::test]
    async fn test_get_range_sends_query_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/range"))
            .and(query_param("start", "3"))
            .and(query_param("range", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 3, "name": "Name 3" },
                { "id": 4, "name": "Name 4" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).await.get_range(3, 2).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 3);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/count"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not a number"))
            .mount(&server)
            .await;

        match client_for(&server).await.count().await {
            Err(ClientError::ParseError(_)) => {}
            other => panic!("Expected ParseError, got: {:?}", other),
        }
    }
}

// =============================================================================
// Write Tests
// =============================================================================

mod writes {
    use super::*;

    #[tokio::test]
    async fn test_create_user_posts_name() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(serde_json::json!({ "id": null, "name": "Alice" })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.create_user("Alice").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_user_rejects_unexpected_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        match client_for(&server).await.create_user("Alice").await {
            Err(ClientError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected ServerError, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_user() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/users/5"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.delete_user(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_rename_user() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/users/5"))
            .and(body_json(serde_json::json!({ "id": null, "name": "Renamed" })))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        Mock::given(method("PATCH"))
            .and(path("/users/6"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.rename_user(5, Some("Renamed")).await.unwrap());
        assert!(!client.rename_user(6, Some("Renamed")).await.unwrap());
    }

    #[tokio::test]
    async fn test_rename_user_to_null() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/users/5"))
            .and(body_json(serde_json::json!({ "id": null, "name": null })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.rename_user(5, None).await.unwrap());
    }
}

// =============================================================================
// Connection Tests
// =============================================================================

mod connection {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "version": "0.1.0"
            })))
            .mount(&server)
            .await;

        let info = client_for(&server).await.health().await.unwrap();
        assert_eq!(info.status, "ok");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Port 9 (discard) is almost never listening
        let client = UsersClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();

        match client.health().await {
            Err(ClientError::ServerUnreachable(_) | ClientError::Request(_)) => {}
            other => panic!("Expected ServerUnreachable or Request error, got: {:?}", other),
        }
    }
}
