//! Integration tests for the HTTP client functionality.
//!
//! These tests verify request building, default headers, response parsing,
//! and error mapping against a wiremock server.

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use storefront_data::clients::{HttpClient, HttpMethod, HttpRequest, Transport, SDK_VERSION};
use storefront_data::{BaseUrl, HttpError, InvalidHttpRequestError, StorefrontConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer, prefix: Option<&str>) -> HttpClient {
    let mut builder =
        StorefrontConfig::builder().base_url(BaseUrl::new(format!("{}/api/v1", server.uri())).unwrap());
    if let Some(prefix) = prefix {
        builder = builder.user_agent_prefix(prefix);
    }
    HttpClient::new(&builder.build().unwrap()).unwrap()
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_default_headers_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/category"))
        .and(query_param("limit", "4"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "/category")
        .query_param("limit", "4")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!({"success": true}));
}

#[tokio::test]
async fn test_user_agent_prefix_is_sent() {
    let server = MockServer::start().await;
    let expected = format!("ShopFront/2.1 | Storefront Data Library v{SDK_VERSION}");

    Mock::given(method("GET"))
        .and(path("/api/v1/category"))
        .and(header("user-agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, Some("ShopFront/2.1"));
    let request = HttpRequest::builder(HttpMethod::Get, "/category").build().unwrap();
    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    let body = json!({"blog": "b1", "comment": "Hi"});

    Mock::given(method("POST"))
        .and(path("/api/v1/blog-comment"))
        .and(header("content-type", "application/json"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Post, "/blog-comment")
        .body(body)
        .build()
        .unwrap();

    let response = client.send(request).await.unwrap();
    assert_eq!(response.code, 201);
}

// ============================================================================
// Response Tests
// ============================================================================

#[tokio::test]
async fn test_empty_body_parses_as_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/category"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "/category").build().unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_request_id_header_is_exposed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/category"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Request-Id", "req-42"))
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "/category").build().unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.request_id(), Some("req-42"));
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_non_2xx_maps_to_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/static-page/slug/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-404")
                .set_body_json(json!({"success": false, "message": "Page not found"})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "/static-page/slug/missing")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.server_message(), Some("Page not found"));
    assert_eq!(
        error.transport_message().as_deref(),
        Some("Request failed with status code 404")
    );
    match error {
        HttpError::Response(e) => assert_eq!(e.error_reference.as_deref(), Some("req-404")),
        other => panic!("Expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_has_no_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/category"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "/category").build().unwrap();

    let error = client.request(request).await.unwrap_err();
    assert_eq!(error.status(), Some(502));
    assert_eq!(error.server_message(), None);
}

#[tokio::test]
async fn test_truncated_body_maps_to_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0_u8; 1024];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"succ",
            )
            .await
            .unwrap();
    });

    let config = StorefrontConfig::builder()
        .base_url(BaseUrl::new(format!("http://{addr}/api/v1")).unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/category").build().unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)), "{error:?}");
    assert!(error.transport_message().unwrap().starts_with("Network error"));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "/category".to_string(),
        body: Some(json!({"unexpected": true})),
        query: None,
        extra_headers: None,
    };

    let result = client.request(request).await;
    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(InvalidHttpRequestError::UnexpectedBody { .. }))
    ));
}
