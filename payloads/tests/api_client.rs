//! HTTP-level tests for the API client: endpoint path mapping, listing
//! envelope normalization, and error message extraction.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use httpmock::prelude::*;
use payloads::requests::{BlogListParams, ProjectListParams};
use payloads::{APIClient, ClientError};
use serde_json::json;
use tracing::instrument::WithSubscriber;
use tracing::{Event, Level, Metadata, Subscriber, span};

fn client_for(server: &MockServer) -> APIClient {
    APIClient {
        address: server.base_url(),
        inner_client: reqwest::Client::new(),
    }
}

fn project_json(id: &str, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "Short description",
        "long_description": "Longer description",
        "tech_stack": ["Rust"],
        "status": "Completed",
        "category": category,
        "image": "/images/placeholder.png",
        "created_at": "2025-01-01",
    })
}

fn post_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Post {id}"),
        "category": "Engineering",
        "excerpt": "An excerpt",
        "content": "<p>Body</p>",
        "cover_image": "/images/cover.png",
        "published_at": "2025-02-01",
        "reading_time": 7,
    })
}

#[tokio::test]
async fn list_projects_unwraps_bare_array() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/projects/");
        then.status(200)
            .json_body(json!([project_json("1", "Web"), project_json("2", "Systems")]));
    });

    let projects = client_for(&server)
        .list_projects(&ProjectListParams::default())
        .await?;

    mock.assert();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "1");
    Ok(())
}

#[tokio::test]
async fn list_projects_unwraps_results_envelope() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/");
        then.status(200)
            .json_body(json!({"results": [project_json("1", "Web")]}));
    });

    let projects = client_for(&server)
        .list_projects(&ProjectListParams::default())
        .await?;

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].category, "Web");
    Ok(())
}

#[tokio::test]
async fn list_projects_forwards_query_params() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/projects/")
            .query_param("category", "Web")
            .query_param("search", "cache");
        then.status(200).json_body(json!([]));
    });

    let params = ProjectListParams {
        category: Some("Web".into()),
        search: Some("cache".into()),
        featured: None,
    };
    let projects = client_for(&server).list_projects(&params).await?;

    mock.assert();
    assert!(projects.is_empty());
    Ok(())
}

#[tokio::test]
async fn featured_listing_sets_query_flag() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/projects/")
            .query_param("featured", "true");
        then.status(200).json_body(json!([project_json("1", "Web")]));
    });

    let projects = client_for(&server).list_featured_projects().await?;

    mock.assert();
    assert_eq!(projects.len(), 1);
    Ok(())
}

#[tokio::test]
async fn get_project_uses_trailing_slash_path() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/projects/42/");
        then.status(200).json_body(project_json("42", "Systems"));
    });

    let project = client_for(&server).get_project("42").await?;

    mock.assert();
    assert_eq!(project.id, "42");
    Ok(())
}

#[tokio::test]
async fn blog_endpoints_map_to_expected_paths() -> Result<()> {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/blog/posts/")
            .query_param("category", "Engineering");
        then.status(200).json_body(json!([post_json("a")]));
    });
    let detail_mock = server.mock(|when, then| {
        when.method(GET).path("/api/blog/posts/a/");
        then.status(200).json_body(post_json("a"));
    });

    let client = client_for(&server);
    let posts = client
        .list_blog_posts(&BlogListParams::with_category("Engineering"))
        .await?;
    let post = client.get_blog_post("a").await?;

    list_mock.assert();
    detail_mock.assert();
    assert_eq!(posts.len(), 1);
    assert_eq!(post.reading_time, 7);
    Ok(())
}

#[tokio::test]
async fn non_2xx_prefers_body_message_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/");
        then.status(500)
            .json_body(json!({"message": "database unavailable"}));
    });

    let err = client_for(&server)
        .list_projects(&ProjectListParams::default())
        .await
        .unwrap_err();

    match err {
        ClientError::APIError(status, message) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected APIError, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_without_message_uses_body_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/9/");
        then.status(404).body("no such project");
    });

    let err = client_for(&server).get_project("9").await.unwrap_err();

    match err {
        ClientError::APIError(status, message) => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such project");
        }
        other => panic!("expected APIError, got {other:?}"),
    }
}

/// Counts error-level events; everything else is ignored. The client's only
/// observable error channel besides the returned `ClientError` is its
/// diagnostic log, so tests pin down how often it fires.
struct ErrorCounter(Arc<AtomicUsize>);

impl Subscriber for ErrorCounter {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() == Level::ERROR
    }

    fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

    fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

    fn event(&self, _: &Event<'_>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn enter(&self, _: &span::Id) {}

    fn exit(&self, _: &span::Id) {}
}

#[tokio::test]
async fn failed_attempt_logs_exactly_one_diagnostic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/");
        then.status(500).json_body(json!({"message": "boom"}));
    });

    let client = client_for(&server);
    let errors = Arc::new(AtomicUsize::new(0));

    let result = client
        .list_projects(&ProjectListParams::default())
        .with_subscriber(ErrorCounter(errors.clone()))
        .await;
    assert!(result.is_err());
    assert_eq!(errors.load(Ordering::SeqCst), 1);

    // A second failed attempt logs again, once.
    let result = client
        .list_projects(&ProjectListParams::default())
        .with_subscriber(ErrorCounter(errors.clone()))
        .await;
    assert!(result.is_err());
    assert_eq!(errors.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn transport_failure_logs_exactly_one_diagnostic() {
    let client = APIClient {
        address: "http://127.0.0.1:9".to_string(),
        inner_client: reqwest::Client::new(),
    };
    let errors = Arc::new(AtomicUsize::new(0));

    let result = client
        .list_projects(&ProjectListParams::default())
        .with_subscriber(ErrorCounter(errors.clone()))
        .await;
    assert!(result.is_err());
    assert_eq!(errors.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn successful_request_logs_no_diagnostic() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/");
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    let errors = Arc::new(AtomicUsize::new(0));

    client
        .list_projects(&ProjectListParams::default())
        .with_subscriber(ErrorCounter(errors.clone()))
        .await?;
    assert_eq!(errors.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Port 9 (discard) is never serving HTTP locally.
    let client = APIClient {
        address: "http://127.0.0.1:9".to_string(),
        inner_client: reqwest::Client::new(),
    };

    let err = client
        .list_projects(&ProjectListParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}
