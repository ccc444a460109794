//! End-to-end behavior of the load layer against a mock backend: remote
//! results pass through tagged as remote; failures degrade to the bundled
//! datasets per the documented policy.

use anyhow::Result;
use httpmock::prelude::*;
use payloads::requests::{BlogListParams, ProjectListParams};
use payloads::{APIClient, ClientError};
use serde_json::json;
use ui::fallback::FEATURED_PROJECTS;
use ui::fetch::{
    DataOrigin, load_blog_post, load_blog_posts, load_featured_projects,
    load_project, load_projects,
};

fn client_for(server: &MockServer) -> APIClient {
    APIClient {
        address: server.base_url(),
        inner_client: reqwest::Client::new(),
    }
}

/// A client pointed at a port nothing is listening on.
fn unreachable_client() -> APIClient {
    APIClient {
        address: "http://127.0.0.1:9".to_string(),
        inner_client: reqwest::Client::new(),
    }
}

#[tokio::test]
async fn remote_success_is_tagged_remote() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/");
        then.status(200).json_body(json!([{
            "id": "r1",
            "title": "Remote project",
            "description": "d",
            "long_description": "ld",
            "tech_stack": ["Rust"],
            "status": "Completed",
            "category": "Systems",
            "image": "/img.png",
            "created_at": "2025-01-01",
        }]));
    });

    let client = client_for(&server);
    let result = load_projects(&client, &ProjectListParams::default()).await;

    assert_eq!(result.origin, DataOrigin::Remote);
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].id, "r1");
    Ok(())
}

#[tokio::test]
async fn server_error_falls_back_to_full_bundled_dataset() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/");
        then.status(500).json_body(json!({"message": "boom"}));
    });

    let client = client_for(&server);
    let result = load_projects(&client, &ProjectListParams::default()).await;

    assert_eq!(result.origin, DataOrigin::Fallback);
    assert_eq!(result.data.len(), 5);
    assert_eq!(result.data, *FEATURED_PROJECTS);
}

#[tokio::test]
async fn fallback_list_applies_category_case_insensitively() {
    let client = unreachable_client();
    let params = ProjectListParams::with_category("WEB DEVELOPMENT");

    let result = load_projects(&client, &params).await;

    let expected: Vec<_> = FEATURED_PROJECTS
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case("WEB DEVELOPMENT"))
        .cloned()
        .collect();
    assert_eq!(result.origin, DataOrigin::Fallback);
    assert_eq!(result.data, expected);
    assert!(!result.data.is_empty());
}

#[tokio::test]
async fn fallback_featured_excludes_explicitly_unfeatured() {
    let client = unreachable_client();

    let result = load_featured_projects(&client).await;

    assert_eq!(result.origin, DataOrigin::Fallback);
    assert!(result.data.iter().all(|p| p.featured != Some(false)));
    assert_eq!(
        result.data.len(),
        FEATURED_PROJECTS
            .iter()
            .filter(|p| p.featured != Some(false))
            .count()
    );
}

#[tokio::test]
async fn failed_single_fetch_recovers_by_id_slug_or_numeric_id() -> Result<()>
{
    let client = unreachable_client();

    let by_id = load_project(&client, "1").await?;
    assert_eq!(by_id.origin, DataOrigin::Fallback);
    assert_eq!(by_id.data.id, "1");

    let by_slug = load_project(&client, "tinycache").await?;
    assert_eq!(by_slug.data.id, "1");

    let by_numeric = load_project(&client, "04").await?;
    assert_eq!(by_numeric.data.id, "4");

    Ok(())
}

#[tokio::test]
async fn unknown_single_fetch_propagates_the_original_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/projects/123/");
        then.status(404).json_body(json!({"message": "not found"}));
    });

    let client = client_for(&server);
    let err = load_project(&client, "123").await.unwrap_err();

    match err {
        ClientError::APIError(status, message) => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected APIError, got {other:?}"),
    }
}

#[tokio::test]
async fn blog_list_failure_resolves_to_empty_fallback() {
    let client = unreachable_client();

    let result = load_blog_posts(&client, &BlogListParams::default()).await;

    assert_eq!(result.origin, DataOrigin::Fallback);
    assert!(result.data.is_empty());
}

#[tokio::test]
async fn blog_post_failure_propagates() {
    let client = unreachable_client();

    let err = load_blog_post(&client, "some-post").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
