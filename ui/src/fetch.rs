//! Bridges the API client and the hooks: remote fetches with graceful
//! degradation to the bundled datasets. List loads never surface errors;
//! single-item loads only do when the bundled data has no match.

use payloads::requests::{BlogListParams, ProjectListParams};
use payloads::responses::{BlogPost, Project};
use payloads::{APIClient, ClientError};

use crate::fallback;

/// Where a resolved value came from. Fallback values render like normal
/// data but stay distinguishable from healthy remote fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Remote,
    Fallback,
}

/// A fetched value tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub origin: DataOrigin,
    pub data: T,
}

impl<T> Sourced<T> {
    pub fn remote(data: T) -> Self {
        Self {
            origin: DataOrigin::Remote,
            data,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            origin: DataOrigin::Fallback,
            data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == DataOrigin::Fallback
    }
}

/// Fetch the project list, substituting the bundled dataset on any failure.
pub async fn load_projects(
    client: &APIClient,
    params: &ProjectListParams,
) -> Sourced<Vec<Project>> {
    match client.list_projects(params).await {
        Ok(projects) => Sourced::remote(projects),
        Err(err) => {
            tracing::warn!(
                %err,
                "project list fetch failed, serving bundled data"
            );
            Sourced::fallback(fallback::projects_matching(params))
        }
    }
}

/// Fetch the featured projects, substituting the bundled entries whose
/// featured flag is not explicitly false.
pub async fn load_featured_projects(
    client: &APIClient,
) -> Sourced<Vec<Project>> {
    match client.list_featured_projects().await {
        Ok(projects) => Sourced::remote(projects),
        Err(err) => {
            tracing::warn!(
                %err,
                "featured projects fetch failed, serving bundled data"
            );
            Sourced::fallback(fallback::featured_projects())
        }
    }
}

/// Fetch a single project. On failure the bundled dataset is searched by id,
/// slug, or numeric id; if nothing matches, the original error propagates.
pub async fn load_project(
    client: &APIClient,
    id: &str,
) -> Result<Sourced<Project>, ClientError> {
    match client.get_project(id).await {
        Ok(project) => Ok(Sourced::remote(project)),
        Err(err) => match fallback::find_project(id) {
            Some(project) => {
                tracing::warn!(
                    %err,
                    id,
                    "project fetch failed, serving bundled entry"
                );
                Ok(Sourced::fallback(project))
            }
            None => Err(err),
        },
    }
}

/// Fetch the blog post list. There is no bundled blog content, so the
/// fallback is the empty list; the caller still never sees an error.
pub async fn load_blog_posts(
    client: &APIClient,
    params: &BlogListParams,
) -> Sourced<Vec<BlogPost>> {
    match client.list_blog_posts(params).await {
        Ok(posts) => Sourced::remote(posts),
        Err(err) => {
            tracing::warn!(%err, "blog post list fetch failed");
            Sourced::fallback(Vec::new())
        }
    }
}

/// Fetch a single blog post. No fallback exists; failures propagate.
pub async fn load_blog_post(
    client: &APIClient,
    id: &str,
) -> Result<Sourced<BlogPost>, ClientError> {
    let post = client.get_blog_post(id).await?;
    Ok(Sourced::remote(post))
}
