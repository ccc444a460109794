use reqwest::StatusCode;

use crate::requests::{BlogListParams, ProjectListParams};
use crate::responses::{BlogPost, Listing, Project};

/// An API client for interfacing with the portfolio backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, ClientError> {
        self.inner_client
            .get(self.format_url(path))
            .query(query)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(%err, path, "network request failed");
                ClientError::Network(err)
            })
    }
}

/// Methods on the backend API. Everything here is a plain mapping from a
/// logical operation to an endpoint path: read-only GETs, trailing slashes
/// as required by the backend's routing, no business logic.
impl APIClient {
    pub async fn list_projects(
        &self,
        params: &ProjectListParams,
    ) -> Result<Vec<Project>, ClientError> {
        let response = self.get("projects/", &params.query_pairs()).await?;
        Ok(ok_body::<Listing<Project>>(response).await?.into_items())
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ClientError> {
        let response = self.get(&format!("projects/{id}/"), &[]).await?;
        ok_body(response).await
    }

    pub async fn list_featured_projects(
        &self,
    ) -> Result<Vec<Project>, ClientError> {
        let response = self
            .get("projects/", &[("featured", "true".to_string())])
            .await?;
        Ok(ok_body::<Listing<Project>>(response).await?.into_items())
    }

    pub async fn list_blog_posts(
        &self,
        params: &BlogListParams,
    ) -> Result<Vec<BlogPost>, ClientError> {
        let response = self.get("blog/posts/", &params.query_pairs()).await?;
        Ok(ok_body::<Listing<BlogPost>>(response).await?.into_items())
    }

    pub async fn get_blog_post(
        &self,
        id: &str,
    ) -> Result<BlogPost, ClientError> {
        let response = self.get(&format!("blog/posts/{id}/"), &[]).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the server's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Deserialize a successful response into the desired type, or return an
/// appropriate error. Non-2xx responses prefer the body's `message` field
/// over the raw body text.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        tracing::error!(%status, %message, "api request failed");
        return Err(ClientError::APIError(status, message));
    }
    Ok(response.json::<T>().await?)
}
