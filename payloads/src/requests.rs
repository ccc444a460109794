use serde::{Deserialize, Serialize};

/// Query parameters accepted by the project list endpoint.
///
/// `search` is forwarded to the API but is not applied when the UI falls
/// back to the bundled dataset; see `ui::fallback`.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectListParams {
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        pairs
    }
}

/// Query parameters accepted by the blog post list endpoint.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct BlogListParams {
    pub category: Option<String>,
}

impl BlogListParams {
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match &self.category {
            Some(category) => vec![("category", category.clone())],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_params_render_in_stable_order() {
        let params = ProjectListParams {
            category: Some("Web".into()),
            search: Some("cache".into()),
            featured: Some(true),
        };
        assert_eq!(
            params.query_pairs(),
            vec![
                ("category", "Web".to_string()),
                ("search", "cache".to_string()),
                ("featured", "true".to_string()),
            ]
        );
    }

    #[test]
    fn empty_params_render_no_pairs() {
        assert!(ProjectListParams::default().query_pairs().is_empty());
        assert!(BlogListParams::default().query_pairs().is_empty());
    }
}
