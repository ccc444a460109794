use serde::{Deserialize, Serialize};

/// Display label for a project's lifecycle state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    #[display("In Progress")]
    InProgress,
    Planned,
}

/// A gallery entry: an image reference with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub image: String,
    pub caption: String,
}

/// A showcase project.
///
/// `id` is unique within a dataset. `category` is a free-form label used for
/// case-insensitive filtering. A missing `featured` flag counts as featured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub demo_video_url: Option<String>,
    #[serde(default)]
    pub demo_video_kind: Option<String>,
    #[serde(default)]
    pub video_thumbnail: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub views: u32,
    pub created_at: String,
}

/// A blog post. `slug` is preferred over `id` for URL construction when
/// present; the detail endpoint accepts either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    /// Full post body, pre-rendered HTML.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover_image: String,
    pub published_at: String,
    /// Reading-time estimate in minutes.
    pub reading_time: u32,
    #[serde(default)]
    pub featured: bool,
}

impl BlogPost {
    /// The identifier to use when building a URL for this post.
    pub fn route_id(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.id)
    }
}

/// List endpoints are served either as a bare JSON array or wrapped in a
/// `results` object. This is the single place that difference is absorbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Wrapped { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Wrapped { results } => results,
            Self::Bare(items) => items,
        }
    }
}
