//! Bundled portfolio data, served when the API is unreachable so list pages
//! never render empty. Read-only; the hooks layer decides when to use it.

use std::sync::LazyLock;

use payloads::requests::ProjectListParams;
use payloads::responses::{GalleryImage, Project, ProjectStatus};

/// Showcase projects bundled into the app.
pub static FEATURED_PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: "1".to_string(),
            slug: Some("tinycache".to_string()),
            title: "TinyCache".to_string(),
            description: "An in-memory cache server with TTL eviction and a \
                          line-based wire protocol."
                .to_string(),
            long_description: "TinyCache started as a weekend experiment in \
                               writing a memcached-style server from scratch. \
                               It grew a proper TTL wheel, pipelined command \
                               parsing, and a small benchmark harness."
                .to_string(),
            tech_stack: vec![
                "Rust".to_string(),
                "Tokio".to_string(),
                "Criterion".to_string(),
            ],
            status: ProjectStatus::Completed,
            category: "Systems".to_string(),
            image: "/images/projects/tinycache.png".to_string(),
            gallery: vec![GalleryImage {
                image: "/images/projects/tinycache-bench.png".to_string(),
                caption: "Throughput under pipelined load".to_string(),
            }],
            demo_url: None,
            source_url: Some(
                "https://github.com/example/tinycache".to_string(),
            ),
            demo_video_url: None,
            demo_video_kind: None,
            video_thumbnail: None,
            featured: None,
            views: 1843,
            created_at: "2023-06-12".to_string(),
        },
        Project {
            id: "2".to_string(),
            slug: Some("portfolio-site".to_string()),
            title: "Portfolio Site".to_string(),
            description: "This site: a WebAssembly single-page app with \
                          graceful API degradation."
                .to_string(),
            long_description: "The site you are looking at. Data loads from \
                               a small REST API and falls back to bundled \
                               content when the backend is offline, so the \
                               portfolio never looks broken."
                .to_string(),
            tech_stack: vec![
                "Rust".to_string(),
                "Yew".to_string(),
                "Tailwind CSS".to_string(),
            ],
            status: ProjectStatus::Completed,
            category: "Web Development".to_string(),
            image: "/images/projects/portfolio.png".to_string(),
            gallery: Vec::new(),
            demo_url: Some("https://example.dev".to_string()),
            source_url: Some(
                "https://github.com/example/portfolio".to_string(),
            ),
            demo_video_url: None,
            demo_video_kind: None,
            video_thumbnail: None,
            featured: Some(true),
            views: 962,
            created_at: "2024-01-20".to_string(),
        },
        Project {
            id: "3".to_string(),
            slug: Some("mlflow-lite".to_string()),
            title: "MLflow Lite".to_string(),
            description: "A minimal experiment tracker for small ML teams."
                .to_string(),
            long_description: "Tracks runs, metrics, and artifacts behind a \
                               single-binary server. Built to learn what the \
                               big trackers actually need and what they can \
                               live without."
                .to_string(),
            tech_stack: vec![
                "Python".to_string(),
                "FastAPI".to_string(),
                "SQLite".to_string(),
            ],
            status: ProjectStatus::Planned,
            category: "Machine Learning".to_string(),
            image: "/images/projects/mlflow-lite.png".to_string(),
            gallery: Vec::new(),
            demo_url: None,
            source_url: None,
            demo_video_url: None,
            demo_video_kind: None,
            video_thumbnail: None,
            // An unfinished side quest; kept out of the featured rail.
            featured: Some(false),
            views: 127,
            created_at: "2024-09-03".to_string(),
        },
        Project {
            id: "4".to_string(),
            slug: Some("ship-it".to_string()),
            title: "Ship It".to_string(),
            description: "Deploy pipeline tooling: preview environments per \
                          pull request."
                .to_string(),
            long_description: "A CLI plus a controller that spins up an \
                               ephemeral environment for every pull request \
                               and tears it down on merge. Demo video walks \
                               through a full cycle."
                .to_string(),
            tech_stack: vec![
                "Go".to_string(),
                "Kubernetes".to_string(),
                "GitHub Actions".to_string(),
            ],
            status: ProjectStatus::InProgress,
            category: "DevOps".to_string(),
            image: "/images/projects/ship-it.png".to_string(),
            gallery: vec![GalleryImage {
                image: "/images/projects/ship-it-dash.png".to_string(),
                caption: "Environment dashboard".to_string(),
            }],
            demo_url: None,
            source_url: Some("https://github.com/example/ship-it".to_string()),
            demo_video_url: Some(
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            ),
            demo_video_kind: Some("youtube".to_string()),
            video_thumbnail: Some(
                "/images/projects/ship-it-thumb.png".to_string(),
            ),
            featured: None,
            views: 541,
            created_at: "2024-04-18".to_string(),
        },
        Project {
            id: "5".to_string(),
            slug: Some("pixel-forge".to_string()),
            title: "Pixel Forge".to_string(),
            description: "A browser-based sprite editor with palette \
                          constraints."
                .to_string(),
            long_description: "Canvas-based pixel editor supporting layers, \
                               palette locking, and export to common engine \
                               formats."
                .to_string(),
            tech_stack: vec![
                "TypeScript".to_string(),
                "React".to_string(),
                "Canvas".to_string(),
            ],
            status: ProjectStatus::Completed,
            category: "Web Development".to_string(),
            image: "/images/projects/pixel-forge.png".to_string(),
            gallery: Vec::new(),
            demo_url: Some("https://pixelforge.example.dev".to_string()),
            source_url: None,
            demo_video_url: None,
            demo_video_kind: None,
            video_thumbnail: None,
            featured: Some(true),
            views: 2210,
            created_at: "2023-11-02".to_string(),
        },
    ]
});

/// Fallback for the project list. Only the category parameter is applied;
/// search terms are accepted but not matched against the bundled data,
/// mirroring the remote integration as shipped.
pub fn projects_matching(params: &ProjectListParams) -> Vec<Project> {
    let projects = FEATURED_PROJECTS.clone();
    match &params.category {
        Some(category) => projects
            .into_iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect(),
        None => projects,
    }
}

/// Fallback for the featured listing: a missing flag counts as featured.
pub fn featured_projects() -> Vec<Project> {
    FEATURED_PROJECTS
        .iter()
        .filter(|p| p.featured != Some(false))
        .cloned()
        .collect()
}

/// Look up a single bundled project by id, slug, or numeric id equality, in
/// that precedence order.
pub fn find_project(id: &str) -> Option<Project> {
    let projects = &*FEATURED_PROJECTS;
    if let Some(project) = projects.iter().find(|p| p.id == id) {
        return Some(project.clone());
    }
    if let Some(project) =
        projects.iter().find(|p| p.slug.as_deref() == Some(id))
    {
        return Some(project.clone());
    }
    let numeric = id.parse::<u64>().ok()?;
    projects
        .iter()
        .find(|p| p.id.parse::<u64>().ok() == Some(numeric))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_ids_are_unique() {
        let mut ids: Vec<_> =
            FEATURED_PROJECTS.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FEATURED_PROJECTS.len());
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let params = ProjectListParams::with_category("web development");
        let matched = projects_matching(&params);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|p| p.category == "Web Development"));
    }

    #[test]
    fn search_param_has_no_fallback_effect() {
        let params = ProjectListParams {
            search: Some("nonexistent".to_string()),
            ..Default::default()
        };
        assert_eq!(projects_matching(&params).len(), FEATURED_PROJECTS.len());
    }

    #[test]
    fn missing_featured_flag_counts_as_featured() {
        let featured = featured_projects();
        assert_eq!(featured.len(), 4);
        assert!(featured.iter().all(|p| p.featured != Some(false)));
    }

    #[test]
    fn find_project_matches_id_then_slug_then_numeric() {
        assert_eq!(find_project("1").unwrap().id, "1");
        assert_eq!(find_project("tinycache").unwrap().id, "1");
        // A zero-padded id only matches via numeric parsing.
        assert_eq!(find_project("04").unwrap().id, "4");
        assert!(find_project("123").is_none());
        assert!(find_project("no-such-slug").is_none());
    }
}
