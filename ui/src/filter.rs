//! Client-side category filtering for list pages. Pure and idempotent;
//! filtering happens on whatever the hooks returned, remote or bundled.

use payloads::responses::{BlogPost, Project};

/// Sentinel category meaning "no filtering".
pub const ALL_CATEGORIES: &str = "All";

fn is_all(selected: &str) -> bool {
    selected.eq_ignore_ascii_case(ALL_CATEGORIES)
}

/// Blog filtering matches category labels exactly. The labels are a fixed
/// set rendered as filter chips, so no case folding is wanted here.
pub fn filter_blog_posts(selected: &str, posts: &[BlogPost]) -> Vec<BlogPost> {
    if is_all(selected) {
        return posts.to_vec();
    }
    posts
        .iter()
        .filter(|p| p.category == selected)
        .cloned()
        .collect()
}

/// Project filtering is looser: case-insensitive on category, and a
/// selection also matches any entry whose tech stack contains it.
pub fn filter_projects(selected: &str, projects: &[Project]) -> Vec<Project> {
    if is_all(selected) {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| {
            p.category.eq_ignore_ascii_case(selected)
                || p.tech_stack
                    .iter()
                    .any(|tech| tech.eq_ignore_ascii_case(selected))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::FEATURED_PROJECTS;
    use payloads::responses::BlogPost;

    fn post(id: &str, category: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            slug: None,
            title: format!("Post {id}"),
            category: category.to_string(),
            excerpt: String::new(),
            content: String::new(),
            tags: Vec::new(),
            cover_image: String::new(),
            published_at: "2025-01-01".to_string(),
            reading_time: 5,
            featured: false,
        }
    }

    #[test]
    fn all_sentinel_is_identity() {
        let projects = &*FEATURED_PROJECTS;
        assert_eq!(filter_projects("All", projects), *projects);
        assert_eq!(filter_projects("all", projects), *projects);

        let posts = vec![post("a", "Engineering"), post("b", "Career")];
        assert_eq!(filter_blog_posts("All", &posts), posts);
    }

    #[test]
    fn blog_filter_is_case_sensitive() {
        let posts = vec![post("a", "Engineering"), post("b", "Career")];
        assert_eq!(filter_blog_posts("Engineering", &posts).len(), 1);
        assert!(filter_blog_posts("engineering", &posts).is_empty());
    }

    #[test]
    fn project_filter_matches_category_or_tech_tag() {
        let projects = &*FEATURED_PROJECTS;
        let by_category = filter_projects("systems", projects);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].category, "Systems");

        // "Rust" is a tech tag, not a category.
        let by_tech = filter_projects("rust", projects);
        assert!(!by_tech.is_empty());
        assert!(
            by_tech
                .iter()
                .all(|p| p.tech_stack.iter().any(|t| t == "Rust"))
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let projects = &*FEATURED_PROJECTS;
        let once = filter_projects("Web Development", projects);
        let twice = filter_projects("Web Development", &once);
        assert_eq!(once, twice);

        let posts = vec![post("a", "Engineering"), post("b", "Career")];
        let once = filter_blog_posts("Career", &posts);
        let twice = filter_blog_posts("Career", &once);
        assert_eq!(once, twice);
    }
}
