pub mod blog_post_card;
pub mod layout;
pub mod project_card;

pub use blog_post_card::BlogPostCard;
pub use project_card::ProjectCard;
