pub mod use_blog_post;
pub mod use_blog_posts;
pub mod use_featured_projects;
pub mod use_project;
pub mod use_projects;

pub use use_blog_post::use_blog_post;
pub use use_blog_posts::use_blog_posts;
pub use use_featured_projects::use_featured_projects;
pub use use_project::use_project;
pub use use_projects::use_projects;
