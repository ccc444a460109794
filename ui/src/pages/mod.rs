pub mod blog;
pub mod blog_post;
pub mod home;
pub mod not_found;
pub mod project_detail;
pub mod projects;

pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
