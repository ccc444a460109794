use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod content;
pub mod fallback;
pub mod fetch;
pub mod filter;
pub mod hooks;
mod logs;
mod pages;
pub mod state;

pub use state::State;

use components::layout::{Footer, Header};
use pages::{
    BlogPage, BlogPostPage, HomePage, NotFoundPage, ProjectDetailPage,
    ProjectsPage,
};

// Global API client - configurable via environment at build time, with a
// localhost default matching the development backend.
pub fn get_api_client() -> APIClient {
    let address = option_env!("API_BASE_URL")
        .unwrap_or("http://localhost:8000")
        .to_string();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/projects/:id")]
    ProjectDetail { id: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::ProjectDetail { id } => html! { <ProjectDetailPage {id} /> },
        Route::Blog => html! { <BlogPage /> },
        Route::BlogPost { id } => html! { <BlogPostPage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
