use payloads::responses::BlogPost;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub post: BlogPost,
}

#[function_component]
pub fn BlogPostCard(props: &Props) -> Html {
    let post = &props.post;

    html! {
        <Link<Route>
            to={Route::BlogPost { id: post.route_id().to_string() }}
            classes="block rounded-lg border border-neutral-200 dark:border-neutral-700 overflow-hidden hover:shadow-md transition-shadow"
        >
            <img
                src={post.cover_image.clone()}
                alt={post.title.clone()}
                class="w-full h-40 object-cover bg-neutral-100 dark:bg-neutral-800"
            />
            <div class="p-4">
                <div class="flex items-center gap-2 text-xs text-neutral-500 dark:text-neutral-400 mb-2">
                    <span class="px-2 py-0.5 rounded bg-neutral-100 dark:bg-neutral-800">
                        {&post.category}
                    </span>
                    <span>{&post.published_at}</span>
                    <span>{format!("{} min read", post.reading_time)}</span>
                </div>
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-1">
                    {&post.title}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&post.excerpt}
                </p>
            </div>
        </Link<Route>>
    }
}
