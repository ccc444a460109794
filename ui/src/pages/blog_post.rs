use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_blog_post;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component]
pub fn BlogPostPage(props: &Props) -> Html {
    let post_hook = use_blog_post(props.id.clone());

    if post_hook.is_loading && post_hook.post.is_none() {
        return html! {
            <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading post..."}</p>
                </div>
            </main>
        };
    }

    if post_hook.error.is_some() && post_hook.post.is_none() {
        return html! {
            <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center py-12">
                    <h1 class="text-2xl font-semibold text-neutral-900 dark:text-white mb-2">
                        {"Post not found"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                        {"This post does not exist or is no longer available."}
                    </p>
                    <Link<Route> to={Route::Blog} classes="text-sm underline text-neutral-700 dark:text-neutral-300">
                        {"Back to blog"}
                    </Link<Route>>
                </div>
            </main>
        };
    }

    let Some(post) = &post_hook.post else {
        return html! {};
    };
    let post = &post.data;

    // The post body is pre-rendered HTML from the API.
    let content =
        Html::from_html_unchecked(AttrValue::from(post.content.clone()));

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <Link<Route> to={Route::Blog} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                {"← Blog"}
            </Link<Route>>
            <div class="mt-4 mb-6">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                    {&post.title}
                </h1>
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!("{} · {} · {} min read", post.category, post.published_at, post.reading_time)}
                </p>
            </div>
            <img
                src={post.cover_image.clone()}
                alt={post.title.clone()}
                class="w-full rounded-lg mb-6 bg-neutral-100 dark:bg-neutral-800"
            />
            <article class="prose dark:prose-invert max-w-none">
                {content}
            </article>
            {if !post.tags.is_empty() {
                html! {
                    <div class="flex flex-wrap gap-1 mt-8">
                        {for post.tags.iter().map(|tag| html! {
                            <span class="text-xs px-2 py-0.5 rounded bg-neutral-100 dark:bg-neutral-800 text-neutral-700 dark:text-neutral-300">
                                {format!("#{tag}")}
                            </span>
                        })}
                    </div>
                }
            } else {
                html! {}
            }}
        </main>
    }
}
