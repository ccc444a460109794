use payloads::requests::BlogListParams;
use yew::prelude::*;

use crate::components::BlogPostCard;
use crate::filter::{ALL_CATEGORIES, filter_blog_posts};
use crate::hooks::use_blog_posts;

/// Fixed set of category labels rendered as filter chips. Blog filtering is
/// an exact match against these.
const BLOG_CATEGORIES: &[&str] =
    &[ALL_CATEGORIES, "Engineering", "Tutorials", "Career"];

#[function_component]
pub fn BlogPage() -> Html {
    let posts_hook = use_blog_posts(BlogListParams::default());
    let selected = use_state(|| ALL_CATEGORIES.to_string());

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: String| selected.set(category))
    };

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-6">
                {"Blog"}
            </h1>
            <div class="flex flex-wrap gap-2 mb-8">
                {for BLOG_CATEGORIES.iter().map(|category| {
                    let is_active = *selected == *category;
                    let on_select = on_select.clone();
                    let value = category.to_string();
                    html! {
                        <button
                            onclick={Callback::from(move |_| on_select.emit(value.clone()))}
                            class={classes!(
                                "px-3", "py-1", "rounded-full", "text-sm", "transition-colors",
                                if is_active {
                                    "bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
                                } else {
                                    "bg-neutral-100 text-neutral-700 dark:bg-neutral-800 dark:text-neutral-300 hover:bg-neutral-200 dark:hover:bg-neutral-700"
                                }
                            )}
                        >
                            {*category}
                        </button>
                    }
                })}
            </div>
            {if posts_hook.is_loading && posts_hook.posts.is_none() {
                html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">{"Loading posts..."}</p>
                    </div>
                }
            } else if let Some(posts) = &posts_hook.posts {
                let visible = filter_blog_posts(&selected, &posts.data);
                if visible.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No posts yet."}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for visible.iter().map(|post| html! {
                                <BlogPostCard post={post.clone()} />
                            })}
                        </div>
                    }
                }
            } else {
                html! {}
            }}
        </main>
    }
}
