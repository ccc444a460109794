use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_project;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component]
pub fn ProjectDetailPage(props: &Props) -> Html {
    let project_hook = use_project(props.id.clone());

    if project_hook.is_loading && project_hook.project.is_none() {
        return html! {
            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading project..."}</p>
                </div>
            </main>
        };
    }

    // Remote fetch failed and the bundled dataset had no match either.
    if project_hook.error.is_some() && project_hook.project.is_none() {
        return html! {
            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center py-12">
                    <h1 class="text-2xl font-semibold text-neutral-900 dark:text-white mb-2">
                        {"Project not found"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                        {"This project does not exist or is no longer available."}
                    </p>
                    <Link<Route> to={Route::Projects} classes="text-sm underline text-neutral-700 dark:text-neutral-300">
                        {"Back to projects"}
                    </Link<Route>>
                </div>
            </main>
        };
    }

    let Some(project) = &project_hook.project else {
        return html! {};
    };
    let project = &project.data;

    html! {
        <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <Link<Route> to={Route::Projects} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                {"← Projects"}
            </Link<Route>>
            <div class="mt-4 mb-6">
                <div class="flex items-center gap-3 mb-2">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">
                        {&project.title}
                    </h1>
                    <span class="text-xs px-2 py-1 rounded-full bg-neutral-100 dark:bg-neutral-800 text-neutral-700 dark:text-neutral-300">
                        {project.status.to_string()}
                    </span>
                </div>
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!("{} · {} views · {}", project.category, project.views, project.created_at)}
                </p>
            </div>

            <img
                src={project.image.clone()}
                alt={project.title.clone()}
                class="w-full rounded-lg mb-6 bg-neutral-100 dark:bg-neutral-800"
            />

            <p class="text-neutral-700 dark:text-neutral-300 mb-6">
                {&project.long_description}
            </p>

            <div class="flex flex-wrap gap-1 mb-6">
                {for project.tech_stack.iter().map(|tech| html! {
                    <span class="text-xs px-2 py-0.5 rounded bg-neutral-100 dark:bg-neutral-800 text-neutral-700 dark:text-neutral-300">
                        {tech}
                    </span>
                })}
            </div>

            <div class="flex gap-4 mb-8">
                {if let Some(demo_url) = &project.demo_url {
                    html! {
                        <a href={demo_url.clone()} target="_blank" class="text-sm underline text-neutral-700 dark:text-neutral-300">
                            {"Live demo"}
                        </a>
                    }
                } else {
                    html! {}
                }}
                {if let Some(source_url) = &project.source_url {
                    html! {
                        <a href={source_url.clone()} target="_blank" class="text-sm underline text-neutral-700 dark:text-neutral-300">
                            {"Source code"}
                        </a>
                    }
                } else {
                    html! {}
                }}
                {if let Some(video_url) = &project.demo_video_url {
                    html! {
                        <a href={video_url.clone()} target="_blank" class="text-sm underline text-neutral-700 dark:text-neutral-300">
                            {"Demo video"}
                        </a>
                    }
                } else {
                    html! {}
                }}
            </div>

            {if !project.gallery.is_empty() {
                html! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        {for project.gallery.iter().map(|entry| html! {
                            <figure>
                                <img
                                    src={entry.image.clone()}
                                    alt={entry.caption.clone()}
                                    class="w-full rounded-lg bg-neutral-100 dark:bg-neutral-800"
                                />
                                <figcaption class="text-xs text-neutral-500 dark:text-neutral-400 mt-1">
                                    {&entry.caption}
                                </figcaption>
                            </figure>
                        })}
                    </div>
                }
            } else {
                html! {}
            }}
        </main>
    }
}
