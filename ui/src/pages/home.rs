use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ProjectCard;
use crate::hooks::use_featured_projects;
use crate::{Route, content};

#[function_component]
pub fn HomePage() -> Html {
    let featured = use_featured_projects();

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <section class="py-12">
                <h1 class="text-4xl font-bold text-neutral-900 dark:text-white mb-2">
                    {content::NAME}
                </h1>
                <p class="text-xl text-neutral-600 dark:text-neutral-400 mb-6">
                    {content::TAGLINE}
                </p>
                <p class="max-w-2xl text-neutral-700 dark:text-neutral-300">
                    {content::BIO}
                </p>
            </section>

            <section class="py-8">
                <h2 class="text-2xl font-semibold text-neutral-900 dark:text-neutral-100 mb-6">
                    {"Skills"}
                </h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {for content::SKILLS.iter().map(|skill| html! {
                        <div>
                            <h3 class="text-sm font-medium text-neutral-500 dark:text-neutral-400 mb-2">
                                {skill.name}
                            </h3>
                            <div class="flex flex-wrap gap-1">
                                {for skill.items.iter().map(|item| html! {
                                    <span class="text-xs px-2 py-0.5 rounded bg-neutral-100 dark:bg-neutral-800 text-neutral-700 dark:text-neutral-300">
                                        {*item}
                                    </span>
                                })}
                            </div>
                        </div>
                    })}
                </div>
            </section>

            <section class="py-8">
                <h2 class="text-2xl font-semibold text-neutral-900 dark:text-neutral-100 mb-6">
                    {"Experience"}
                </h2>
                <ol class="space-y-6 border-l border-neutral-200 dark:border-neutral-700 pl-6">
                    {for content::TIMELINE.iter().map(|entry| html! {
                        <li>
                            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                {entry.period}
                            </p>
                            <h3 class="font-medium text-neutral-900 dark:text-neutral-100">
                                {format!("{} · {}", entry.role, entry.organization)}
                            </h3>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {entry.summary}
                            </p>
                        </li>
                    })}
                </ol>
            </section>

            <section class="py-8">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-semibold text-neutral-900 dark:text-neutral-100">
                        {"Featured projects"}
                    </h2>
                    <Link<Route> to={Route::Projects} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                        {"All projects →"}
                    </Link<Route>>
                </div>
                {if featured.is_loading && featured.projects.is_none() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">{"Loading projects..."}</p>
                        </div>
                    }
                } else if let Some(projects) = &featured.projects {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for projects.data.iter().map(|project| html! {
                                <ProjectCard project={project.clone()} />
                            })}
                        </div>
                    }
                } else {
                    html! {}
                }}
            </section>
        </main>
    }
}
