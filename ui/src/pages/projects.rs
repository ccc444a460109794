use payloads::requests::ProjectListParams;
use yew::prelude::*;

use crate::components::ProjectCard;
use crate::filter::{ALL_CATEGORIES, filter_projects};
use crate::hooks::use_projects;

#[function_component]
pub fn ProjectsPage() -> Html {
    let projects_hook = use_projects(ProjectListParams::default());
    let selected = use_state(|| ALL_CATEGORIES.to_string());

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: String| selected.set(category))
    };

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-6">
                {"Projects"}
            </h1>
            {if projects_hook.is_initial_loading() {
                html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">{"Loading projects..."}</p>
                    </div>
                }
            } else if let Some(projects) = &projects_hook.projects {
                // Filter chips are derived from whatever dataset we got,
                // remote or bundled.
                let mut categories: Vec<String> = projects
                    .data
                    .iter()
                    .map(|p| p.category.clone())
                    .collect();
                categories.sort();
                categories.dedup();

                let visible = filter_projects(&selected, &projects.data);

                html! {
                    <div>
                        <div class="flex flex-wrap gap-2 mb-8">
                            {for std::iter::once(ALL_CATEGORIES.to_string())
                                .chain(categories)
                                .map(|category| {
                                    let is_active = *selected == category;
                                    let on_select = on_select.clone();
                                    let value = category.clone();
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
                                            {category}
                                        </button>
                                    }
                                })}
                        </div>
                        {if visible.is_empty() {
                            html! {
                                <div class="text-center py-12">
                                    <p class="text-neutral-600 dark:text-neutral-400">
                                        {"No projects in this category."}
                                    </p>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {for visible.iter().map(|project| html! {
                                        <ProjectCard project={project.clone()} />
                                    })}
                                </div>
                            }
                        }}
                    </div>
                }
            } else {
                html! {}
            }}
        </main>
    }
}
