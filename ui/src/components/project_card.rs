use payloads::responses::{Project, ProjectStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub project: Project,
}

fn status_classes(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => {
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400"
        }
        ProjectStatus::InProgress => {
            "bg-amber-100 text-amber-800 dark:bg-amber-900/30 dark:text-amber-400"
        }
        ProjectStatus::Planned => {
            "bg-neutral-100 text-neutral-800 dark:bg-neutral-700 dark:text-neutral-300"
        }
    }
}

#[function_component]
pub fn ProjectCard(props: &Props) -> Html {
    let project = &props.project;

    html! {
        <Link<Route>
            to={Route::ProjectDetail { id: project.id.clone() }}
            classes="block rounded-lg border border-neutral-200 dark:border-neutral-700 overflow-hidden hover:shadow-md transition-shadow"
        >
            <img
                src={project.image.clone()}
                alt={project.title.clone()}
                class="w-full h-40 object-cover bg-neutral-100 dark:bg-neutral-800"
            />
            <div class="p-4">
                <div class="flex justify-between items-start mb-2">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {&project.title}
                    </h3>
                    <span class={classes!(
                        "text-xs", "px-2", "py-1", "rounded-full", "whitespace-nowrap",
                        status_classes(project.status)
                    )}>
                        {project.status.to_string()}
                    </span>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-3">
                    {&project.description}
                </p>
                <div class="flex flex-wrap gap-1">
                    {for project.tech_stack.iter().map(|tech| html! {
                        <span class="text-xs px-2 py-0.5 rounded bg-neutral-100 dark:bg-neutral-800 text-neutral-700 dark:text-neutral-300">
                            {tech}
                        </span>
                    })}
                </div>
            </div>
        </Link<Route>>
    }
}
