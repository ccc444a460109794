use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, content};

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900 dark:text-white">
                        {content::NAME}
                    </Link<Route>>
                    <nav class="flex items-center space-x-6">
                        <Link<Route> to={Route::Projects} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                            {"Projects"}
                        </Link<Route>>
                        <Link<Route> to={Route::Blog} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                            {"Blog"}
                        </Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
