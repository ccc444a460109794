use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="text-center py-12">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                <p class="text-gray-600 dark:text-gray-300 mb-6">{"Page not found"}</p>
                <Link<Route> to={Route::Home} classes="text-sm underline text-neutral-700 dark:text-neutral-300">
                    {"Back home"}
                </Link<Route>>
            </div>
        </main>
    }
}
