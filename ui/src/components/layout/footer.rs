use yew::prelude::*;

use crate::content;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="bg-white dark:bg-neutral-900 border-t border-neutral-200 dark:border-neutral-700 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("© 2026 {}", content::NAME)}
                </p>
            </div>
        </footer>
    }
}
