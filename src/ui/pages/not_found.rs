//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Save Forge" />

        <div class="min-h-screen bg-dark-100 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-dark-200 rounded-full flex items-center justify-center">
                    <Icon name=icons::GAMEPAD class="w-12 h-12 text-dark-500" />
                </div>

                <h1 class="text-6xl font-bold text-dark-600 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-dark-600 mb-2">"Page Not Found"</h2>

                <p class="text-dark-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-primary-500 hover:bg-primary-400 text-white font-medium rounded-lg transition-colors"
                >
                    "Back to Save Forge"
                </A>
            </div>
        </div>
    }
}
