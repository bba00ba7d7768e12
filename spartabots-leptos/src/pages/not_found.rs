use leptos::prelude::*;
use spartabots_core::logging::warn;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
    if let Ok(path) = window().location().pathname() {
        warn!("no page at {}", path);
    }

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-100">
            <h1 class="text-4xl font-extrabold text-center">"Uh oh!" <br /> "We couldn't find that page!"</h1>
        </div>
    }
}
