use leptos::prelude::*;
use spartabots_core::content::{Backdrop, SplashContent};

use super::LazyVideo;

/// Full screen banner with the page title in the bottom left corner
#[component]
pub fn Splash(content: SplashContent) -> impl IntoView {
    const BACKDROP_CLASS: &str = "object-cover h-full w-full absolute z-0";

    let backdrop = match content.backdrop {
        Backdrop::Video { url, mime_type } => {
            view! { <LazyVideo src=url mime_type=mime_type class=BACKDROP_CLASS /> }.into_any()
        }
        Backdrop::Image { url, alt } => {
            view! { <img src=url alt=alt class=BACKDROP_CLASS /> }.into_any()
        }
    };

    view! {
        <div class="min-h-screen relative">
            {backdrop}
            <div class="absolute bottom-0 left-0 p-16">
                <h1 class="text-6xl text-left font-productsans font-extrabold text-white px-5">
                    {content.title}
                </h1>
                <h1 class="text-8xl text-left font-avenir font-extrabold text-white px-4">
                    {content.subtitle}
                </h1>
            </div>
        </div>
    }
}
