use leptos::prelude::*;
use leptos_router::components::A;
use spartabots_core::content::InfoBlockContent;

#[component]
pub fn InfoBlock(content: InfoBlockContent) -> impl IntoView {
    view! {
        <div class="flex flex-col flex-1 gap-4 items-center text-center">
            <h2 class="text-2xl font-extrabold">{content.title}</h2>
            <p class="flex-1">{content.text}</p>
            <A href=content.button_path attr:class="px-6 py-2 rounded bg-black text-white font-bold">
                "Learn More"
            </A>
        </div>
    }
}
