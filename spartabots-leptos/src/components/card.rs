use leptos::prelude::*;
use spartabots_core::content::CardContent;
use spartabots_core::rich_text::{self, Segment};

/// Picture on one side, copy on the other. Stacks on narrow screens.
#[component]
pub fn Card(content: CardContent) -> impl IntoView {
    let segments = if content.allow_links {
        rich_text::parse(content.text)
    } else {
        vec![Segment::Text(content.text)]
    };

    let body = segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.into_any(),
            Segment::Link { href, label } => view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="text-blue-600 underline">
                    {label}
                </a>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="flex flex-col sm:flex-row max-w-[1000px] w-full bg-white rounded overflow-hidden">
            <img src=content.image alt=content.alt class="object-cover w-full sm:w-1/2 max-h-[400px]" />
            <div class="flex flex-col gap-4 p-8 sm:w-1/2">
                <h2 class="text-3xl font-extrabold">{content.title}</h2>
                <p class="text-lg">{body}</p>
                {content.footer.map(|footer| view! { <p class="mt-auto text-right font-semibold text-gray-500">{footer}</p> })}
            </div>
        </div>
    }
}
