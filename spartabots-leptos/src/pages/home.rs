use leptos::prelude::*;
use spartabots_core::config::Config;
use spartabots_core::content::HOME;

use crate::components::{Card, InfoBlock, Splash};

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    super::scroll_to_top_on_mount(&Config::default());

    let [sponsors, community, get_involved] = HOME.info_blocks;

    view! {
        <div class="overflow-hidden">
            <Splash content=HOME.splash />
            <div class="bg-slate-100 flex flex-col gap-8 items-center p-8">
                {HOME.cards
                    .into_iter()
                    .map(|content| view! { <Card content=content /> })
                    .collect_view()}

                // side by side on wide screens
                <div class="hidden sm:flex flex-row flex-initial px-6 py-8 max-w-[1000px] bg-white rounded gap-4">
                    <InfoBlock content=sponsors />
                    <div class="border-l-[1px] border-gray-300 min-h-[350px] mx-4"></div>
                    <InfoBlock content=community />
                    <div class="border-l-[1px] border-gray-300 min-h-[350px] mx-4"></div>
                    <InfoBlock content=get_involved />
                </div>

                // stacked on phones
                <div class="sm:hidden flex flex-col flex-initial px-8 py-8 w-full items-center bg-white rounded gap-4">
                    <InfoBlock content=sponsors />
                    <hr class="w-full flex-1" />
                    <InfoBlock content=community />
                    <hr class="w-full flex-1" />
                    <InfoBlock content=get_involved />
                </div>
            </div>
        </div>
    }
}
