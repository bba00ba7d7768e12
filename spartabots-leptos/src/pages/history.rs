use leptos::prelude::*;
use spartabots_core::config::Config;
use spartabots_core::content::HISTORY;

use crate::components::{Card, Splash};

/// One card per competition robot
#[component]
pub fn History() -> impl IntoView {
    super::scroll_to_top_on_mount(&Config::default());

    view! {
        <div>
            <Splash content=HISTORY.splash />
            <div class="bg-slate-100 flex flex-col gap-8 items-center p-8">
                {HISTORY.robots
                    .into_iter()
                    .map(|content| view! { <Card content=content /> })
                    .collect_view()}
            </div>
        </div>
    }
}
