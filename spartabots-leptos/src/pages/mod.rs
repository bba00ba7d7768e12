pub mod history;
pub mod home;
pub mod not_found;

use leptos::prelude::*;
use spartabots_core::config::Config;

/// Start every page at the top instead of wherever the previous page was scrolled to.
pub(crate) fn scroll_to_top_on_mount(config: &Config) {
    if !config.scroll_to_top_on_mount {
        return;
    }

    Effect::new(move |_| window().scroll_to_with_x_and_y(0.0, 0.0));
}
