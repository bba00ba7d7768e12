use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

pub mod components;
pub mod pages;
pub mod viewport;

// Top-Level pages
use crate::pages::history::History;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Html attr:lang="en" attr:dir="ltr" />

        <Title text="Spartabots | FRC Team 2976" />

        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Meta
            name="description"
            content="The Spartabots are FIRST Robotics Competition Team 2976 from Skyline High School in Sammamish, WA."
        />

        <Router>
            <nav class="fixed top-0 z-10 flex gap-4 p-4 text-white font-bold">
                <A href="/">"Home"</A>
                <A href="/history">"History"</A>
            </nav>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/history") view=History />
                </Routes>
            </main>
        </Router>
    }
}
