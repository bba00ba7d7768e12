//! Browser side of the deferred media loader.
//!
//! Every [`LazyVideo`](crate::components::LazyVideo) on a page shares one `IntersectionObserver`.

use std::cell::RefCell;

use js_sys::Array;
use spartabots_core::config::Config;
use spartabots_core::errors::{SiteError, SiteResult};
use spartabots_core::lazy_media::{
    BindingId, DeferredMediaLoader, IntersectionEntry, MediaRequest, MediaSource, ViewportObserver,
};
use spartabots_core::logging::trace;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

thread_local! {
    static LOADER: RefCell<DeferredMediaLoader<WebObserver>> =
        RefCell::new(DeferredMediaLoader::new(Config::default(), WebObserver::connect));
}

pub struct WebObserver {
    observer: IntersectionObserver,
    /// must outlive `observer`
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl WebObserver {
    fn connect(config: &Config) -> SiteResult<Self> {
        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _: IntersectionObserver| dispatch_entries(entries),
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.visibility_threshold));
        options.set_root_margin(&config.root_margin);

        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|err| SiteError::ObserverUnavailable(format!("{:?}", err)))?;

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }
}

impl ViewportObserver for WebObserver {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

fn dispatch_entries(entries: Array) {
    trace!("{} intersection entries", entries.length());

    let entries: Vec<_> = entries
        .iter()
        .map(|entry| {
            let entry: IntersectionObserverEntry = entry.unchecked_into();

            IntersectionEntry {
                target: entry.target(),
                is_intersecting: entry.is_intersecting(),
                intersection_ratio: entry.intersection_ratio(),
            }
        })
        .collect();

    // listeners run after the borrow ends. they may attach or release other videos
    let notifications = LOADER.with_borrow_mut(|loader| loader.handle_entries(entries));

    notifications.dispatch();
}

/// Keep `element` unloaded until it scrolls into view, then call `on_visible` with the real source.
pub fn defer_until_visible(
    element: Option<Element>,
    request: MediaRequest,
    on_visible: impl FnOnce(&MediaSource) + 'static,
) -> SiteResult<BindingId> {
    let element = element.ok_or(SiteError::MissingElement)?;

    LOADER
        .with_borrow_mut(|loader| loader.attach_with(element, request, on_visible))
        .map(|binding| binding.id())
}

/// Stop waiting on a video. Safe to call more than once and after it already loaded.
pub fn release(id: BindingId) {
    LOADER.with_borrow_mut(|loader| loader.detach(id));
}

/// Videos still waiting to scroll into view.
pub fn pending() -> usize {
    LOADER.with_borrow(|loader| loader.pending())
}

pub fn is_connected() -> bool {
    LOADER.with_borrow(|loader| loader.is_connected())
}
