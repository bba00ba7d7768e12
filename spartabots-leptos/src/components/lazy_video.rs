use leptos::html::Video;
use leptos::prelude::*;
use spartabots_core::lazy_media::{MediaRequest, MediaSource};
use spartabots_core::logging::warn;
use web_sys::Element;

use crate::viewport;

/// A background video that does not download anything until it is on screen.
///
/// `src` stays unset until at least 10% of the element is visible. Then the url is set once and the
/// element is no longer observed.
#[component]
pub fn LazyVideo(
    #[prop(into)] src: String,
    /// container/codec hint such as "video/mp4"
    #[prop(optional, into)]
    mime_type: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let video_ref = NodeRef::<Video>::new();

    let (source, set_source) = signal(MediaSource::Inert);

    // tracks video_ref, so this runs again once the element is mounted
    Effect::new(move |_| {
        let request = match MediaRequest::new(src.clone()) {
            Ok(request) => request,
            Err(err) => {
                warn!("not loading video: {}", err);
                return;
            }
        };

        let request = match &mime_type {
            Some(mime_type) => request.with_mime_type(mime_type.clone()),
            None => request,
        };

        let video = video_ref.get().map(Element::from);

        // <video> has no typed `type` attribute in the view macro
        if let (Some(video), Some(mime_type)) = (&video, request.mime_type()) {
            if let Err(err) = video.set_attribute("type", mime_type) {
                warn!("could not set video type {}: {:?}", mime_type, err);
            }
        }

        match viewport::defer_until_visible(video, request, move |source| {
            set_source.set(source.clone())
        }) {
            Ok(id) => on_cleanup(move || viewport::release(id)),
            Err(err) => warn!("video will not load: {}", err),
        }
    });

    view! {
        <video
            node_ref=video_ref
            src=move || source.with(|source| (!source.is_inert()).then(|| source.src().to_string()))
            class=class
            prop:autoplay=true
            prop:loop=true
            prop:muted=true
            prop:playsInline=true
        />
    }
}
