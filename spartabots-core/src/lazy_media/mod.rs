//! Deferred media loading.
//!
//! A video (or any other media element) is bound to a url but keeps an inert source until the element is
//! at least `visibility_threshold` on screen. The first such intersection swaps in the real url and the
//! element stops being observed. Nothing ever swaps it back.

mod loader;

pub use loader::{DeferredMediaLoader, Notifications};

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::cell::RefCell;
use core::fmt;

use crate::errors::{SiteError, SiteResult};

/// Platform seam for a viewport-intersection observer.
///
/// One observer is shared by every binding. Implementations only forward calls to the platform; deciding
/// what an entry means is the loader's job.
pub trait ViewportObserver {
    /// Handle to an on-screen element. Compared with `==` to match entries to bindings.
    type Target: Clone + PartialEq;

    fn observe(&mut self, target: &Self::Target);

    fn unobserve(&mut self, target: &Self::Target);

    /// Stop observing every target. The observer may be reused with `observe` afterwards.
    fn disconnect(&mut self);
}

/// One entry from the platform's intersection callback.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
    /// 0.0..=1.0
    pub intersection_ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(u32);

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binding-{}", self.0)
    }
}

/// The media an element should eventually load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRequest {
    url: String,
    mime_type: Option<String>,
}

impl MediaRequest {
    pub fn new(url: impl Into<String>) -> SiteResult<Self> {
        let url = url.into();

        if url.trim().is_empty() {
            return Err(SiteError::EmptyUrl);
        }

        Ok(Self {
            url,
            mime_type: None,
        })
    }

    /// Container/codec hint such as "video/mp4". Passed through unchanged.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }
}

/// What the renderer should use as the element's source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MediaSource {
    /// renders as an empty string. the browser fetches nothing
    #[default]
    Inert,
    Url {
        url: String,
        mime_type: Option<String>,
    },
}

impl MediaSource {
    pub fn src(&self) -> &str {
        match self {
            Self::Inert => "",
            Self::Url { url, .. } => url,
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::Inert => None,
            Self::Url { mime_type, .. } => mime_type.as_deref(),
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Self::Inert)
    }
}

impl From<&MediaRequest> for MediaSource {
    fn from(request: &MediaRequest) -> Self {
        Self::Url {
            url: request.url.to_string(),
            mime_type: request.mime_type.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingState {
    Pending,
    /// terminal
    Triggered,
}

/// Caller's handle to one element's deferred media.
///
/// Cloning shares the same slot. The loader fills the slot at most once.
#[derive(Clone, Debug)]
pub struct MediaBinding {
    id: BindingId,
    slot: Rc<RefCell<MediaSource>>,
}

impl MediaBinding {
    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn state(&self) -> BindingState {
        if self.slot.borrow().is_inert() {
            BindingState::Pending
        } else {
            BindingState::Triggered
        }
    }

    pub fn source(&self) -> MediaSource {
        self.slot.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == BindingState::Triggered
    }
}
