use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use super::{
    BindingId, IntersectionEntry, MediaBinding, MediaRequest, MediaSource, ViewportObserver,
};
use crate::config::Config;
use crate::errors::SiteResult;
use crate::logging::{debug, trace};

type Listener = Box<dyn FnOnce(&MediaSource)>;

type Connect<O> = Box<dyn FnMut(&Config) -> SiteResult<O>>;

/// browsers can report the threshold crossing a rounding error below the threshold
const RATIO_EPSILON: f64 = 1e-6;

struct PendingBinding<T> {
    target: T,
    request: MediaRequest,
    slot: Rc<RefCell<MediaSource>>,
    on_visible: Option<Listener>,
}

/// Listeners for bindings that just became visible.
///
/// Returned instead of called so the caller can let go of the loader first. A listener is free to attach
/// or detach other bindings.
#[must_use = "listeners only run when dispatched"]
#[derive(Default)]
pub struct Notifications(Vec<(Listener, MediaSource)>);

impl Notifications {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dispatch(self) {
        for (listener, source) in self.0 {
            listener(&source);
        }
    }
}

/// Shares one [`ViewportObserver`] between every deferred media element.
///
/// The observer is connected on the first attach and disconnected once nothing is pending. The same
/// observer is reused when something is attached again.
pub struct DeferredMediaLoader<O: ViewportObserver> {
    config: Config,
    connect: Connect<O>,
    observer: Option<O>,
    connected: bool,
    pending: BTreeMap<BindingId, PendingBinding<O::Target>>,
    next_id: u32,
}

impl<O: ViewportObserver> DeferredMediaLoader<O> {
    pub fn new(config: Config, connect: impl FnMut(&Config) -> SiteResult<O> + 'static) -> Self {
        Self {
            config,
            connect: Box::new(connect),
            observer: None,
            connected: false,
            pending: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of bindings still waiting to become visible.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn attach(&mut self, target: O::Target, request: MediaRequest) -> SiteResult<MediaBinding> {
        self.register(target, request, None)
    }

    /// Like [`Self::attach`], and `on_visible` gets the new source once the element is visible.
    pub fn attach_with(
        &mut self,
        target: O::Target,
        request: MediaRequest,
        on_visible: impl FnOnce(&MediaSource) + 'static,
    ) -> SiteResult<MediaBinding> {
        self.register(target, request, Some(Box::new(on_visible)))
    }

    fn register(
        &mut self,
        target: O::Target,
        request: MediaRequest,
        on_visible: Option<Listener>,
    ) -> SiteResult<MediaBinding> {
        let observer = self.connected_observer()?;

        observer.observe(&target);

        let id = BindingId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let slot = Rc::new(RefCell::new(MediaSource::Inert));

        debug!("{} waiting to load {}", id, request.url());

        self.pending.insert(
            id,
            PendingBinding {
                target,
                request,
                slot: slot.clone(),
                on_visible,
            },
        );

        Ok(MediaBinding { id, slot })
    }

    fn connected_observer(&mut self) -> SiteResult<&mut O> {
        let observer = match self.observer.take() {
            Some(observer) => observer,
            None => {
                self.config.validate()?;

                debug!(
                    "connecting viewport observer. threshold={} root_margin={}",
                    self.config.visibility_threshold, self.config.root_margin
                );

                (self.connect)(&self.config)?
            }
        };

        self.connected = true;

        Ok(self.observer.insert(observer))
    }

    /// Stop waiting on a binding. Does nothing if it already triggered or was already detached.
    pub fn detach(&mut self, id: BindingId) {
        match self.pending.remove(&id) {
            Some(binding) => {
                debug!("{} detached before it was visible", id);
                self.release(&binding.target);
            }
            None => trace!("{} is not pending", id),
        }
    }

    /// Feed one batch from the platform's intersection callback.
    pub fn handle_entries(
        &mut self,
        entries: impl IntoIterator<Item = IntersectionEntry<O::Target>>,
    ) -> Notifications {
        let mut notifications = Notifications::default();

        for entry in entries {
            if !entry.is_intersecting
                || entry.intersection_ratio + RATIO_EPSILON < self.config.visibility_threshold
            {
                continue;
            }

            let visible: Vec<BindingId> = self
                .pending
                .iter()
                .filter(|(_, binding)| binding.target == entry.target)
                .map(|(id, _)| *id)
                .collect();

            for id in visible {
                let Some(binding) = self.pending.remove(&id) else {
                    continue;
                };

                let source = MediaSource::from(&binding.request);

                debug!(
                    "{} visible at {:.2}. loading {}",
                    id,
                    entry.intersection_ratio,
                    source.src()
                );

                *binding.slot.borrow_mut() = source.clone();

                if let Some(listener) = binding.on_visible {
                    notifications.0.push((listener, source));
                }

                self.release(&binding.target);
            }
        }

        notifications
    }

    /// Unobserve a target that just left `pending`. The observer itself disconnects with the last one.
    fn release(&mut self, target: &O::Target) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };

        if self.pending.values().any(|binding| binding.target == *target) {
            return;
        }

        observer.unobserve(target);

        if self.pending.is_empty() && self.connected {
            debug!("nothing left to load. disconnecting viewport observer");
            observer.disconnect();
            self.connected = false;
        }
    }
}

impl<O: ViewportObserver> Drop for DeferredMediaLoader<O> {
    fn drop(&mut self) {
        if let (Some(observer), true) = (self.observer.as_mut(), self.connected) {
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::*;
    use crate::errors::SiteError;
    use crate::lazy_media::BindingState;

    const BROLL: &str = "https://res.cloudinary.com/spartasite/video/upload/v1715152061/BRoll.mp4";

    #[derive(Debug, PartialEq)]
    enum Call {
        Connect,
        Observe(&'static str),
        Unobserve(&'static str),
        Disconnect,
    }

    type Calls = Rc<RefCell<Vec<Call>>>;

    /// Records what the loader asks of the platform.
    struct RecordingObserver {
        calls: Calls,
    }

    impl ViewportObserver for RecordingObserver {
        type Target = &'static str;

        fn observe(&mut self, target: &Self::Target) {
            self.calls.borrow_mut().push(Call::Observe(target));
        }

        fn unobserve(&mut self, target: &Self::Target) {
            self.calls.borrow_mut().push(Call::Unobserve(target));
        }

        fn disconnect(&mut self) {
            self.calls.borrow_mut().push(Call::Disconnect);
        }
    }

    fn loader() -> (DeferredMediaLoader<RecordingObserver>, Calls) {
        let calls = Calls::default();

        let connect_calls = calls.clone();
        let loader = DeferredMediaLoader::new(Config::default(), move |_: &Config| {
            connect_calls.borrow_mut().push(Call::Connect);
            Ok(RecordingObserver {
                calls: connect_calls.clone(),
            })
        });

        (loader, calls)
    }

    fn request() -> MediaRequest {
        MediaRequest::new(BROLL).unwrap().with_mime_type("video/mp4")
    }

    fn seen(target: &'static str, ratio: f64) -> IntersectionEntry<&'static str> {
        IntersectionEntry {
            target,
            is_intersecting: ratio > 0.0,
            intersection_ratio: ratio,
        }
    }

    #[test_log::test]
    fn source_is_inert_until_visible() {
        let (mut loader, _) = loader();

        let binding = loader.attach("splash", request()).unwrap();

        assert_eq!(binding.state(), BindingState::Pending);
        assert_eq!(binding.source().src(), "");
        assert!(!binding.is_loaded());

        loader.handle_entries([seen("splash", 0.5)]).dispatch();

        assert_eq!(binding.state(), BindingState::Triggered);
        assert_eq!(binding.source().src(), BROLL);
        assert_eq!(binding.source().mime_type(), Some("video/mp4"));
        assert!(binding.is_loaded());
    }

    #[test_log::test]
    fn triggers_once_then_stops_observing() {
        let (mut loader, calls) = loader();

        let hits = Rc::new(RefCell::new(Vec::<String>::new()));

        let listener_hits = hits.clone();
        let binding = loader
            .attach_with("splash", request(), move |source| {
                listener_hits.borrow_mut().push(source.src().to_string())
            })
            .unwrap();

        let notifications = loader.handle_entries([seen("splash", 0.15)]);
        assert_eq!(notifications.len(), 1);
        notifications.dispatch();

        // scrolling away and back again
        let notifications = loader.handle_entries([seen("splash", 0.0), seen("splash", 1.0)]);
        assert!(notifications.is_empty());

        assert_eq!(*hits.borrow(), vec![BROLL.to_string()]);
        assert_eq!(binding.source().src(), BROLL);
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Connect,
                Call::Observe("splash"),
                Call::Unobserve("splash"),
                Call::Disconnect,
            ]
        );
        assert_eq!(loader.pending(), 0);
        assert!(!loader.is_connected());
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let (mut loader, _) = loader();

        let binding = loader.attach("splash", request()).unwrap();

        let notifications = loader.handle_entries([
            seen("splash", 0.05),
            IntersectionEntry {
                target: "splash",
                is_intersecting: false,
                intersection_ratio: 0.5,
            },
        ]);

        assert!(notifications.is_empty());
        assert_eq!(binding.state(), BindingState::Pending);

        // exactly on the threshold counts
        loader.handle_entries([seen("splash", 0.1)]).dispatch();

        assert_eq!(binding.state(), BindingState::Triggered);
    }

    #[test]
    fn rounded_threshold_crossing_triggers() {
        let (mut loader, _) = loader();

        let binding = loader.attach("splash", request()).unwrap();

        loader.handle_entries([seen("splash", 0.0999999)]).dispatch();

        assert_eq!(binding.state(), BindingState::Triggered);
        assert_eq!(loader.pending(), 0);
    }

    #[test_log::test]
    fn detach_before_visible_stays_inert() {
        let (mut loader, calls) = loader();

        let binding = loader.attach("splash", request()).unwrap();

        loader.detach(binding.id());

        // an entry that was already queued by the platform
        let notifications = loader.handle_entries([seen("splash", 1.0)]);

        assert!(notifications.is_empty());
        assert!(binding.source().is_inert());
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Connect,
                Call::Observe("splash"),
                Call::Unobserve("splash"),
                Call::Disconnect,
            ]
        );
    }

    #[test]
    fn detach_is_idempotent() {
        let (mut loader, calls) = loader();

        let binding = loader.attach("splash", request()).unwrap();

        loader.handle_entries([seen("splash", 1.0)]).dispatch();

        let before = calls.borrow().len();

        loader.detach(binding.id());
        loader.detach(binding.id());

        assert_eq!(calls.borrow().len(), before);
        assert_eq!(binding.source().src(), BROLL);
    }

    #[test]
    fn bindings_are_independent() {
        let (mut loader, calls) = loader();

        let splash = loader.attach("splash", request()).unwrap();
        let footer = loader
            .attach("footer", MediaRequest::new("https://example.com/footer.mp4").unwrap())
            .unwrap();

        loader.handle_entries([seen("splash", 0.3)]).dispatch();

        assert_eq!(splash.state(), BindingState::Triggered);
        assert_eq!(footer.state(), BindingState::Pending);
        assert_eq!(loader.pending(), 1);
        assert!(loader.is_connected());

        loader.detach(splash.id());
        assert_eq!(footer.state(), BindingState::Pending);

        loader.handle_entries([seen("footer", 1.0)]).dispatch();

        assert_eq!(footer.source().src(), "https://example.com/footer.mp4");
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Connect,
                Call::Observe("splash"),
                Call::Observe("footer"),
                Call::Unobserve("splash"),
                Call::Unobserve("footer"),
                Call::Disconnect,
            ]
        );
    }

    #[test]
    fn never_visible_never_loads() {
        let (mut loader, calls) = loader();

        let binding = loader.attach("splash", request()).unwrap();

        loader.handle_entries([seen("somewhere-else", 1.0)]).dispatch();

        assert!(binding.source().is_inert());
        assert_eq!(loader.pending(), 1);

        drop(loader);

        assert!(binding.source().is_inert());
        assert_eq!(calls.borrow().last(), Some(&Call::Disconnect));
    }

    #[test]
    fn shared_target_is_unobserved_with_its_last_binding() {
        let (mut loader, calls) = loader();

        let first = loader.attach("splash", request()).unwrap();
        let second = loader.attach("splash", request()).unwrap();

        loader.detach(first.id());

        assert!(!calls.borrow().contains(&Call::Unobserve("splash")));

        loader.handle_entries([seen("splash", 1.0)]).dispatch();

        assert!(first.source().is_inert());
        assert_eq!(second.source().src(), BROLL);
        assert!(calls.borrow().contains(&Call::Unobserve("splash")));
    }

    #[test]
    fn observer_is_reused_after_disconnect() {
        let (mut loader, calls) = loader();

        let first = loader.attach("splash", request()).unwrap();
        loader.detach(first.id());
        assert!(!loader.is_connected());

        let _second = loader.attach("splash", request()).unwrap();
        assert!(loader.is_connected());

        let connects = calls
            .borrow()
            .iter()
            .filter(|call| **call == Call::Connect)
            .count();

        assert_eq!(connects, 1);
    }

    #[test]
    fn listeners_can_detach_other_bindings() {
        let (loader, _) = loader();
        let loader = Rc::new(RefCell::new(loader));

        let footer = loader
            .borrow_mut()
            .attach("footer", request())
            .unwrap();

        let footer_id = footer.id();
        let inner = loader.clone();
        loader
            .borrow_mut()
            .attach_with("splash", request(), move |_| inner.borrow_mut().detach(footer_id))
            .unwrap();

        let notifications = loader.borrow_mut().handle_entries([seen("splash", 1.0)]);
        notifications.dispatch();

        assert_eq!(loader.borrow().pending(), 0);
        assert!(footer.source().is_inert());
    }

    #[test]
    fn invalid_config_fails_before_connecting() {
        let config = Config {
            visibility_threshold: 2.0,
            ..Default::default()
        };

        let mut loader = DeferredMediaLoader::new(config, |_: &Config| {
            Ok(RecordingObserver {
                calls: Calls::default(),
            })
        });

        assert_eq!(
            loader.attach("splash", request()).unwrap_err(),
            SiteError::InvalidThreshold(2.0)
        );
        assert_eq!(loader.pending(), 0);
    }

    #[test]
    fn connect_failures_are_returned() {
        let mut loader = DeferredMediaLoader::<RecordingObserver>::new(Config::default(), |_| {
            Err(SiteError::ObserverUnavailable("not in a browser".to_string()))
        });

        assert!(matches!(
            loader.attach("splash", request()),
            Err(SiteError::ObserverUnavailable(_))
        ));
        assert!(!loader.is_connected());
    }
}
