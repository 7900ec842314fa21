use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use super::change::{Change, ChangeKind};

type Handler<T> = Rc<RefCell<dyn FnMut(&Change<'_, T>)>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscription<T> {
    id: SubscriptionId,
    /// `None` subscribes to the whole `change` namespace.
    filter: Option<ChangeKind>,
    handler: Handler<T>,
}

/// Per-collection event hub.
///
/// Subscribing takes `&self`, so a handler can register further handlers on
/// `change.source.events()` while it is being called. Those first run on the
/// next publication.
pub struct ChangePublisher<T> {
    subscriptions: RefCell<Vec<Subscription<T>>>,
    next_id: Cell<u64>,
}

impl<T> ChangePublisher<T> {
    pub fn new() -> Self {
        Self {
            subscriptions: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn subscribe<F>(&self, kind: ChangeKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&Change<'_, T>) + 'static,
    {
        self.register(Some(kind), Rc::new(RefCell::new(handler)))
    }

    /// Subscribe to every `change.*` event.
    pub fn subscribe_all<F>(&self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Change<'_, T>) + 'static,
    {
        self.register(None, Rc::new(RefCell::new(handler)))
    }

    /// Returns `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscriptions.borrow_mut();
        let before = subs.len();
        subs.retain(|s| s.id != id);
        subs.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn emit(&self, change: &Change<'_, T>) {
        // Snapshot first: handlers may subscribe or unsubscribe while running.
        let targets: Vec<Handler<T>> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.filter.map_or(true, |kind| kind == change.kind))
            .map(|s| Rc::clone(&s.handler))
            .collect();

        trace!(
            event = change.kind.as_str(),
            items = change.items.len(),
            subscribers = targets.len(),
            "publishing change"
        );

        for handler in targets {
            (&mut *handler.borrow_mut())(change);
        }
    }

    fn register(&self, filter: Option<ChangeKind>, handler: Handler<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscriptions.borrow_mut().push(Subscription { id, filter, handler });
        id
    }
}

impl<T> Default for ChangePublisher<T> {
    fn default() -> Self {
        Self::new()
    }
}
