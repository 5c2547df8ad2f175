//! The single source of truth for the active theme.
//!
//! A [`ThemeStore`] is a cheap, clonable handle; every clone points at the
//! same value. It is meant to live on the UI thread only and is deliberately
//! `!Send`.
//!
//! Two registration styles exist:
//!
//! - [`ThemeStore::on_change`] keeps exactly one callback. Registering again
//!   replaces the previous one. The bootstrap uses this slot for persistence.
//! - [`ThemeStore::subscribe`] appends to an ordered list and returns a
//!   [`Subscription`] guard. Page shells use this so that every mounted shell
//!   sees every change.
//!
//! Every [`ThemeStore::set`] fires the slot first, then the subscribers in
//! registration order, each exactly once, even when the value is unchanged.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::{error::ThemeError, theme::Theme};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct StoreState {
    theme: Option<Theme>,
    slot: Option<Listener>,
    subscribers: Vec<(u64, Listener)>,
    next_subscriber_id: u64,
}

/// Shared handle to the active theme.
#[derive(Clone, Default)]
pub struct ThemeStore {
    state: Rc<RefCell<StoreState>>,
}

impl ThemeStore {
    /// Creates an initialized store.
    pub fn new(initial: Theme) -> Self {
        let store = Self::default();
        store.state.borrow_mut().theme = Some(initial);
        store
    }

    /// Creates a store that has not been given a value yet.
    ///
    /// Reads fail with [`ThemeError::Uninitialized`] until
    /// [`ThemeStore::initialize`] or [`ThemeStore::set`] runs.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Gives a pending store its first value without notifying anyone.
    pub fn initialize(&self, theme: Theme) -> Result<(), ThemeError> {
        let mut state = self.state.borrow_mut();
        if let Some(current) = state.theme {
            return Err(ThemeError::AlreadyInitialized(current));
        }
        state.theme = Some(theme);
        tracing::debug!(%theme, "theme store initialized");
        Ok(())
    }

    /// Whether a value has been set.
    pub fn is_initialized(&self) -> bool {
        self.state.borrow().theme.is_some()
    }

    /// Current theme.
    pub fn get(&self) -> Result<Theme, ThemeError> {
        self.state.borrow().theme.ok_or(ThemeError::Uninitialized)
    }

    /// Overwrites the theme and notifies every registered callback once.
    pub fn set(&self, next: Theme) {
        let previous = self.state.borrow_mut().theme.replace(next);
        tracing::debug!(?previous, %next, "theme set");
        self.notify();
    }

    /// Registers the single-slot change callback, replacing any previous one.
    pub fn on_change(&self, callback: impl Fn() + 'static) {
        let replaced = self.state.borrow_mut().slot.replace(Rc::new(callback));
        if replaced.is_some() {
            tracing::debug!("replaced single-slot theme change callback");
        }
    }

    /// Appends a change callback; it stays registered while the returned
    /// guard is alive.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_subscriber_id;
        state.next_subscriber_id += 1;
        state.subscribers.push((id, Rc::new(callback)));
        Subscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Number of live [`Subscription`]s, not counting the single slot.
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    fn notify(&self) {
        // Snapshot first so callbacks can re-enter the store.
        let listeners: Vec<Listener> = {
            let state = self.state.borrow();
            state
                .slot
                .iter()
                .cloned()
                .chain(state.subscribers.iter().map(|(_, listener)| listener.clone()))
                .collect()
        };
        for listener in listeners {
            listener();
        }
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ThemeStore")
            .field("theme", &state.theme)
            .field("has_slot", &state.slot.is_some())
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

/// Keeps a [`ThemeStore::subscribe`] callback registered until dropped.
pub struct Subscription {
    state: Weak<RefCell<StoreState>>,
    id: u64,
}

impl Subscription {
    /// Unregisters now instead of at drop time.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let removed = match state.try_borrow_mut() {
            Ok(mut state) => state
                .subscribers
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| state.subscribers.remove(index)),
            Err(_) => {
                tracing::warn!(id = self.id, "theme store busy, subscription left registered");
                None
            },
        };
        // Dropped outside the borrow: the callback may own other guards.
        drop(removed);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let hits = count.clone();
        (count, move || hits.set(hits.get() + 1))
    }

    #[test]
    fn pending_store_reports_uninitialized() {
        let store = ThemeStore::pending();
        assert!(!store.is_initialized());
        assert_eq!(store.get(), Err(ThemeError::Uninitialized));
    }

    #[test]
    fn initialize_only_once() {
        let store = ThemeStore::pending();
        store.initialize(Theme::Dark).expect("first initialize");
        assert_eq!(store.get(), Ok(Theme::Dark));
        assert_eq!(
            store.initialize(Theme::Light),
            Err(ThemeError::AlreadyInitialized(Theme::Dark))
        );
    }

    #[test]
    fn initialize_does_not_notify() {
        let store = ThemeStore::pending();
        let (count, callback) = counter();
        store.on_change(callback);
        store.initialize(Theme::Light).expect("initialize");
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn set_on_pending_store_initializes_it() {
        let store = ThemeStore::pending();
        store.set(Theme::Dark);
        assert_eq!(store.get(), Ok(Theme::Dark));
    }

    #[test]
    fn last_write_wins() {
        let store = ThemeStore::new(Theme::Light);
        for next in [Theme::Dark, Theme::Dark, Theme::Light, Theme::Dark] {
            store.set(next);
            assert_eq!(store.get(), Ok(next));
        }
    }

    #[test]
    fn set_fires_even_when_unchanged() {
        let store = ThemeStore::new(Theme::Light);
        let (count, callback) = counter();
        store.on_change(callback);
        store.set(Theme::Light);
        store.set(Theme::Light);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn second_on_change_replaces_first() {
        let store = ThemeStore::new(Theme::Light);
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        store.on_change(first_cb);
        store.on_change(second_cb);
        store.set(Theme::Dark);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn every_subscriber_fires_once_in_order() {
        let store = ThemeStore::new(Theme::Light);
        let order = Rc::new(RefCell::new(Vec::new()));
        let slot_order = order.clone();
        store.on_change(move || slot_order.borrow_mut().push("slot"));
        let a_order = order.clone();
        let _a = store.subscribe(move || a_order.borrow_mut().push("a"));
        let b_order = order.clone();
        let _b = store.subscribe(move || b_order.borrow_mut().push("b"));

        store.set(Theme::Dark);
        assert_eq!(*order.borrow(), vec!["slot", "a", "b"]);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let store = ThemeStore::new(Theme::Light);
        let (count, callback) = counter();
        let subscription = store.subscribe(callback);
        assert_eq!(store.subscriber_count(), 1);
        store.set(Theme::Dark);
        subscription.cancel();
        assert_eq!(store.subscriber_count(), 0);
        store.set(Theme::Light);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn callbacks_can_read_the_new_value() {
        let store = ThemeStore::new(Theme::Light);
        let seen = Rc::new(Cell::new(None));
        let reader = store.clone();
        let sink = seen.clone();
        let _sub = store.subscribe(move || sink.set(reader.get().ok()));
        store.set(Theme::Dark);
        assert_eq!(seen.get(), Some(Theme::Dark));
    }

    #[test]
    fn callbacks_can_subscribe_while_notifying() {
        let store = ThemeStore::new(Theme::Light);
        let late = Rc::new(RefCell::new(Vec::new()));
        let inner_store = store.clone();
        let sink = late.clone();
        let _sub = store.subscribe(move || {
            sink.borrow_mut().push(inner_store.subscribe(|| {}));
        });
        store.set(Theme::Dark);
        assert_eq!(store.subscriber_count(), 2);
    }

    #[test]
    fn clones_share_state() {
        let store = ThemeStore::new(Theme::Light);
        let other = store.clone();
        other.set(Theme::Dark);
        assert_eq!(store.get(), Ok(Theme::Dark));
        assert_eq!(store, other);
        assert_ne!(store, ThemeStore::new(Theme::Dark));
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = ThemeStore::new(Theme::Light);
        let subscription = store.subscribe(|| {});
        drop(store);
        drop(subscription);
    }
}
