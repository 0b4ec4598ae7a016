//! The single process-wide identity slot.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use foodiebaba_boundary::Identity;

use crate::{
    notify::{Notice, Notifier},
    storage::SessionStorage,
};

const LOGOUT_MESSAGE: &str = "Logged out successfully";

type Listener = Rc<dyn Fn(Option<&Identity>)>;

/// Holds the active [`Identity`] and keeps the durable store in sync.
///
/// Clones share the same slot. All access happens on the UI thread.
#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<Inner>,
}

struct Inner {
    storage: Box<dyn SessionStorage>,
    storage_key: String,
    notifier: Rc<dyn Notifier>,
    identity: RefCell<Option<Identity>>,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_listener_id: Cell<usize>,
}

/// Handle returned by [`SessionManager::on_identity_change`].
#[must_use = "dropping the subscription keeps the listener registered"]
pub struct Subscription {
    id: usize,
    inner: Weak<Inner>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl SessionManager {
    /// Creates an anonymous session; call [`SessionManager::restore`] to pick up
    /// a persisted identity.
    pub fn new<S>(storage: S, storage_key: impl Into<String>, notifier: Rc<dyn Notifier>) -> Self
    where
        S: SessionStorage + 'static,
    {
        let inner = Inner {
            storage: Box::new(storage),
            storage_key: storage_key.into(),
            notifier,
            identity: RefCell::new(None),
            listeners: RefCell::new(vec![]),
            next_listener_id: Cell::new(0),
        };
        Self {
            inner: Rc::new(inner),
        }
    }

    /// Loads the persisted identity, if any.
    ///
    /// Missing, unreadable or malformed records leave the session anonymous.
    pub fn restore(&self) {
        let identity = self.load();
        match &identity {
            Some(identity) => log::debug!("Restored session of {}", identity.username),
            None => log::debug!("No session to restore"),
        }
        self.replace(identity);
    }

    pub fn login(&self, identity: Identity) {
        log::info!("Logged in as {} ({})", identity.username, identity.role);
        match serde_json::to_string(&identity) {
            Ok(json) => {
                if let Err(err) = self.inner.storage.set(&self.inner.storage_key, &json) {
                    log::warn!("Unable to persist session: {err}");
                }
            }
            Err(err) => {
                log::warn!("Unable to serialize session: {err}");
            }
        }
        self.replace(Some(identity));
    }

    pub fn logout(&self) {
        log::info!("Logging out");
        self.inner.storage.delete(&self.inner.storage_key);
        self.replace(None);
        self.inner.notifier.notify(Notice::success(LOGOUT_MESSAGE));
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.inner.identity.borrow().clone()
    }

    pub fn with_identity<T>(&self, f: impl FnOnce(Option<&Identity>) -> T) -> T {
        f(self.inner.identity.borrow().as_ref())
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.inner.identity.borrow().is_some()
    }

    /// Registers `callback` to be invoked after every change of the identity.
    pub fn on_identity_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<&Identity>) + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(callback)));
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn load(&self) -> Option<Identity> {
        let json = match self.inner.storage.get(&self.inner.storage_key) {
            Ok(json) => json?,
            Err(err) => {
                log::warn!("Unable to read persisted session: {err}");
                return None;
            }
        };
        match serde_json::from_str::<Identity>(&json) {
            Ok(identity) if !identity.token.is_empty() => Some(identity),
            Ok(_) => {
                log::warn!("Ignore persisted session without token");
                None
            }
            Err(err) => {
                log::warn!("Ignore malformed persisted session: {err}");
                None
            }
        }
    }

    fn replace(&self, identity: Option<Identity>) {
        let changed = *self.inner.identity.borrow() != identity;
        *self.inner.identity.borrow_mut() = identity;
        if changed {
            self.notify_listeners();
        }
    }

    fn notify_listeners(&self) {
        // Listeners may subscribe or unsubscribe while being called.
        let listeners: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        let identity = self.identity();
        for listener in listeners {
            listener(identity.as_ref());
        }
    }
}
