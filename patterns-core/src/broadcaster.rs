//! Broadcaster (Observer / publish-subscribe)
//!
//! A [`Broadcaster`] holds an ordered list of [`Subscriber`] handles and
//! delivers each broadcast value to all of them, synchronously, in the order
//! they subscribed.
//!
//! # Identity
//!
//! Closures cannot be compared in Rust, so a subscriber is an opaque handle
//! around a reference-counted callback. Clones of a handle share the callback
//! and compare equal; wrapping the same closure body twice gives two distinct
//! subscribers. `unsubscribe` removes every entry equal to the handle passed.
//!
//! # Example
//!
//! ```
//! use patterns_core::{Broadcaster, Subscriber};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let recorder = {
//!     let seen = Rc::clone(&seen);
//!     Subscriber::new(move |data: &String| seen.borrow_mut().push(data.clone()))
//! };
//!
//! let mut broadcaster = Broadcaster::new();
//! broadcaster.subscribe(recorder.clone());
//! broadcaster.broadcast(&"hello".to_string()).unwrap();
//!
//! broadcaster.unsubscribe(&recorder);
//! broadcaster.broadcast(&"ignored".to_string()).unwrap();
//!
//! assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
//! ```

use crate::types::{BoxError, PatternError, Result, SubscriberFault};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Outcome of a single subscriber invocation
pub type SubscriberResult = std::result::Result<(), BoxError>;

/// What `broadcast` does when a subscriber returns an error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryPolicy {
    /// The first failure aborts the remaining deliveries
    #[default]
    FailFast,
    /// Every subscriber runs; failures are collected and reported together
    Isolate,
}

/// Handle to a registered callback
pub struct Subscriber<T> {
    name: Rc<str>,
    callback: Rc<dyn Fn(&T) -> SubscriberResult>,
}

impl<T> Subscriber<T> {
    /// Wrap an infallible callback
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self::fallible(move |data: &T| {
            callback(data);
            Ok(())
        })
    }

    /// Wrap a callback that may fail
    pub fn fallible<F>(callback: F) -> Self
    where
        F: Fn(&T) -> SubscriberResult + 'static,
    {
        Self {
            name: Rc::from("anonymous"),
            callback: Rc::new(callback),
        }
    }

    /// Attach a display name; identity is unchanged
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name = Rc::from(name.as_ref());
        self
    }

    /// Name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the callback
    pub fn call(&self, data: &T) -> SubscriberResult {
        (self.callback)(data)
    }

    /// True if both handles refer to the same callback
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T> PartialEq for Subscriber<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T> Eq for Subscriber<T> {}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("name", &self.name)
            .field("callback", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// Ordered collection of subscribers with synchronous delivery
pub struct Broadcaster<T> {
    subscribers: Vec<Subscriber<T>>,
    policy: DeliveryPolicy,
}

impl<T> Broadcaster<T> {
    /// Create an empty broadcaster with the fail-fast policy
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            policy: DeliveryPolicy::default(),
        }
    }

    /// Builder method: set the delivery policy
    pub fn with_policy(mut self, policy: DeliveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current delivery policy
    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Append a subscriber. Duplicates are kept and each copy is delivered to.
    pub fn subscribe(&mut self, subscriber: Subscriber<T>) {
        log::debug!(
            "Subscribing '{}' at position {}",
            subscriber.name(),
            self.subscribers.len()
        );
        self.subscribers.push(subscriber);
    }

    /// Remove every entry equal to `subscriber`
    ///
    /// Returns how many entries were removed. Removing a subscriber that was
    /// never registered is a no-op.
    pub fn unsubscribe(&mut self, subscriber: &Subscriber<T>) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|existing| !existing.same_as(subscriber));
        let removed = before - self.subscribers.len();

        log::debug!("Unsubscribed '{}' ({} removed)", subscriber.name(), removed);
        removed
    }

    /// Deliver `data` to every subscriber in registration order
    ///
    /// Under [`DeliveryPolicy::FailFast`] the first error stops delivery and is
    /// returned as [`PatternError::SubscriberFailure`]. Under
    /// [`DeliveryPolicy::Isolate`] all subscribers run and any errors come back
    /// as [`PatternError::SubscriberFailures`].
    ///
    /// Subscribers cannot reach `&mut self` while a broadcast holds `&self`.
    /// A caller that shares the broadcaster behind a `RefCell` and lets a
    /// subscriber unsubscribe itself will hit a borrow panic mid-delivery.
    pub fn broadcast(&self, data: &T) -> Result<()> {
        log::debug!("Broadcasting to {} subscriber(s)", self.subscribers.len());

        let mut faults = Vec::new();
        for (position, subscriber) in self.subscribers.iter().enumerate() {
            log::trace!("Delivering to '{}' at position {}", subscriber.name(), position);

            if let Err(source) = subscriber.call(data) {
                log::warn!(
                    "Subscriber '{}' at position {} failed: {}",
                    subscriber.name(),
                    position,
                    source
                );
                match self.policy {
                    DeliveryPolicy::FailFast => {
                        return Err(PatternError::SubscriberFailure { position, source });
                    }
                    DeliveryPolicy::Isolate => faults.push(SubscriberFault { position, source }),
                }
            }
        }

        if faults.is_empty() {
            Ok(())
        } else {
            Err(PatternError::SubscriberFailures(faults))
        }
    }

    /// True if `subscriber` is registered at least once
    pub fn contains(&self, subscriber: &Subscriber<T>) -> bool {
        self.subscribers.iter().any(|existing| existing.same_as(subscriber))
    }

    /// Number of entries, counting duplicates
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// True if nothing is subscribed
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Remove all subscribers
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

impl<T> Default for Broadcaster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Broadcaster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcaster")
            .field("subscribers", &self.subscribers)
            .field("policy", &self.policy)
            .finish()
    }
}
