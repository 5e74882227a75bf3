//! # Events — Typed One-to-Many Channels
//!
//! A [`Publisher<T>`] fans an event out to every live [`Subscription<T>`] in
//! registration order. Components use channels to notify each other without
//! knowing concrete types: a collider publishes contact events, a player
//! controller publishes its death, and whoever cares holds a subscription.
//!
//! ## Design
//!
//! The publisher never owns its subscribers. Each subscription is a small
//! mailbox (`Rc<RefCell<VecDeque>>`); the publisher keeps only a [`Weak`]
//! reference to it and checks liveness at every publish, pruning entries
//! whose subscription has been dropped. Dropping a [`Subscription`] is
//! therefore the unsubscribe operation — there is no way to dangle.
//!
//! Delivery is synchronous: `publish` pushes into every live mailbox before
//! returning. Consumption is pull-based: a subscriber drains its mailbox with
//! [`Subscription::try_recv`] from inside its own update. A subscriber may
//! react by requesting the publisher's entity be destroyed; that is safe
//! because destruction is deferred to the end of the frame.
//!
//! `Rc` is fine here because the whole runtime is single-threaded by design.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Inbox<T> = Rc<RefCell<VecDeque<T>>>;

/// The sending half of a typed event channel.
pub struct Publisher<T> {
    subscribers: Vec<Weak<RefCell<VecDeque<T>>>>,
}

/// The receiving half: a mailbox of undrained events.
///
/// Dropping the subscription unsubscribes; the publisher prunes the dead
/// registration at its next publish.
pub struct Subscription<T> {
    inbox: Inbox<T>,
}

impl<T> Publisher<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new subscriber and hand back its mailbox.
    ///
    /// Registration order is delivery order.
    pub fn subscribe(&mut self) -> Subscription<T> {
        let inbox: Inbox<T> = Rc::new(RefCell::new(VecDeque::new()));
        self.subscribers.push(Rc::downgrade(&inbox));
        Subscription { inbox }
    }

    /// How many live subscriptions are currently registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl<T: Clone> Publisher<T> {
    /// Deliver `event` to every live mailbox, in registration order.
    ///
    /// Registrations whose subscription has been dropped are removed.
    pub fn publish(&mut self, event: T) {
        self.subscribers.retain(|weak| match weak.upgrade() {
            Some(inbox) => {
                inbox.borrow_mut().push_back(event.clone());
                true
            }
            None => false,
        });
    }
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subscription<T> {
    /// Pop the oldest undrained event, if any.
    pub fn try_recv(&mut self) -> Option<T> {
        self.inbox.borrow_mut().pop_front()
    }

    /// Number of undrained events.
    pub fn len(&self) -> usize {
        self.inbox.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.borrow().is_empty()
    }
}
