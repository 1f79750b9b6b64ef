//! Snapshot stream plumbing.
//!
//! DESIGN
//! ======
//! The stream is modeled as an explicit subscription object rather than a
//! callback registration: the owning controller holds the subscription for
//! exactly as long as it wants updates, and dropping it is the cancellation.
//! Subscriptions are lazy (nothing is fetched until `next` is awaited),
//! conceptually infinite, and restartable by subscribing again.

#[cfg(test)]
#[path = "snapshots_test.rs"]
mod snapshots_test;

use tokio::sync::watch;

use super::types::SessionSnapshot;

/// A live subscription to the provider's snapshot stream.
///
/// Yields each snapshot published after the subscription was created. The
/// channel keeps only the latest value, so a slow consumer observes the most
/// recent snapshot rather than a backlog — snapshots are replaced wholesale,
/// intermediate values carry no extra information.
#[derive(Debug)]
pub struct SnapshotSubscription {
    rx: watch::Receiver<SessionSnapshot>,
}

impl SnapshotSubscription {
    /// Wait for the next published snapshot.
    ///
    /// Returns `None` once the publishing side has shut down; an infinite
    /// provider stream never does this during normal operation.
    pub async fn next(&mut self) -> Option<SessionSnapshot> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    /// The most recently published snapshot, without waiting.
    #[must_use]
    pub fn latest(&self) -> SessionSnapshot {
        self.rx.borrow().clone()
    }
}

/// Publishing side of a snapshot stream, held by provider implementations.
#[derive(Debug)]
pub struct SnapshotPublisher {
    tx: watch::Sender<SessionSnapshot>,
}

impl SnapshotPublisher {
    /// Create a publisher seeded with an initial snapshot.
    #[must_use]
    pub fn new(initial: SessionSnapshot) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the current snapshot and notify every open subscription.
    pub fn publish(&self, snapshot: SessionSnapshot) {
        // send_replace never fails; a value is retained even with no
        // subscribers so current_snapshot() stays infallible.
        let _ = self.tx.send_replace(snapshot);
    }

    /// The snapshot most recently published.
    #[must_use]
    pub fn current(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Open a new subscription starting from the next published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> SnapshotSubscription {
        SnapshotSubscription { rx: self.tx.subscribe() }
    }
}

impl Default for SnapshotPublisher {
    fn default() -> Self {
        Self::new(SessionSnapshot::default())
    }
}
