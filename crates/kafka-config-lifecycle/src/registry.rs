//! Client handle registry
//!
//! Tracks every open client handle so an application shutdown can close
//! them all, even when individual closes fail. The registry is an
//! explicitly constructed object: the composition root creates one,
//! hands it (behind an `Arc`) to every client factory, and wires
//! [`ClientRegistry::close_all`] into its shutdown hook.

use crate::error::{CloseFailure, ShutdownError};
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// The role of a tracked client handle.
///
/// Shutdown processes kinds in the order of [`ClientKind::CLOSE_ORDER`]:
/// producers first so no new records are in flight, then consumers, then
/// admin clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    /// A record-producing client.
    Producer,
    /// A record-consuming client.
    Consumer,
    /// An administrative client.
    Admin,
}

impl ClientKind {
    /// The fixed phase order used by [`ClientRegistry::close_all`].
    pub const CLOSE_ORDER: [ClientKind; 3] =
        [ClientKind::Producer, ClientKind::Consumer, ClientKind::Admin];
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::Producer => f.write_str("producer"),
            ClientKind::Consumer => f.write_str("consumer"),
            ClientKind::Admin => f.write_str("admin"),
        }
    }
}

/// A closeable client handle.
///
/// The registry knows nothing about a handle beyond this trait: closing
/// may fail, and the failure is carried as a boxed error so any client
/// library's error type fits.
pub trait ManagedClient: Send + Sync {
    /// Closes the underlying client, releasing its resources.
    fn close(&self) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// Thread-safe registry of open client handles, one collection per
/// [`ClientKind`].
///
/// `register` and `unregister` may be called from any thread at any time,
/// including while [`close_all`](Self::close_all) is sweeping; a handle
/// registered during a sweep is picked up by the next sweep if the running
/// one misses it.
#[derive(Default)]
pub struct ClientRegistry {
    producers: Mutex<Vec<Arc<dyn ManagedClient>>>,
    consumers: Mutex<Vec<Arc<dyn ManagedClient>>>,
    admin_clients: Mutex<Vec<Arc<dyn ManagedClient>>>,
}

impl ClientRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `client` under `kind`.
    pub fn register(&self, kind: ClientKind, client: Arc<dyn ManagedClient>) {
        self.collection(kind).push(client);
        tracing::debug!(%kind, "registered client");
    }

    /// Stops tracking `client` if it is currently tracked under `kind`.
    ///
    /// Handles are matched by identity (`Arc::ptr_eq`), not by value; an
    /// unknown handle is a no-op.
    pub fn unregister(&self, kind: ClientKind, client: &Arc<dyn ManagedClient>) {
        let mut guard = self.collection(kind);
        let before = guard.len();
        guard.retain(|tracked| !Arc::ptr_eq(tracked, client));
        if guard.len() < before {
            tracing::debug!(%kind, "unregistered client");
        }
    }

    /// Number of handles currently tracked under `kind`.
    pub fn len(&self, kind: ClientKind) -> usize {
        self.collection(kind).len()
    }

    /// True when no handle of any kind is tracked.
    pub fn is_empty(&self) -> bool {
        ClientKind::CLOSE_ORDER
            .iter()
            .all(|&kind| self.len(kind) == 0)
    }

    /// Closes every tracked handle, kind by kind in
    /// [`ClientKind::CLOSE_ORDER`].
    ///
    /// Each phase snapshots and empties its collection under the lock,
    /// then closes the snapshot outside it, so registrations arriving
    /// mid-sweep never block and never corrupt the sweep. Every close is
    /// attempted regardless of earlier failures; a handle counts as
    /// handled once its close was attempted. If any close failed, one
    /// [`ShutdownError`] is returned after all phases complete, carrying
    /// every recorded cause.
    ///
    /// Calling this more than once is safe; a later call sweeps whatever
    /// was registered since the previous one.
    pub fn close_all(&self) -> Result<(), ShutdownError> {
        let mut failures = Vec::new();

        for kind in ClientKind::CLOSE_ORDER {
            let snapshot = std::mem::take(&mut *self.collection(kind));
            for client in snapshot {
                if let Err(source) = client.close() {
                    tracing::warn!(%kind, error = %source, "failed to close client");
                    failures.push(CloseFailure::new(kind, source));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ShutdownError::new(failures))
        }
    }

    fn collection(&self, kind: ClientKind) -> MutexGuard<'_, Vec<Arc<dyn ManagedClient>>> {
        let mutex = match kind {
            ClientKind::Producer => &self.producers,
            ClientKind::Consumer => &self.consumers,
            ClientKind::Admin => &self.admin_clients,
        };
        // A registrant that panicked mid-push must not wedge shutdown.
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("producers", &self.len(ClientKind::Producer))
            .field("consumers", &self.len(ClientKind::Consumer))
            .field("admin_clients", &self.len(ClientKind::Admin))
            .finish()
    }
}
