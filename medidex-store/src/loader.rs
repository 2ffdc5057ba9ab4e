//! Directory load lifecycle.
//!
//! One loader per view. Drives a single fetch at a time through
//! idle/loading/loaded/failed, clears stale errors at the start of every
//! load, and exposes retry plus a watch channel for change notification.

use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use medidex_core::{DirectoryError, Doctor, DoctorSource};

/// The load lifecycle state. Exactly one variant holds per loader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load has been requested yet.
    #[default]
    Idle,
    /// A fetch is in flight; any prior error has been cleared.
    Loading,
    /// The last fetch resolved with a directory (possibly empty).
    Loaded(Vec<Doctor>),
    /// The last fetch failed.
    Failed(DirectoryError),
}

impl LoadState {
    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded directory, if any.
    pub fn doctors(&self) -> Option<&[Doctor]> {
        match self {
            LoadState::Loaded(doctors) => Some(doctors),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&DirectoryError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

struct LoaderInner {
    state: LoadState,
    /// Incremented per load; a resolution is applied only if its ticket is
    /// still current, so overlapping loads settle to the most recent call.
    generation: u64,
}

/// Loader over a [`DoctorSource`].
///
/// Overlapping `load()` calls are permitted; each takes a generation ticket
/// and only the most recent call's resolution is applied.
pub struct DirectoryLoader<S: DoctorSource> {
    source: Arc<S>,
    inner: Arc<RwLock<LoaderInner>>,
    notify: watch::Sender<u64>,
    version: Arc<RwLock<u64>>,
}

impl<S: DoctorSource> DirectoryLoader<S> {
    /// Creates an idle loader over the given source.
    pub fn new(source: S) -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            source: Arc::new(source),
            inner: Arc::new(RwLock::new(LoaderInner {
                state: LoadState::Idle,
                generation: 0,
            })),
            notify,
            version: Arc::new(RwLock::new(0)),
        }
    }

    /// Starts a load: enters `Loading` (clearing any prior error), awaits
    /// the source, and settles to `Loaded` or `Failed`.
    ///
    /// Returns the state as settled by this call, or the current state if a
    /// newer call superseded it while in flight.
    pub async fn load(&self) -> LoadState {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.state = LoadState::Loading;
            inner.generation
        };
        self.notify_change().await;
        debug!(generation = ticket, "Directory load started");

        let outcome = self.source.fetch_directory().await;

        let mut inner = self.inner.write().await;
        if inner.generation != ticket {
            debug!(generation = ticket, "Dropping superseded load resolution");
            return inner.state.clone();
        }

        inner.state = match outcome {
            Ok(doctors) => {
                info!(count = doctors.len(), "Directory loaded");
                LoadState::Loaded(doctors)
            }
            Err(err) => {
                warn!(message = %err.display_message(), "Directory load failed");
                LoadState::Failed(err)
            }
        };
        let state = inner.state.clone();
        drop(inner);

        self.notify_change().await;
        state
    }

    /// Retries the load. Semantically identical to [`Self::load`]; valid
    /// after a failure and after a successful load alike.
    pub async fn retry(&self) -> LoadState {
        self.load().await
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> LoadState {
        self.inner.read().await.state.clone()
    }

    /// The loaded directory, if the loader is in `Loaded`.
    pub async fn doctors(&self) -> Option<Vec<Doctor>> {
        match &self.inner.read().await.state {
            LoadState::Loaded(doctors) => Some(doctors.clone()),
            _ => None,
        }
    }

    /// The current failure, if the loader is in `Failed`.
    pub async fn error(&self) -> Option<DirectoryError> {
        match &self.inner.read().await.state {
            LoadState::Failed(err) => Some(err.clone()),
            _ => None,
        }
    }

    /// Whether a fetch is in flight.
    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.state.is_loading()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    /// Notifies subscribers of a change.
    async fn notify_change(&self) {
        let mut version = self.version.write().await;
        *version += 1;
        let _ = self.notify.send(*version);
    }
}
