use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use common::prelude::Stash;

/// Process-wide service state, shared with every request handler.
///
/// Built once at startup and cloned into the router; all clones point at
///  the same stash.
#[derive(Debug, Clone, Default)]
pub struct State {
    stash: Stash,
    shutting_down: Arc<AtomicBool>,
}

impl State {
    pub fn new(stash: Stash) -> Self {
        Self {
            stash,
            shutting_down: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }

    /// Flag the service as draining so readiness probes start failing.
    pub fn mark_shutting_down(&self) {
        self.shutting_down.store(true, Ordering::SeqCst);
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::SeqCst)
    }
}

impl AsRef<Stash> for State {
    fn as_ref(&self) -> &Stash {
        &self.stash
    }
}
