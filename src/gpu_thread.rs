// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Thread affinity for GPU state.

The graphics context is owned by exactly one thread.  Everything that creates or looks up
GPU objects checks that it is running there and panics otherwise; a call from the wrong thread
is a programming error, not a condition to recover from.
*/
use std::thread::{self, ThreadId};

/// Token naming the thread that owns the GPU context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuThread {
    owner: ThreadId,
}

impl GpuThread {
    /// Captures the calling thread as the owner.
    pub fn current() -> Self {
        GpuThread {
            owner: thread::current().id(),
        }
    }

    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    pub fn is_current(&self) -> bool {
        thread::current().id() == self.owner
    }

    /**
    Asserts that we are on the owning thread.

    # Panics
    If called from any other thread.
    */
    #[inline]
    #[track_caller]
    pub fn verify(&self, operation: &'static str) {
        let current = thread::current().id();
        assert!(
            current == self.owner,
            "{operation} called from {current:?}, but the GPU context is owned by {:?}",
            self.owner
        );
    }
}
