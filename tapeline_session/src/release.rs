// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use smallvec::SmallVec;

/// Teardown callbacks, run in reverse registration order.
///
/// Everything the session wires up while enabled registers its undo here,
/// so [`release_all`](ReleaseStack::release_all) unwinds the setup exactly
/// backwards. Callbacks run at most once.
#[derive(Default)]
pub struct ReleaseStack {
    callbacks: SmallVec<[Box<dyn FnOnce()>; 8]>,
}

impl ReleaseStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a teardown callback.
    pub fn push(&mut self, callback: impl FnOnce() + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Runs all callbacks, most recently registered first, leaving the
    /// stack empty.
    pub fn release_all(&mut self) {
        while let Some(callback) = self.callbacks.pop() {
            callback();
        }
    }
}

impl core::fmt::Debug for ReleaseStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReleaseStack")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
