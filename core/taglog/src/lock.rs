//! Raw mutex backends for the engine state.
//!
//! The engine keeps its shared state in a [`lock_api::Mutex`], so any
//! [`lock_api::RawMutex`] can guard it. Three backends are provided:
//!
//! - [`SpinRawMutex`]: busy-waits. Works everywhere, including before an OS exists.
//! - [`OsRawMutex`]: parks the waiting thread on an OS condition variable. Requires `std`.
//! - [`NoopRawMutex`]: for targets with a single execution context. Nothing ever
//!   waits; an attempt to take the lock while it is held panics.
//!
//! [`DefaultRawMutex`] is the backend selected by the `mutex-*` features.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::sync::atomic::{AtomicBool, Ordering};

use lock_api::{GuardSend, RawMutex};

/// Spin-wait backend.
pub type SpinRawMutex = spin::Mutex<()>;

/// Backend for single-context targets.
///
/// Acquisition is a single atomic swap. Contention can only come from re-entry
/// (an interrupt handler logging while the main flow holds the lock), which is
/// not supported and panics instead of deadlocking.
#[derive(Debug)]
pub struct NoopRawMutex {
    locked: AtomicBool,
}

unsafe impl RawMutex for NoopRawMutex {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self { locked: AtomicBool::new(false) };

    type GuardMarker = GuardSend;

    fn lock(&self) {
        if !self.try_lock() {
            panic!("Re-entrant log lock not permitted.");
        }
    }

    fn try_lock(&self) -> bool {
        !self.locked.swap(true, Ordering::Acquire)
    }

    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

#[cfg(feature = "std")]
pub use os::OsRawMutex;

#[cfg(feature = "std")]
mod os {
    use std::sync::{Condvar, Mutex, PoisonError};

    use lock_api::{GuardSend, RawMutex};

    /// Blocking backend built on the host's mutex and condition variable.
    #[derive(Debug)]
    pub struct OsRawMutex {
        locked: Mutex<bool>,
        released: Condvar,
    }

    unsafe impl RawMutex for OsRawMutex {
        #[allow(clippy::declare_interior_mutable_const)]
        const INIT: Self = Self { locked: Mutex::new(false), released: Condvar::new() };

        type GuardMarker = GuardSend;

        fn lock(&self) {
            let mut locked = self.locked.lock().unwrap_or_else(PoisonError::into_inner);
            while *locked {
                locked = self.released.wait(locked).unwrap_or_else(PoisonError::into_inner);
            }
            *locked = true;
        }

        fn try_lock(&self) -> bool {
            let mut locked = self.locked.lock().unwrap_or_else(PoisonError::into_inner);
            if *locked {
                return false;
            }
            *locked = true;
            true
        }

        unsafe fn unlock(&self) {
            *self.locked.lock().unwrap_or_else(PoisonError::into_inner) = false;
            self.released.notify_one();
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "mutex-none")] {
        /// Backend selected by the `mutex-none` feature.
        pub type DefaultRawMutex = NoopRawMutex;
    } else if #[cfg(all(feature = "mutex-os", feature = "std"))] {
        /// Backend selected by the `mutex-os` feature.
        pub type DefaultRawMutex = OsRawMutex;
    } else {
        /// Backend selected by the `mutex-spin` feature.
        pub type DefaultRawMutex = SpinRawMutex;
    }
}
