//! Counter backing `Key::new_unique`, with a lock fallback for targets
//! without native 64-bit atomics.
pub(crate) use implementation::AtomicU64;

#[cfg(target_has_atomic = "64")]
mod implementation {
    use std::sync::atomic;

    pub(crate) struct AtomicU64(atomic::AtomicU64);

    impl AtomicU64 {
        pub(crate) const fn new(initial: u64) -> Self {
            Self(atomic::AtomicU64::new(initial))
        }

        /// Adds `v`, returning the previous value.
        pub(crate) fn fetch_add(&self, v: u64) -> u64 {
            self.0.fetch_add(v, atomic::Ordering::Relaxed)
        }
    }
}

#[cfg(not(target_has_atomic = "64"))]
mod implementation {
    use std::sync::Mutex;

    pub(crate) struct AtomicU64(Mutex<u64>);

    impl AtomicU64 {
        pub(crate) const fn new(initial: u64) -> Self {
            Self(Mutex::new(initial))
        }

        /// Adds `v`, returning the previous value.
        pub(crate) fn fetch_add(&self, v: u64) -> u64 {
            let mut lock = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let i = *lock;
            *lock = i.wrapping_add(v);
            i
        }
    }
}
