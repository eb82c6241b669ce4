//! Process-lifetime lazy singleton guard
//!
//! [`Lazy`] constructs a shared value on first access. Exactly one thread
//! runs the constructor; contenders spin briefly, then sleep with a stepped
//! backoff until construction completes. The value lives for the remainder
//! of the process and its destructor never runs. That is deliberate: the
//! consumers of this guard (the logging capability) are process-lifetime
//! resources, and skipping teardown removes an entire class of
//! shutdown-ordering hazards.

use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread;
use std::time::Duration;

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const INITIALIZED: u8 = 2;

// Contenders yield this many times before sleeping.
const SPIN_LIMIT: u32 = 10;
// Past this many waits the sleep steps up from 1ms to 10ms.
const LONG_WAIT: u32 = 100;

/// A lazily constructed, never-destructed shared value.
///
/// Suitable for `static` items. The constructor must not recursively access
/// the same `Lazy`.
pub struct Lazy<T> {
    state: AtomicU8,
    value: UnsafeCell<MaybeUninit<T>>,
    init: fn() -> T,
}

// The value is written once before `state` becomes INITIALIZED and is only
// read behind that flag, so sharing the cell across threads is sound.
unsafe impl<T: Send + Sync> Sync for Lazy<T> {}

impl<T> Lazy<T> {
    /// Define an uninitialized value with its constructor.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            state: AtomicU8::new(UNINITIALIZED),
            value: UnsafeCell::new(MaybeUninit::uninit()),
            init,
        }
    }

    /// Get the value, constructing it on first call.
    pub fn get(&self) -> &T {
        if self.state.load(Ordering::Acquire) != INITIALIZED {
            match self.state.compare_exchange(
                UNINITIALIZED,
                INITIALIZING,
                Ordering::Acquire,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    let value = (self.init)();
                    // SAFETY: the compare-exchange admits exactly one
                    // writer, and no reader dereferences the cell until
                    // `state` is INITIALIZED.
                    unsafe {
                        (*self.value.get()).write(value);
                    }
                    self.state.store(INITIALIZED, Ordering::Release);
                }
                Err(_) => self.wait_ready(),
            }
        }

        // SAFETY: `state` is INITIALIZED, so the cell holds a value that
        // will never be dropped or moved.
        unsafe { (*self.value.get()).assume_init_ref() }
    }

    /// Whether the value has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.state.load(Ordering::Acquire) == INITIALIZED
    }

    fn wait_ready(&self) {
        let mut waits: u32 = 0;
        while self.state.load(Ordering::Acquire) != INITIALIZED {
            waits += 1;
            thread::yield_now();
            if waits > SPIN_LIMIT {
                let pause = if waits > LONG_WAIT {
                    Duration::from_millis(10)
                } else {
                    Duration::from_millis(1)
                };
                thread::sleep(pause);
            }
        }
    }
}
