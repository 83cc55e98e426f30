use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use parking_lot::{Condvar, Mutex};

use crate::formatter::{rfc3339, Emit};

/// Builds the text of one generated line from its RFC 3339 stamp.
pub fn message(timestamp: &str) -> String {
    format!("Log message at {timestamp}")
}

/// Cancellation handle for [`Spammer::run`].
///
/// Clones share the same flag. Once signalled it stays signalled.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the loop and wakes it if it is waiting.
    pub fn signal(&self) {
        let (stopped, wake) = &*self.inner;
        *stopped.lock() = true;
        wake.notify_all();
    }

    pub fn is_signalled(&self) -> bool {
        *self.inner.0.lock()
    }

    /// Blocks for `timeout` or until signalled, whichever is first.
    ///
    /// Returns `true` if the handle was signalled.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (stopped, wake) = &*self.inner;
        let mut guard = stopped.lock();
        match Instant::now().checked_add(timeout) {
            Some(deadline) => {
                while !*guard {
                    if wake.wait_until(&mut guard, deadline).timed_out() {
                        break;
                    }
                }
            }
            None => {
                while !*guard {
                    wake.wait(&mut guard);
                }
            }
        }
        *guard
    }
}

/// The emission loop: one message, one interval, repeat.
#[derive(Debug, Clone, Copy)]
pub struct Spammer {
    interval: Duration,
}

impl Spammer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Emits `Log message at <now>` every interval until `shutdown` fires.
    ///
    /// Emission errors are ignored; a broken sink keeps getting written to.
    /// Returns the number of messages handed to `emitter`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use log_spammer::{Emit, Error, Shutdown, Spammer};
    /// # use std::time::Duration;
    /// struct Once(Shutdown, Vec<String>);
    ///
    /// impl Emit for Once {
    ///     fn emit(&mut self, message: &str) -> Result<(), Error> {
    ///         self.1.push(message.to_string());
    ///         self.0.signal();
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let shutdown = Shutdown::new();
    /// let mut emitter = Once(shutdown.clone(), Vec::new());
    /// let emitted = Spammer::new(Duration::from_secs(60)).run(&mut emitter, &shutdown);
    ///
    /// assert_eq!(emitted, 1);
    /// assert!(emitter.1[0].starts_with("Log message at "));
    /// ```
    pub fn run<E: Emit>(&self, emitter: &mut E, shutdown: &Shutdown) -> u64 {
        let mut emitted = 0;
        while !shutdown.is_signalled() {
            let _ = emitter.emit(&message(&rfc3339(&Local::now())));
            emitted += 1;
            if shutdown.wait_timeout(self.interval) {
                break;
            }
        }
        emitted
    }
}
