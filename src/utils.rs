//! Assorted helpers.

use std::time::{Duration, Instant};

/// Run `f` and return its value together with the wall-clock duration.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
