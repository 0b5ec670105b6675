// Elapsed-time measurement
// Scoped timers for reporting how long an operation took

use std::time::{Duration, Instant};

/// Measures the time from creation until it is finished or dropped.
///
/// Dropping an unfinished timer prints `<label> took <elapsed>` to stdout.
/// [`finish`](ScopeTimer::finish) returns the duration instead and prints nothing.
#[derive(Debug)]
pub struct ScopeTimer {
    label: String,
    start: Instant,
    armed: bool,
}

impl ScopeTimer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
            armed: true,
        }
    }

    /// Time since the timer was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer without reporting
    pub fn finish(mut self) -> Duration {
        self.armed = false;
        self.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        if self.armed {
            println!("{} took {}", self.label, format_duration(self.elapsed()));
        }
    }
}

/// Run `f` and return its result together with the time it took
pub fn measure<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Format a duration for display
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();

    if secs >= 60.0 {
        let minutes = duration.as_secs() / 60;
        format!("{}m{:.3}s", minutes, secs - (minutes * 60) as f64)
    } else if secs >= 1.0 {
        format!("{:.3}s", secs)
    } else if duration.as_micros() >= 1000 {
        format!("{:.3}ms", secs * 1e3)
    } else if duration.as_nanos() >= 1000 {
        format!("{:.3}µs", secs * 1e6)
    } else {
        format!("{}ns", duration.as_nanos())
    }
}
