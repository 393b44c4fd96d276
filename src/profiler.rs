use std::cell::RefCell;
use std::collections::HashMap;
use std::thread_local;
use std::time::{Duration, Instant};

/// Named wall-clock timers for the stages of a run
#[derive(Debug, Default)]
pub struct Profiler {
    timers: HashMap<String, Instant>,
    measurements: HashMap<String, Vec<Duration>>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timer(&mut self, name: &str) {
        tracing::trace!(timer = name, "start_timer");
        self.timers.insert(name.to_string(), Instant::now());
    }

    pub fn end_timer(&mut self, name: &str) {
        if let Some(start) = self.timers.remove(name) {
            let duration = start.elapsed();
            tracing::debug!(timer = name, duration_ms = ?duration.as_millis(), "end_timer");
            self.measurements.entry(name.to_string())
                .or_default()
                .push(duration);
        }
    }

    /// Total time recorded under `name`.
    pub fn total(&self, name: &str) -> Option<Duration> {
        self.measurements.get(name).map(|m| m.iter().sum())
    }
}

thread_local! {
    static PROFILER: RefCell<Profiler> = RefCell::new(Profiler::new());
}

pub fn with_profiler<F, R>(f: F) -> R
where
    F: FnOnce(&mut Profiler) -> R,
{
    PROFILER.with(|p| f(&mut p.borrow_mut()))
}

/// Run `f` between `start_timer(name)` and `end_timer(name)`.
pub fn timed<F, R>(name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    with_profiler(|p| p.start_timer(name));
    let result = f();
    with_profiler(|p| p.end_timer(name));
    result
}
