use log::{log_enabled, trace, Level};
use std::time::Instant;

/// Logs the wall time of a resolve pass at trace level when dropped.
pub struct ResolveTimer<'a> {
    label: &'a str,
    bodies: usize,
    start: Instant,
}

impl<'a> ResolveTimer<'a> {
    pub fn new(label: &'a str, bodies: usize) -> Self {
        if log_enabled!(Level::Trace) {
            trace!("⏱️ start {label} ({bodies} bodies)");
        }
        Self {
            label,
            bodies,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ResolveTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let micros = self.start.elapsed().as_secs_f64() * 1e6;
            let per_body = micros / self.bodies.max(1) as f64;
            trace!(
                "⏱️ end {} ({:.0} µs, {:.2} µs per body)",
                self.label,
                micros,
                per_body
            );
        }
    }
}
