//! Scroll-to-top visibility and scroll handler throttling.

/// Scroll-to-top control is shown strictly past the threshold
pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Limits how often scroll handlers run.
///
/// An interval of zero lets every event through.
#[derive(Clone, Debug)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last_run_ms: Option<f64>,
}

impl ScrollThrottle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_run_ms: None,
        }
    }

    /// Whether a handler may run at `now_ms`; records the run if so.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_run_ms = Some(now_ms);
                true
            }
        }
    }
}
