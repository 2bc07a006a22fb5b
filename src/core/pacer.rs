//! Frame-rate cap for host frame callbacks
//!
//! Display refresh may run well above the target rate; frames arriving
//! sooner than one interval after the last accepted frame are skipped.

pub struct FramePacer {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FramePacer {
    /// Pacer for `fps` frames per second; 0 (or less) accepts every frame
    pub fn new(fps: f64) -> Self {
        let interval_ms = if fps > 0.0 { 1000.0 / fps } else { 0.0 };
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Should the frame at `now_ms` run? Records it if so.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}
