use std::time::{Duration, Instant};

/// Counts frames and reports the average rate once per reporting window.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window: Duration,
    window_start: Option<Instant>,
    frames: u32,
}

impl FpsMeter {
    pub fn new(window: Duration) -> Self {
        debug_assert!(!window.is_zero());
        Self {
            window,
            window_start: None,
            frames: 0,
        }
    }

    /// Records one frame presented at `now`.
    ///
    /// Returns the frames-per-second average when the reporting window has
    /// elapsed, then starts a new window at `now`.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            self.frames = 0;
            return None;
        };

        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.window {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = Some(now);
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_only_starts_window() {
        let mut m = FpsMeter::default();
        assert_eq!(m.record(Instant::now()), None);
    }

    #[test]
    fn reports_once_window_elapsed() {
        let mut m = FpsMeter::default();
        let t0 = Instant::now();
        m.record(t0);
        for i in 1..60 {
            assert_eq!(m.record(t0 + Duration::from_millis(i * 16)), None);
        }
        let fps = m.record(t0 + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 1e-3);
    }

    #[test]
    fn window_restarts_after_report() {
        let mut m = FpsMeter::new(Duration::from_millis(500));
        let t0 = Instant::now();
        m.record(t0);
        assert!(m.record(t0 + Duration::from_millis(500)).is_some());
        assert_eq!(m.record(t0 + Duration::from_millis(600)), None);
        let fps = m.record(t0 + Duration::from_millis(1000)).unwrap();
        assert!((fps - 4.0).abs() < 1e-3);
    }
}
