use std::collections::VecDeque;

/// Rolling frame-time statistics for on-screen readouts.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: usize,
    samples: VecDeque<f32>,
    sum: f32,
}

impl FrameStats {
    pub const DEFAULT_WINDOW: usize = 120;

    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    pub fn with_window(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            samples: VecDeque::with_capacity(window),
            sum: 0.0,
        }
    }

    /// Records one frame delta in seconds. Non-finite or negative values are ignored.
    pub fn push(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        if self.samples.len() == self.window {
            if let Some(old) = self.samples.pop_front() {
                self.sum -= old;
            }
        }
        self.samples.push_back(dt);
        self.sum += dt;
    }

    /// Average frame time in milliseconds; 0 with no samples.
    pub fn mean_frame_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.sum / self.samples.len() as f32 * 1000.0
    }

    /// Average frames per second; 0 with no samples.
    pub fn fps(&self) -> f32 {
        let ms = self.mean_frame_ms();
        if ms <= 0.0 { 0.0 } else { 1000.0 / ms }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
