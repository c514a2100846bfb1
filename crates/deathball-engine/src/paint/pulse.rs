/// Sawtooth scalar for animating one color channel.
///
/// Walks `0.01, 0.02, ..., 1.00` one step per `advance`, then wraps to `0.01`.
/// The position is kept as an integer step so float drift cannot skip or
/// repeat a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorPulse {
    step: u32,
}

impl ColorPulse {
    pub const STEP: f32 = 0.01;
    const STEPS: u32 = 100;

    pub const fn new() -> Self {
        Self { step: 1 }
    }

    /// Current value in `[0.01, 1.00]`.
    #[inline]
    pub fn value(self) -> f32 {
        self.step as f32 / Self::STEPS as f32
    }

    /// Moves one step forward; wraps to the minimum instead of passing 1.0.
    pub fn advance(&mut self) -> f32 {
        self.step = if self.step >= Self::STEPS { 1 } else { self.step + 1 };
        self.value()
    }
}

impl Default for ColorPulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_minimum() {
        assert_eq!(ColorPulse::new().value(), 0.01);
    }

    #[test]
    fn full_cycle_visits_every_step_once() {
        let mut pulse = ColorPulse::new();
        let mut seen = vec![pulse.value()];
        for _ in 0..99 {
            seen.push(pulse.advance());
        }

        assert_eq!(seen.len(), 100);
        assert_eq!(seen[99], 1.0);
        for (i, v) in seen.iter().enumerate() {
            let expected = (i as f32 + 1.0) / 100.0;
            assert_eq!(*v, expected, "step {i}");
        }
        for pair in seen.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn wraps_to_minimum_after_one() {
        let mut pulse = ColorPulse::new();
        for _ in 0..99 {
            pulse.advance();
        }
        assert_eq!(pulse.value(), 1.0);
        assert_eq!(pulse.advance(), 0.01);
        assert_eq!(pulse.advance(), 0.02);
    }
}
