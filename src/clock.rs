//! Fixed-rate game clock
//!
//! The game counts frames (spawn delay, basket descent, puff lifetime), so
//! updates must run at `fps` no matter how fast the display refreshes.
//! Real frame time goes into an accumulator and whole steps are taken out.

use crate::ui::MouseState;

/// Longest frame time fed to the accumulator (stalls, tab switches)
const MAX_FRAME_DT: f64 = 0.1;
/// Maximum updates per rendered frame
const MAX_SUBSTEPS: u32 = 8;

pub struct FixedStep {
    step: f64,
    accumulator: f64,
    pending_press: bool,
}

impl FixedStep {
    pub fn new(fps: u32) -> Self {
        Self {
            step: 1.0 / fps.max(1) as f64,
            accumulator: 0.0,
            pending_press: false,
        }
    }

    /// Seconds per game update
    #[cfg(not(target_arch = "wasm32"))]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Add `dt` seconds of real time and run `update` once per whole step.
    ///
    /// A press edge reaches exactly one update: the first step of this frame,
    /// or of a later frame if this one has no step to take.
    pub fn advance(&mut self, dt: f64, mouse: MouseState, mut update: impl FnMut(&MouseState)) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        self.pending_press |= mouse.left_pressed;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            let input = MouseState { left_pressed: self.pending_press, ..mouse };
            update(&input);
            self.accumulator -= self.step;
            substeps += 1;

            // Clear one-shot input after processing
            self.pending_press = false;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_display(fps: u32, refresh_hz: u32, seconds: u32) -> u32 {
        let mut clock = FixedStep::new(fps);
        let mut updates = 0;
        for _ in 0..refresh_hz * seconds {
            clock.advance(1.0 / refresh_hz as f64, MouseState::hover(0.0, 0.0), |_| updates += 1);
        }
        updates
    }

    #[test]
    fn test_update_rate_ignores_refresh_rate() {
        for hz in [60, 75, 120, 144, 240] {
            let updates = run_display(60, hz, 2);
            assert!((119..=120).contains(&updates), "{} Hz gave {} updates", hz, updates);
        }
    }

    #[test]
    fn test_slow_display_catches_up() {
        let mut clock = FixedStep::new(60);
        let steps = clock.advance(1.0 / 30.0, MouseState::hover(0.0, 0.0), |_| {});
        assert_eq!(steps, 2);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = FixedStep::new(60);
        let steps = clock.advance(5.0, MouseState::hover(0.0, 0.0), |_| {});
        assert!(steps <= 6);
    }

    #[test]
    fn test_press_reaches_one_update() {
        let mut clock = FixedStep::new(60);
        let mut presses = Vec::new();
        let steps = clock.advance(1.0 / 30.0, MouseState::press(4.0, 5.0), |m| {
            presses.push(m.left_pressed);
            assert!(m.left_down);
            assert_eq!((m.x, m.y), (4.0, 5.0));
        });
        assert_eq!(steps, 2);
        assert_eq!(presses, vec![true, false]);
    }

    #[test]
    fn test_press_carries_over_frame_without_update() {
        let mut clock = FixedStep::new(60);
        let mut presses = Vec::new();
        let first = clock.advance(1.0 / 144.0, MouseState::press(1.0, 1.0), |m| presses.push(m.left_pressed));
        assert_eq!(first, 0);

        clock.advance(1.0 / 144.0, MouseState::drag(1.0, 1.0), |m| presses.push(m.left_pressed));
        clock.advance(1.0 / 144.0, MouseState::drag(1.0, 1.0), |m| presses.push(m.left_pressed));
        assert_eq!(presses, vec![true]);

        clock.advance(1.0 / 60.0, MouseState::drag(1.0, 1.0), |m| presses.push(m.left_pressed));
        assert_eq!(presses, vec![true, false]);
    }
}
