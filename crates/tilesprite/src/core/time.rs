/// Turns variable frame times into whole animation steps.
///
/// Leftover time is carried into the next call. A clock with a
/// non-positive step length is paused and never reports a step.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    /// Seconds per animation step.
    step: f32,
    /// Seconds not yet spent on a step.
    carry: f32,
    /// Steps reported since creation or the last `restart`.
    steps_taken: u64,
}

impl AnimationClock {
    /// Most steps a single `advance` reports. A larger backlog is dropped.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(frame_duration: f32) -> Self {
        Self {
            step: frame_duration,
            carry: 0.0,
            steps_taken: 0,
        }
    }

    /// Clock stepping `fps` times per second.
    pub fn from_fps(fps: f32) -> Self {
        Self::new(if fps > 0.0 { 1.0 / fps } else { 0.0 })
    }

    pub fn is_paused(&self) -> bool {
        self.step <= 0.0 || !self.step.is_finite()
    }

    /// Feed `dt` seconds of frame time. Returns the steps now due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.is_paused() {
            return 0;
        }
        let elapsed = self.carry + dt.max(0.0);
        let due = (elapsed / self.step).floor();
        let steps = if due > Self::MAX_STEPS as f32 {
            // After a stall, play the capped steps and resume from a clean slate.
            log::debug!(
                "animation clock dropped {} late steps",
                due as u64 - u64::from(Self::MAX_STEPS)
            );
            self.carry = 0.0;
            Self::MAX_STEPS
        } else {
            self.carry = elapsed - due * self.step;
            due as u32
        };
        self.steps_taken += u64::from(steps);
        steps
    }

    /// Fraction of the next step already elapsed, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        if self.is_paused() {
            return 0.0;
        }
        self.carry / self.step
    }

    pub fn frame_duration(&self) -> f32 {
        self.step
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Forget carried time and the step count.
    pub fn restart(&mut self) {
        self.carry = 0.0;
        self.steps_taken = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fps_clock() {
        let mut clock = AnimationClock::from_fps(4.0);
        assert_eq!(clock.frame_duration(), 0.25);
        let steps: Vec<u32> = [0.125, 0.125, 0.375, 0.125]
            .iter()
            .map(|&dt| clock.advance(dt))
            .collect();
        assert_eq!(steps, vec![0, 1, 1, 1]);
        assert_eq!(clock.steps_taken(), 3);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn stall_plays_capped_steps_then_drops_backlog() {
        let mut clock = AnimationClock::new(0.25);
        clock.advance(0.125);
        assert_eq!(clock.advance(60.0), AnimationClock::MAX_STEPS);
        assert_eq!(clock.progress(), 0.0);
        assert_eq!(clock.advance(0.25), 1);
        assert_eq!(clock.steps_taken(), 11);
    }

    #[test]
    fn exactly_max_steps_keeps_remainder() {
        let mut clock = AnimationClock::new(0.25);
        assert_eq!(clock.advance(2.625), 10);
        assert_eq!(clock.progress(), 0.5);
    }

    #[test]
    fn negative_dt_counts_as_zero() {
        let mut clock = AnimationClock::new(0.25);
        clock.advance(0.125);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.progress(), 0.5);
    }

    #[test]
    fn non_positive_rate_is_paused() {
        let clocks = [
            AnimationClock::new(0.0),
            AnimationClock::from_fps(0.0),
            AnimationClock::new(-1.0),
        ];
        for mut clock in clocks {
            assert!(clock.is_paused());
            assert_eq!(clock.advance(5.0), 0);
            assert_eq!(clock.progress(), 0.0);
        }
    }

    #[test]
    fn restart_clears_carry_and_count() {
        let mut clock = AnimationClock::new(0.25);
        clock.advance(0.375);
        assert_eq!(clock.steps_taken(), 1);
        assert_eq!(clock.progress(), 0.5);
        clock.restart();
        assert_eq!(clock.steps_taken(), 0);
        assert_eq!(clock.progress(), 0.0);
    }
}
