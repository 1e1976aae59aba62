//! Active-state fade animation.
//!
//! Drives the titlebar color blend between the inactive and active
//! palettes. The fade is clock-driven: the host calls [`ActiveStateFade::tick`]
//! with the current time on every frame it paints, and reads the blend
//! factor back. No timers or threads are involved.

use std::time::{Duration, Instant};

/// Quadratic ease-in-out over a normalized 0..=1 input.
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Fade between the inactive (0.0) and active (1.0) titlebar palettes.
#[derive(Debug, Clone)]
pub struct ActiveStateFade {
    enabled: bool,
    duration: Duration,
    /// Blend value at the moment the current fade started.
    from: f32,
    /// Blend value the fade is heading toward.
    target: f32,
    /// Start of the current fade; `None` when settled.
    started: Option<Instant>,
    /// Last sampled blend value.
    value: f32,
}

impl ActiveStateFade {
    /// Create a settled fade for the given initial active state.
    pub fn new(enabled: bool, duration: Duration, active: bool) -> Self {
        let value = if active { 1.0 } else { 0.0 };
        Self {
            enabled,
            duration,
            from: value,
            target: value,
            started: None,
            value,
        }
    }

    /// Begin fading toward the new active state.
    ///
    /// With animations disabled (or a zero duration) the value snaps
    /// immediately. Retargeting mid-fade continues from the current
    /// blend value, so rapid focus flips never jump.
    pub fn set_active(&mut self, active: bool, now: Instant) {
        let target = if active { 1.0 } else { 0.0 };
        if target == self.target {
            return;
        }
        if !self.enabled || self.duration.is_zero() {
            self.from = target;
            self.target = target;
            self.value = target;
            self.started = None;
            return;
        }
        self.from = self.value;
        self.target = target;
        self.started = Some(now);
    }

    /// Advance the fade to `now` and return the current blend value.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.value;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.value = self.target;
            self.from = self.target;
            self.started = None;
        } else {
            let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            self.value = self.from + (self.target - self.from) * ease_in_out_quad(t);
        }
        self.value
    }

    /// Current blend value without advancing the clock.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether a fade is still in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(200);

    #[test]
    fn test_disabled_fade_snaps() {
        let mut fade = ActiveStateFade::new(false, DURATION, false);
        fade.set_active(true, Instant::now());
        assert_eq!(fade.value(), 1.0);
        assert!(!fade.is_running());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut fade = ActiveStateFade::new(true, Duration::ZERO, true);
        fade.set_active(false, Instant::now());
        assert_eq!(fade.value(), 0.0);
        assert!(!fade.is_running());
    }

    #[test]
    fn test_fade_progresses_and_completes() {
        let start = Instant::now();
        let mut fade = ActiveStateFade::new(true, DURATION, false);
        fade.set_active(true, start);
        assert!(fade.is_running());

        let mid = fade.tick(start + DURATION / 2);
        assert!(mid > 0.0 && mid < 1.0);

        let done = fade.tick(start + DURATION);
        assert_eq!(done, 1.0);
        assert!(!fade.is_running());
    }

    #[test]
    fn test_easing_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        // Slow start, fast middle.
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn test_retarget_mid_fade_keeps_value() {
        let start = Instant::now();
        let mut fade = ActiveStateFade::new(true, DURATION, false);
        fade.set_active(true, start);
        let mid = fade.tick(start + DURATION / 2);

        fade.set_active(false, start + DURATION / 2);
        // Reversal starts from the current blend, not from 1.0.
        let just_after = fade.tick(start + DURATION / 2 + Duration::from_millis(1));
        assert!((just_after - mid).abs() < 0.1);
    }

    #[test]
    fn test_redundant_target_is_ignored() {
        let start = Instant::now();
        let mut fade = ActiveStateFade::new(true, DURATION, true);
        fade.set_active(true, start);
        assert!(!fade.is_running());
    }
}
