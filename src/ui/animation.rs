// Per-frame easing primitives
//
// All animation in the UI is incremental state advanced once per frame;
// nothing here sleeps or schedules. Two flavours exist:
// - fixed-step ramps (hover/press amounts), clamped to [0, 1]
// - exponential smoothing toward a moving target (indicator, progress)

/// Linear interpolation between `from` and `to`
pub fn lerp(t: f32, from: f32, to: f32) -> f32 {
    from + (to - from) * t
}

/// Move `value` toward 1.0 (`rising`) or 0.0 by `step`, clamped to [0, 1]
pub fn ramp(value: f32, rising: bool, step: f32) -> f32 {
    let step = step.max(0.0);
    let next = if rising { value + step } else { value - step };
    next.clamp(0.0, 1.0)
}

/// One exponential-smoothing step toward `target`.
///
/// `factor` is clamped to [0, 1] so a long frame never overshoots.
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    lerp(factor.clamp(0.0, 1.0), current, target)
}

/// A [0, 1] amount that ramps up while a condition holds and down otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    value: f32,
    rise: f32,
    fall: f32,
}

impl Ramp {
    /// Symmetric ramp with the same step in both directions
    pub fn new(step: f32) -> Self {
        Self::asymmetric(step, step)
    }

    pub fn asymmetric(rise: f32, fall: f32) -> Self {
        Self {
            value: 0.0,
            rise,
            fall,
        }
    }

    /// Advance one frame
    pub fn update(&mut self, active: bool) -> f32 {
        self.value = if active {
            ramp(self.value, true, self.rise)
        } else {
            ramp(self.value, false, self.fall)
        };
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

/// A scalar that eases toward a target, snapping on first placement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tracked {
    current: f32,
    target: f32,
    placed: bool,
}

impl Tracked {
    /// Retarget; the very first target is adopted immediately
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        if !self.placed {
            self.current = target;
            self.placed = true;
        }
    }

    pub fn step(&mut self, factor: f32) -> f32 {
        self.current = ease_toward(self.current, self.target, factor);
        self.current
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_saturates() {
        let mut r = Ramp::new(0.4);
        r.update(true);
        r.update(true);
        assert_eq!(r.update(true), 1.0);
        r.update(false);
        r.update(false);
        assert_eq!(r.update(false), 0.0);
    }

    #[test]
    fn asymmetric_ramp_uses_separate_steps() {
        let mut r = Ramp::asymmetric(0.2, 0.1);
        r.update(true);
        assert!((r.value() - 0.2).abs() < 1e-6);
        r.update(false);
        assert!((r.value() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn ease_toward_never_overshoots() {
        assert_eq!(ease_toward(0.0, 10.0, 5.0), 10.0);
        assert_eq!(ease_toward(0.0, 10.0, -1.0), 0.0);
        assert_eq!(ease_toward(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn tracked_snaps_on_first_target_then_eases() {
        let mut t = Tracked::default();
        t.set_target(40.0);
        assert_eq!(t.current(), 40.0);

        t.set_target(80.0);
        assert_eq!(t.current(), 40.0);
        t.step(0.5);
        assert_eq!(t.current(), 60.0);
    }

    #[test]
    fn tracked_at_origin_is_still_placed() {
        let mut t = Tracked::default();
        t.set_target(0.0);
        assert!(t.is_placed());
        t.set_target(50.0);
        assert_eq!(t.current(), 0.0);
    }
}
