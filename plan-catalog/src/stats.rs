//! Home-page stat counters and their animation schedule.
//!
//! The UI drives a repeating interval that advances a step counter; this
//! module owns the interpolation so the termination behavior can be tested
//! off-browser. At the final step every counter equals its target exactly,
//! and the schedule reports itself finished so the interval can be cleared.

use serde::{Deserialize, Serialize};

/// Fixed targets the counters animate toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTargets {
    pub plans: u64,
    pub users: u64,
    pub savings: u64,
    pub satisfaction: u64,
}

pub const TARGETS: StatTargets = StatTargets {
    plans: 1_500,
    users: 50_000,
    savings: 2_500_000,
    satisfaction: 98,
};

/// Total animation length and step count, matching a 60-step ramp over 2 s.
pub const DURATION_MS: u32 = 2_000;
pub const STEPS: u32 = 60;

/// Delay between interval ticks.
pub const fn tick_interval_ms() -> u32 {
    DURATION_MS / STEPS
}

/// Counter values after `step` of `STEPS` ticks, linearly interpolated and
/// floored, so intermediate frames never overshoot.
pub fn values_at(step: u32) -> StatTargets {
    let step = step.min(STEPS);
    let scale = |target: u64| target * u64::from(step) / u64::from(STEPS);
    StatTargets {
        plans: scale(TARGETS.plans),
        users: scale(TARGETS.users),
        savings: scale(TARGETS.savings),
        satisfaction: scale(TARGETS.satisfaction),
    }
}

/// True once the ramp has reached its final step.
pub fn finished(step: u32) -> bool {
    step >= STEPS
}

/// Group digits for display, e.g. 2500000 -> "2,500,000".
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let v = values_at(0);
        assert_eq!(v.plans, 0);
        assert_eq!(v.users, 0);
        assert_eq!(v.savings, 0);
        assert_eq!(v.satisfaction, 0);
    }

    #[test]
    fn final_step_hits_targets_exactly() {
        assert_eq!(values_at(STEPS), TARGETS);
        assert!(finished(STEPS));
    }

    #[test]
    fn steps_past_the_end_stay_clamped() {
        assert_eq!(values_at(STEPS + 10), TARGETS);
        assert!(finished(STEPS + 10));
    }

    #[test]
    fn ramp_is_monotone_and_never_overshoots() {
        let mut prev = values_at(0);
        for step in 1..=STEPS {
            let v = values_at(step);
            assert!(v.plans >= prev.plans && v.plans <= TARGETS.plans);
            assert!(v.users >= prev.users && v.users <= TARGETS.users);
            assert!(v.savings >= prev.savings && v.savings <= TARGETS.savings);
            assert!(v.satisfaction >= prev.satisfaction);
            assert!(v.satisfaction <= TARGETS.satisfaction);
            prev = v;
        }
    }

    #[test]
    fn tick_interval_divides_duration() {
        assert_eq!(tick_interval_ms(), 33);
        assert!(!finished(STEPS - 1));
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_grouped(98), "98");
        assert_eq!(format_grouped(1_500), "1,500");
        assert_eq!(format_grouped(2_500_000), "2,500,000");
    }
}
