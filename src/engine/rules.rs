//! Scoring Rules & Constants
//!
//! Base weights and the adjustment rule table for the heuristic scorer.
//! Constants only, not configuration. The scorer owns the evaluation.

use super::types::{ClassLabel, FeatureVector};

// ============================================================================
// BASE WEIGHTS
// ============================================================================

pub const BASE_CONFIRMED: f64 = 0.33;
pub const BASE_CANDIDATE: f64 = 0.33;
/// Slightly heavier so a vector that fires no rule leans False Positive
pub const BASE_FALSE_POSITIVE: f64 = 0.34;

/// Base weights in `ClassLabel::ALL` order
pub const BASE_WEIGHTS: [f64; 3] = [BASE_CONFIRMED, BASE_CANDIDATE, BASE_FALSE_POSITIVE];

// ============================================================================
// RULE THRESHOLDS & BONUSES
// ============================================================================

/// Habitable-adjacent window: radius (Earth radii) and equilibrium temperature (K)
pub const HABITABLE_PRAD_MIN: f64 = 0.5;
pub const HABITABLE_PRAD_MAX: f64 = 4.0;
pub const HABITABLE_TEQ_MIN: f64 = 200.0;
pub const HABITABLE_TEQ_MAX: f64 = 400.0;
pub const HABITABLE_BONUS: f64 = 0.20;

/// Radius above which the object is unlikely to be a planet
pub const OVERSIZED_PRAD: f64 = 10.0;
pub const OVERSIZED_BONUS: f64 = 0.30;

/// Orbital period (days) below which the transit signal is suspicious
pub const SHORT_PERIOD_DAYS: f64 = 1.0;
pub const SHORT_PERIOD_BONUS: f64 = 0.20;

// ============================================================================
// RULE TABLE
// ============================================================================

/// One additive adjustment: when `applies` holds, `bonus` goes to `target`
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub target: ClassLabel,
    pub bonus: f64,
    pub applies: fn(&FeatureVector) -> bool,
}

fn habitable_window(v: &FeatureVector) -> bool {
    let prad = v.koi_prad();
    let teq = v.koi_teq();
    prad > HABITABLE_PRAD_MIN
        && prad < HABITABLE_PRAD_MAX
        && teq > HABITABLE_TEQ_MIN
        && teq < HABITABLE_TEQ_MAX
}

fn oversized_radius(v: &FeatureVector) -> bool {
    v.koi_prad() > OVERSIZED_PRAD
}

fn short_period(v: &FeatureVector) -> bool {
    v.koi_period() < SHORT_PERIOD_DAYS
}

/// Independent, non-exclusive rules. All that apply are summed.
pub const RULES: [ScoringRule; 3] = [
    ScoringRule {
        name: "habitable_window",
        target: ClassLabel::Confirmed,
        bonus: HABITABLE_BONUS,
        applies: habitable_window,
    },
    ScoringRule {
        name: "oversized_radius",
        target: ClassLabel::FalsePositive,
        bonus: OVERSIZED_BONUS,
        applies: oversized_radius,
    },
    ScoringRule {
        name: "short_period",
        target: ClassLabel::FalsePositive,
        bonus: SHORT_PERIOD_BONUS,
        applies: short_period,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(period: f64, prad: f64, teq: f64) -> FeatureVector {
        FeatureVector::new([period, prad, 0.1, 85.0, teq, 4.5, 1.0, 1.0, 5500.0]).unwrap()
    }

    fn rule(name: &str) -> ScoringRule {
        RULES.iter().copied().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_base_weights_sum_to_one() {
        assert!((BASE_WEIGHTS.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_habitable_window_bounds_are_exclusive() {
        let r = rule("habitable_window");
        assert_eq!(r.target, ClassLabel::Confirmed);
        assert!((r.applies)(&vector(10.0, 2.0, 300.0)));
        assert!(!(r.applies)(&vector(10.0, 0.5, 300.0)));
        assert!(!(r.applies)(&vector(10.0, 4.0, 300.0)));
        assert!(!(r.applies)(&vector(10.0, 2.0, 200.0)));
        assert!(!(r.applies)(&vector(10.0, 2.0, 400.0)));
        assert!((r.applies)(&vector(10.0, 3.99, 399.9)));
    }

    #[test]
    fn test_oversized_radius() {
        let r = rule("oversized_radius");
        assert_eq!(r.target, ClassLabel::FalsePositive);
        assert_eq!(r.bonus, 0.30);
        assert!((r.applies)(&vector(10.0, 15.0, 300.0)));
        assert!(!(r.applies)(&vector(10.0, 10.0, 300.0)));
    }

    #[test]
    fn test_short_period() {
        let r = rule("short_period");
        assert_eq!(r.target, ClassLabel::FalsePositive);
        assert_eq!(r.bonus, 0.20);
        assert!((r.applies)(&vector(0.5, 2.0, 300.0)));
        assert!(!(r.applies)(&vector(1.0, 2.0, 300.0)));
        assert!((r.applies)(&vector(-3.0, 2.0, 300.0)));
    }
}
