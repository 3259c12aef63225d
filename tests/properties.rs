//! Property-based tests for the classification engine using proptest.

use proptest::prelude::*;
use serde_json::{json, Value};

use koi_classifier::engine::rules::{
    HABITABLE_PRAD_MAX, HABITABLE_PRAD_MIN, HABITABLE_TEQ_MAX, HABITABLE_TEQ_MIN, OVERSIZED_PRAD,
    SHORT_PERIOD_DAYS,
};
use koi_classifier::engine::{
    classify, ClassLabel, EngineError, HeuristicPredictor, RandomAttributor, ValidationError,
    FEATURE_COUNT,
};

// Rule thresholds and values just either side of them
fn boundary_value() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![
        -0.0, 0.0, 0.4999, 0.5, 0.5001, 0.999, 1.0, 1.001, 3.999, 4.0, 4.001, 9.999, 10.0,
        10.001, 199.9, 200.0, 200.1, 399.9, 400.0, 400.1,
    ])
}

fn feature_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e6f64..1e6,
        -1000.0f64..0.0,
        boundary_value(),
        prop::num::f64::NORMAL,
    ]
}

prop_compose! {
    fn feature_values()
        (values in prop::array::uniform9(feature_value()))
        -> [f64; FEATURE_COUNT]
    {
        values
    }
}

fn as_numbers(values: &[f64]) -> Vec<Value> {
    values.iter().map(|v| json!(v)).collect()
}

fn as_strings(values: &[f64], padded: bool) -> Vec<Value> {
    values
        .iter()
        .map(|v| match padded {
            true => json!(format!("  {}\t", v)),
            false => json!(v.to_string()),
        })
        .collect()
}

// --- Distribution and ranking ---

proptest! {
    #[test]
    fn distribution_is_valid_and_argmax_matches(
        values in feature_values(),
        top_k in 0usize..12,
    ) {
        let predictor = HeuristicPredictor::with_attributor(RandomAttributor::new());
        let result = classify(&predictor, &as_numbers(&values), top_k).unwrap();
        let p = result.probabilities;

        for value in p.to_array() {
            prop_assert!((0.0..=1.0).contains(&value), "{:?}", p);
        }
        prop_assert!((p.sum() - 1.0).abs() < 1e-9);

        let max = p.to_array().into_iter().fold(f64::MIN, f64::max);
        prop_assert_eq!(p.get(result.predicted_class), max);
    }

    #[test]
    fn top_features_are_ranked_and_bounded(
        values in feature_values(),
        top_k in 0usize..12,
        seed in any::<u64>(),
    ) {
        let predictor = HeuristicPredictor::with_attributor(RandomAttributor::with_seed(seed));
        let result = classify(&predictor, &as_numbers(&values), top_k).unwrap();

        prop_assert_eq!(result.top_features.len(), top_k.min(FEATURE_COUNT));
        for pair in result.top_features.windows(2) {
            prop_assert!(pair[0].importance.abs() >= pair[1].importance.abs());
        }
        for entry in &result.top_features {
            prop_assert!(entry.importance > -1.0 && entry.importance < 1.0);
            let index = koi_classifier::engine::feature_index(entry.feature).unwrap();
            prop_assert_eq!(entry.value.to_bits(), values[index].to_bits());
        }
    }
}

// --- Input encodings ---

proptest! {
    #[test]
    fn string_and_number_encodings_agree(
        values in feature_values(),
        padded in any::<bool>(),
    ) {
        let predictor = HeuristicPredictor::new();
        let numbers = classify(&predictor, &as_numbers(&values), 0).unwrap();
        let strings = classify(&predictor, &as_strings(&values, padded), 0).unwrap();

        prop_assert_eq!(numbers.predicted_class, strings.predicted_class);
        prop_assert_eq!(
            numbers.probabilities.to_array().map(f64::to_bits),
            strings.probabilities.to_array().map(f64::to_bits)
        );
    }

    #[test]
    fn wrong_length_is_shape_error(
        len in (0usize..24).prop_filter("feature count", |n| *n != FEATURE_COUNT),
        value in feature_value(),
    ) {
        let raw = vec![json!(value); len];
        let err = classify(&HeuristicPredictor::new(), &raw, 3).unwrap_err();
        prop_assert_eq!(
            err,
            EngineError::Validation(ValidationError::Shape { expected: FEATURE_COUNT, actual: len })
        );
    }
}

// --- Rule table ---

proptest! {
    #[test]
    fn candidate_is_never_predicted(values in feature_values()) {
        let result = classify(&HeuristicPredictor::new(), &as_numbers(&values), 3).unwrap();
        prop_assert_ne!(result.predicted_class, ClassLabel::Candidate);
    }

    #[test]
    fn confirmed_only_inside_window_without_penalties(
        mut values in feature_values(),
        period in boundary_value(),
        prad in boundary_value(),
        teq in boundary_value(),
    ) {
        values[0] = period;
        values[1] = prad;
        values[4] = teq;

        let habitable = prad > HABITABLE_PRAD_MIN
            && prad < HABITABLE_PRAD_MAX
            && teq > HABITABLE_TEQ_MIN
            && teq < HABITABLE_TEQ_MAX;
        let penalized = prad > OVERSIZED_PRAD || period < SHORT_PERIOD_DAYS;
        let expected = match habitable && !penalized {
            true => ClassLabel::Confirmed,
            false => ClassLabel::FalsePositive,
        };

        let result = classify(&HeuristicPredictor::new(), &as_numbers(&values), 0).unwrap();
        prop_assert_eq!(result.predicted_class, expected);
    }
}
