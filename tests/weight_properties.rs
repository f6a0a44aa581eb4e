//! Property tests for AHP weight derivation.

use proptest::prelude::*;

use ahp_engine::domain::ahp::{AhpCalculator, AhpSettings, RandomIndexPolicy, WeightMethod};

/// Saaty's 1-9 scale and its reciprocals.
const SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

fn criteria(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("C{}", i)).collect()
}

/// Rows with the given upper triangle, `fill` below the diagonal.
fn rows(n: usize, upper: &[f64], fill: &[f64]) -> Vec<Vec<Option<f64>>> {
    let mut rows = vec![vec![None; n]; n];
    let mut k = 0;
    for i in 0..n {
        rows[i][i] = Some(1.0);
        for j in (i + 1)..n {
            rows[i][j] = Some(upper[k]);
            rows[j][i] = fill.get(k).copied();
            k += 1;
        }
    }
    rows
}

fn judgments() -> impl Strategy<Value = (usize, Vec<f64>, Vec<f64>)> {
    (2usize..=9).prop_flat_map(|n| {
        let pairs = n * (n - 1) / 2;
        (
            Just(n),
            prop::collection::vec(prop::sample::select(SCALE.to_vec()), pairs),
            prop::collection::vec(0.01f64..100.0, pairs),
        )
    })
}

proptest! {
    #[test]
    fn weights_are_positive_and_sum_to_one((n, upper, _) in judgments()) {
        let outcome = AhpCalculator::default()
            .calculate(criteria(n), &rows(n, &upper, &[]))
            .unwrap();

        prop_assert_eq!(outcome.weights.len(), n);
        prop_assert!((outcome.weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(outcome.weights.iter().all(|w| *w > 0.0));
    }

    #[test]
    fn consistency_index_is_never_negative((n, upper, _) in judgments()) {
        let outcome = AhpCalculator::default()
            .calculate(criteria(n), &rows(n, &upper, &[]))
            .unwrap();

        prop_assert!(outcome.consistency.lambda_max >= n as f64 - 1e-9);
        prop_assert!(outcome.consistency.consistency_index >= -1e-9);
    }

    #[test]
    fn lower_triangle_is_ignored((n, upper, fill) in judgments()) {
        let calculator = AhpCalculator::default();
        let honest = calculator.calculate(criteria(n), &rows(n, &upper, &[])).unwrap();
        let tampered = calculator.calculate(criteria(n), &rows(n, &upper, &fill)).unwrap();

        prop_assert_eq!(honest, tampered);
    }

    #[test]
    fn two_criteria_are_always_consistent(value in prop::sample::select(SCALE.to_vec())) {
        let outcome = AhpCalculator::default()
            .calculate(criteria(2), &rows(2, &[value], &[]))
            .unwrap();

        prop_assert_eq!(outcome.consistency.consistency_ratio, 0.0);
        prop_assert!(outcome.consistency.is_consistent);
    }

    #[test]
    fn eigenvector_weights_sum_to_one(
        n in 10usize..=14,
        seed in prop::collection::vec(prop::sample::select(SCALE.to_vec()), 91)
    ) {
        let calculator = AhpCalculator::new(AhpSettings {
            random_index_policy: RandomIndexPolicy::UseLargest,
            weight_method: WeightMethod::Eigenvector,
            ..AhpSettings::default()
        });
        let upper: Vec<f64> = seed.iter().cycle().take(n * (n - 1) / 2).copied().collect();
        let outcome = calculator.calculate(criteria(n), &rows(n, &upper, &[])).unwrap();

        prop_assert!((outcome.weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(outcome.weights.iter().all(|w| *w > 0.0));
    }
}

#[test]
fn indifferent_matrices_give_uniform_weights() {
    for n in 2..=10 {
        let upper = vec![1.0; n * (n - 1) / 2];
        let outcome = AhpCalculator::default()
            .calculate(criteria(n), &rows(n, &upper, &[]))
            .unwrap();

        for w in &outcome.weights {
            assert!((w - 1.0 / n as f64).abs() < 1e-12);
        }
        assert!(outcome.consistency.is_consistent);
    }
}
