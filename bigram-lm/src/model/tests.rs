//! Tests for the softmax predictor.

use crate::model::{softmax, BigramModel, ModelError, Predictor};

fn assert_distribution(row: &[f64]) {
    assert!(row.iter().all(|&p| p >= 0.0), "negative probability in {row:?}");
    let sum: f64 = row.iter().sum();
    assert!((sum - 1.0).abs() < 1e-5, "row sums to {sum}");
}

#[test]
fn softmax_matches_hand_computation() {
    let p = softmax(&[0.0, (2.0f64).ln()]);
    assert!((p[0] - 1.0 / 3.0).abs() < 1e-12);
    assert!((p[1] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn softmax_survives_huge_logits() {
    let p = softmax(&[1000.0, 1000.0, -1000.0]);
    assert_distribution(&p);
    assert!((p[0] - 0.5).abs() < 1e-12);
    assert_eq!(p[2], 0.0);
}

#[test]
fn every_predicted_row_is_a_distribution() {
    let model = BigramModel::seeded(5, 7);
    let rows = model.predict(&[0, 1, 2, 3, 4, 0]).unwrap();
    assert_eq!(rows.len(), 6);
    for row in &rows {
        assert_eq!(row.len(), 5);
        assert_distribution(row);
    }
    assert_eq!(rows[0], rows[5]);
}

#[test]
fn extreme_weights_still_give_distributions() {
    let weights = vec![300.0, -300.0, 0.0, 1e-9, -1e-9, 0.0, 700.0, 700.0, -700.0];
    let model = BigramModel::from_weights(3, weights).unwrap();
    for i in 0..3 {
        assert_distribution(&model.predict_row(i).unwrap());
    }
}

#[test]
fn predict_row_equals_one_hot_times_matrix() {
    let model = BigramModel::seeded(4, 11);
    let w = model.weights();
    for prev in 0..4 {
        let logits: Vec<f64> = (0..4)
            .map(|c| (0..4).map(|k| if k == prev { w[k * 4 + c] } else { 0.0 }).sum())
            .collect();
        let expected = softmax(&logits);
        let got = model.predict_row(prev).unwrap();
        for (a, b) in got.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}

#[test]
fn seeded_init_is_reproducible() {
    let a = BigramModel::seeded(6, 2_147_483_647);
    let b = BigramModel::seeded(6, 2_147_483_647);
    let c = BigramModel::seeded(6, 1);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.weights().len(), 36);
}

#[test]
fn out_of_range_index_is_an_error() {
    let model = BigramModel::seeded(3, 0);
    assert_eq!(
        model.predict_row(3).unwrap_err(),
        ModelError::IndexOutOfRange {
            index: 3,
            vocab_size: 3
        }
    );
    assert!(model.predict(&[0, 5]).is_err());
}

#[test]
fn from_weights_validates_shape_and_values() {
    assert_eq!(
        BigramModel::from_weights(2, vec![0.0; 3]).unwrap_err(),
        ModelError::WeightShape {
            expected: 4,
            got: 3
        }
    );
    assert_eq!(
        BigramModel::from_weights(2, vec![0.0, f64::NAN, 0.0, 0.0]).unwrap_err(),
        ModelError::NonFiniteWeight { position: 1 }
    );
}

#[test]
fn apply_gradient_moves_against_the_gradient() {
    let mut model = BigramModel::from_weights(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    model.apply_gradient(&[0.1, 0.0, -0.2, 0.5], 10.0);
    let expected = [0.0, 2.0, 5.0, -1.0];
    for (w, e) in model.weights().iter().zip(expected) {
        assert!((w - e).abs() < 1e-12);
    }
}
