use crate::value::Value;

/// Checks that every node's gradient is within `tolerance` of the expected one.
/// Panics with the offending index otherwise.
pub fn check_grads_near(values: &[Value], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        values.len(),
        expected_grads.len(),
        "Gradient count mismatch"
    );

    for (i, (v, e)) in values.iter().zip(expected_grads.iter()).enumerate() {
        let actual = v.grad();
        let diff = (actual - *e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}

/// Same as [`check_grads_near`] for forward values.
pub fn check_data_near(values: &[Value], expected_data: &[f64], tolerance: f64) {
    assert_eq!(values.len(), expected_data.len(), "Data length mismatch");

    for (i, (v, e)) in values.iter().zip(expected_data.iter()).enumerate() {
        let actual = v.data();
        let diff = (actual - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}
