use crate::utils::Field;

// Logistic function 1 / (1 + e^-x)
// Branches on the sign so exp() only ever sees a non-positive argument
// and cannot overflow.
#[inline]
pub fn sigmoid_scalar(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

// Elementwise logistic transform, same shape as the input
pub fn sigmoid(field: &Field) -> Field {
    field
        .iter()
        .map(|row| row.iter().map(|&v| sigmoid_scalar(v)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_zero_matrix() {
        let out = sigmoid(&vec![vec![0.0; 4]; 3]);
        assert_eq!(out, vec![vec![0.5; 4]; 3]);
    }

    #[test]
    fn sigmoid_open_interval() {
        for &x in &[-30.0, -5.0, -1e-3, 0.0, 1e-3, 5.0, 30.0] {
            let y = sigmoid_scalar(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({}) = {}", x, y);
        }
    }

    #[test]
    fn sigmoid_no_overflow() {
        // Saturates but stays finite
        let lo = sigmoid_scalar(-1000.0);
        let hi = sigmoid_scalar(1000.0);
        assert!(lo.is_finite() && lo >= 0.0);
        assert!(hi.is_finite() && hi <= 1.0);
        assert!(sigmoid_scalar(f64::MIN).is_finite());
        assert!(sigmoid_scalar(f64::MAX).is_finite());
    }

    #[test]
    fn sigmoid_monotonic() {
        let xs: Vec<f64> = (-200..=200).map(|i| i as f64 * 0.1).collect();
        for pair in xs.windows(2) {
            assert!(sigmoid_scalar(pair[0]) < sigmoid_scalar(pair[1]));
        }
    }

    #[test]
    fn sigmoid_symmetry() {
        for &x in &[0.25, 1.0, 3.0, 10.0] {
            assert!((sigmoid_scalar(x) + sigmoid_scalar(-x) - 1.0).abs() < 1e-12);
        }
    }
}
