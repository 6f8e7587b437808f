use crate::error::{LandscapeError, Result};

// 2D scalar field: row‐major Vec<Vec<f64>> of size height×width
// access as `field[row][col]`.
pub type Field = Vec<Vec<f64>>;

// `n` evenly spaced samples over [start, end], endpoints included
// A single sample sits on `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

// (height, width) of a field; ragged rows are not checked here
pub fn shape(field: &Field) -> (usize, usize) {
    let h = field.len();
    let w = field.first().map_or(0, |row| row.len());
    (h, w)
}

// Fail unless `field` is exactly `expected` = (height, width), every row included
pub fn check_shape(field: &Field, expected: (usize, usize)) -> Result<()> {
    let found = shape(field);
    if found != expected || field.iter().any(|row| row.len() != expected.1) {
        return Err(LandscapeError::ShapeMismatch { expected, found });
    }
    Ok(())
}

// Smallest and largest value of the field
// Returns None for an empty field.
pub fn min_max(field: &Field) -> Option<(f64, f64)> {
    let mut iter = field.iter().flat_map(|row| row.iter().copied());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

// flatten a field (row‐major) into a single Vec<f64>
// For handing to image buffers and JSON dumps
pub fn flatten2(field: &Field) -> Vec<f64> {
    field.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Elementwise combination of two equally shaped fields
pub fn zip_with(a: &Field, b: &Field, f: impl Fn(f64, f64) -> f64) -> Result<Field> {
    check_shape(b, shape(a))?;
    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(ra, rb)| ra.iter().zip(rb.iter()).map(|(&x, &y)| f(x, y)).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let xs = linspace(-5.0, 5.0, 11);
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[10], 5.0);
        assert!((xs[5]).abs() < 1e-12);
    }

    #[test]
    fn linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(-5.0, 5.0, 1), vec![-5.0]);
    }

    #[test]
    fn min_max_and_flatten() {
        let f = vec![vec![1.0, -2.0], vec![3.5, 0.0]];
        assert_eq!(min_max(&f), Some((-2.0, 3.5)));
        assert_eq!(flatten2(&f), vec![1.0, -2.0, 3.5, 0.0]);
        assert_eq!(min_max(&Vec::new()), None);
    }

    #[test]
    fn check_shape_rejects_ragged() {
        let f = vec![vec![0.0, 0.0], vec![0.0]];
        assert!(check_shape(&f, (2, 2)).is_err());
        assert!(check_shape(&vec![vec![0.0; 3]; 2], (2, 3)).is_ok());
    }

    #[test]
    fn zip_with_mismatch() {
        let a = vec![vec![1.0; 3]; 2];
        let b = vec![vec![1.0; 2]; 3];
        match zip_with(&a, &b, |x, y| x + y) {
            Err(LandscapeError::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, (2, 3));
                assert_eq!(found, (3, 2));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
