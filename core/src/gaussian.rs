use rand::Rng;

use crate::utils::Field;

// Ranges the random components are drawn from
pub const CENTER_RANGE: (f64, f64) = (-4.0, 4.0);
pub const SPREAD_RANGE: (f64, f64) = (0.5, 2.0);
pub const AMPLITUDE_RANGE: (f64, f64) = (-15.0, 15.0);

// One anisotropic Gaussian bump
// Positive amplitude makes a hill, negative a basin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBump {
    pub center_x: f64,
    pub center_y: f64,
    pub spread_x: f64,
    pub spread_y: f64,
    pub amplitude: f64,
}

impl GaussianBump {
    // Draw a bump from `rng`.
    // Draw order is fixed: center_x, center_y, spread_x, spread_y, amplitude.
    // Changing it changes every seeded field.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let center_x = rng.gen_range(CENTER_RANGE.0..CENTER_RANGE.1);
        let center_y = rng.gen_range(CENTER_RANGE.0..CENTER_RANGE.1);
        let spread_x = rng.gen_range(SPREAD_RANGE.0..SPREAD_RANGE.1);
        let spread_y = rng.gen_range(SPREAD_RANGE.0..SPREAD_RANGE.1);
        let amplitude = rng.gen_range(AMPLITUDE_RANGE.0..AMPLITUDE_RANGE.1);
        Self {
            center_x,
            center_y,
            spread_x,
            spread_y,
            amplitude,
        }
    }

    // Height of the bump at (x, y)
    #[inline]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let ex = dx * dx / (2.0 * self.spread_x * self.spread_x);
        let ey = dy * dy / (2.0 * self.spread_y * self.spread_y);
        self.amplitude * (-(ex + ey)).exp()
    }

    // Accumulate the bump into `field`, sampled at the grid `xs` × `ys`
    // `field[row][col]` receives eval(xs[col], ys[row]).
    pub fn add_to(&self, field: &mut Field, xs: &[f64], ys: &[f64]) {
        for (row, &y) in field.iter_mut().zip(ys) {
            for (cell, &x) in row.iter_mut().zip(xs) {
                *cell += self.eval(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn sample_within_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let b = GaussianBump::sample(&mut rng);
            assert!(b.center_x >= -4.0 && b.center_x < 4.0);
            assert!(b.center_y >= -4.0 && b.center_y < 4.0);
            assert!(b.spread_x >= 0.5 && b.spread_x < 2.0);
            assert!(b.spread_y >= 0.5 && b.spread_y < 2.0);
            assert!(b.amplitude >= -15.0 && b.amplitude < 15.0);
        }
    }

    #[test]
    fn peak_at_center() {
        let b = GaussianBump {
            center_x: 1.0,
            center_y: -2.0,
            spread_x: 0.5,
            spread_y: 1.5,
            amplitude: 10.0,
        };
        assert!((b.eval(1.0, -2.0) - 10.0).abs() < 1e-12);
        assert!(b.eval(2.0, -2.0) < 10.0);
        // narrower along x than along y
        assert!(b.eval(2.0, -2.0) < b.eval(1.0, -1.0));
    }

    #[test]
    fn add_to_matches_eval() {
        let b = GaussianBump {
            center_x: 0.0,
            center_y: 0.0,
            spread_x: 1.0,
            spread_y: 1.0,
            amplitude: -3.0,
        };
        let xs = [-1.0, 0.0, 1.0];
        let ys = [0.0, 2.0];
        let mut field = vec![vec![1.0; 3]; 2];
        b.add_to(&mut field, &xs, &ys);
        assert!((field[0][1] - (1.0 - 3.0)).abs() < 1e-12);
        assert!((field[1][2] - (1.0 + b.eval(1.0, 2.0))).abs() < 1e-12);
    }
}
