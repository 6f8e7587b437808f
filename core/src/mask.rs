use rand::Rng;

// Boolean prediction grid, `mask[row][col]`
pub type Mask = Vec<Vec<bool>>;

// Offset range of the disc center around the grid center, half-open
const CENTER_JITTER: (i64, i64) = (-10, 10);
// Radius range in cells, half-open
const RADIUS_RANGE: (i64, i64) = (15, 25);
// Amplitude and period of the boundary ripple of the warped disc
const WARP_AMPLITUDE: f64 = 3.0;
const WARP_PERIOD: f64 = 5.0;

// A disc-shaped synthetic prediction, in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscMask {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
}

impl DiscMask {
    // Center jittered around the grid center, then radius
    pub fn sample<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let center_x = (width / 2) as i64 + rng.gen_range(CENTER_JITTER.0..CENTER_JITTER.1);
        let center_y = (height / 2) as i64 + rng.gen_range(CENTER_JITTER.0..CENTER_JITTER.1);
        let radius = rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1);
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    fn distance(&self, x: usize, y: usize) -> f64 {
        let dx = (x as i64 - self.center_x) as f64;
        let dy = (y as i64 - self.center_y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    // Cells strictly inside the circle
    pub fn disc(&self, width: usize, height: usize) -> Mask {
        let r = self.radius as f64;
        (0..height)
            .map(|y| (0..width).map(|x| self.distance(x, y) < r).collect())
            .collect()
    }

    // Same disc with a sinusoidal ripple on its boundary
    pub fn warped(&self, width: usize, height: usize) -> Mask {
        let r = self.radius as f64;
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let ripple = (x as f64 / WARP_PERIOD).sin() * WARP_AMPLITUDE
                            + (y as f64 / WARP_PERIOD).cos() * WARP_AMPLITUDE;
                        self.distance(x, y) + ripple < r
                    })
                    .collect()
            })
            .collect()
    }
}

// Fraction of set cells; 0 for an empty mask
pub fn coverage(mask: &Mask) -> f64 {
    let total: usize = mask.iter().map(|row| row.len()).sum();
    if total == 0 {
        return 0.0;
    }
    let set = mask.iter().flatten().filter(|&&b| b).count();
    set as f64 / total as f64
}
