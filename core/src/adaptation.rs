use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{LandscapeError, Result};
use crate::sigmoid::sigmoid;
use crate::utils::{Field, zip_with};

// Noise level separating the previous-step logits from the base field
pub const PREVIOUS_STEP_STD: f64 = 2.0;

// Add N(0, std) to every cell, drawn in row-major order
pub fn perturb<R: Rng + ?Sized>(field: &Field, std: f64, rng: &mut R) -> Result<Field> {
    let noise = Normal::new(0.0, std).map_err(|e| {
        LandscapeError::InvalidParameter(format!("perturbation std {std}: {e}"))
    })?;
    Ok(field
        .iter()
        .map(|row| row.iter().map(|&v| v + noise.sample(rng)).collect())
        .collect())
}

// a - b, elementwise
pub fn residual(a: &Field, b: &Field) -> Result<Field> {
    zip_with(a, b, |x, y| x - y)
}

// a + b, elementwise
pub fn combine(a: &Field, b: &Field) -> Result<Field> {
    zip_with(a, b, |x, y| x + y)
}

// Background logits before and after one adaptation step
#[derive(Debug, Clone)]
pub struct Adaptation {
    // logits at step t-1: base plus noise
    pub previous: Field,
    // correction learned at step t: base - previous
    pub adaptation: Field,
    // logits at step t: previous + adaptation
    pub current: Field,
    // sigmoid(current)
    pub probability: Field,
}

impl Adaptation {
    pub fn derive<R: Rng + ?Sized>(base: &Field, rng: &mut R) -> Result<Self> {
        let previous = perturb(base, PREVIOUS_STEP_STD, rng)?;
        let adaptation = residual(base, &previous)?;
        let current = combine(&previous, &adaptation)?;
        let probability = sigmoid(&current);
        Ok(Self {
            previous,
            adaptation,
            current,
            probability,
        })
    }
}
