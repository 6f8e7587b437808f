use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::adaptation::Adaptation;
use crate::error::{LandscapeError, Result};
use crate::landscape::{LandscapeParams, LossLandscape};
use crate::mask::{DiscMask, Mask};
use crate::utils::Field;

// Row seeds are drawn from [0, ROW_SEED_LIMIT)
pub const ROW_SEED_LIMIT: u64 = 1000;

// Mask colors, cycled by row
pub const ROW_COLORS: [[f32; 3]; 4] = [
    [0.7, 0.3, 0.7],
    [0.3, 0.7, 0.7],
    [0.8, 0.2, 0.3],
    [0.2, 0.8, 0.3],
];

pub const DEFAULT_CATEGORIES: [&str; 4] = ["Train", "Sheep", "Potted Plant", "Sofa"];

// Everything drawn for one category
#[derive(Debug, Clone)]
pub struct AdaptationRow {
    pub category: String,
    pub seed: u64,
    pub base: Field,
    pub adaptation: Adaptation,
    pub previous_mask: Mask,
    pub current_mask: Mask,
    pub color: [f32; 3],
}

impl AdaptationRow {
    // One generator seeded with `seed` draws, in order: the base field,
    // the adaptation noise, the mask disc. The base equals generate(.., seed).
    pub fn build(
        category: &str,
        params: &LandscapeParams,
        seed: u64,
        color: [f32; 3],
    ) -> Result<Self> {
        let landscape = LossLandscape::new(params.width, params.height, params.complexity, seed)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let base = landscape.generate_with_rng(&mut rng)?;
        let adaptation = Adaptation::derive(&base, &mut rng)?;
        let disc = DiscMask::sample(params.width, params.height, &mut rng);
        debug!("row {category:?}: seed {seed}, {disc:?}");

        Ok(Self {
            category: category.to_string(),
            seed,
            previous_mask: disc.disc(params.width, params.height),
            current_mask: disc.warped(params.width, params.height),
            base,
            adaptation,
            color,
        })
    }
}

// One row per category, every row reproducible from the master seed
#[derive(Debug, Clone)]
pub struct AdaptationPanel {
    pub rows: Vec<AdaptationRow>,
}

impl AdaptationPanel {
    pub fn build<S: AsRef<str>>(
        categories: &[S],
        params: &LandscapeParams,
        master_seed: u64,
    ) -> Result<Self> {
        if categories.is_empty() {
            return Err(LandscapeError::InvalidParameter(
                "panel needs at least one category".into(),
            ));
        }
        // Validate once up front so no row is built for a bad config
        LossLandscape::from_params(params)?;

        let mut master = ChaCha8Rng::seed_from_u64(master_seed);
        let seeds: Vec<u64> = categories
            .iter()
            .map(|_| master.gen_range(0..ROW_SEED_LIMIT))
            .collect();

        let rows = categories
            .iter()
            .zip(seeds)
            .enumerate()
            .map(|(i, (category, seed))| {
                AdaptationRow::build(
                    category.as_ref(),
                    params,
                    seed,
                    ROW_COLORS[i % ROW_COLORS.len()],
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }
}
