use std::fs;
use std::path::Path;

use anyhow::Context;
use landscape::panel::DEFAULT_CATEGORIES;
use landscape::{LandscapeParams, RenderOptions};
use log::info;
use serde::{Deserialize, Serialize};

// Seed of the master generator that hands out per-row seeds
pub const DEFAULT_FIGURE_SEED: u64 = 42;

// Defaults of the standalone single-landscape image
pub const SINGLE_DEFAULTS: LandscapeParams = LandscapeParams {
    width: 100,
    height: 100,
    complexity: 3,
    seed: 123,
};

// Everything the renderer reads from a JSON config file
// Missing keys fall back to the defaults below; unknown keys are an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    // figure rows and `dump`
    pub landscape: LandscapeParams,
    // `single`
    pub single: LandscapeParams,
    pub render: RenderOptions,
    pub categories: Vec<String>,
    pub figure_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            landscape: LandscapeParams::default(),
            single: SINGLE_DEFAULTS,
            render: RenderOptions {
                scale: 4,
                ..RenderOptions::default()
            },
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            figure_seed: DEFAULT_FIGURE_SEED,
        }
    }
}

impl Config {
    // A full config document, or a bare `LandscapeParams` document that
    // then applies to every subcommand.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let full_err = match serde_json::from_str::<Config>(text) {
            Ok(cfg) => return Ok(cfg),
            Err(e) => e,
        };
        match serde_json::from_str::<LandscapeParams>(text) {
            Ok(params) => Ok(Self {
                landscape: params,
                single: params,
                ..Self::default()
            }),
            Err(_) => Err(full_err.into()),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg =
            Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    // The file if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
