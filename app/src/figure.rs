use image::RgbImage;
use landscape::utils::{flatten2, shape};
use landscape::{
    AdaptationPanel, Field, LandscapeParams, RenderOptions, Result, compose_grid, render_field,
    render_mask, sigmoid,
};
use serde::{Deserialize, Serialize};

// Value ranges shared by every tile of a column so rows compare directly
pub const LOGIT_RANGE: (f64, f64) = (-20.0, 5.0);
pub const PROBABILITY_RANGE: (f64, f64) = (0.0, 1.0);
pub const SINGLE_RANGE: (f64, f64) = (-20.0, 0.0);

// previous mask, previous logits, adaptation, sigmoid, current mask
pub const PANEL_COLUMNS: usize = 5;
pub const TILE_GAP: u32 = 4;

pub fn single_file_name(seed: u64) -> String {
    format!("single_loss_landscape_seed{seed}.png")
}

pub const FIGURE_FILE_NAME: &str = "loss_landscape_visualization.png";

// One landscape, optionally squashed through the sigmoid
// Without an explicit z range the fixed SINGLE_RANGE / PROBABILITY_RANGE is used.
pub fn render_single(
    field: &Field,
    apply_sigmoid: bool,
    opts: &RenderOptions,
) -> Result<RgbImage> {
    let (data, range) = if apply_sigmoid {
        (sigmoid(field), PROBABILITY_RANGE)
    } else {
        (field.clone(), SINGLE_RANGE)
    };
    let opts = RenderOptions {
        z_range: opts.z_range.or(Some(range)),
        ..*opts
    };
    render_field(&data, &opts)
}

// Full adaptation figure: one row per category, PANEL_COLUMNS tiles per row
// The adaptation residual is small next to the logits, so each of its tiles
// is colored by its own min/max.
pub fn render_panel(panel: &AdaptationPanel, opts: &RenderOptions) -> Result<RgbImage> {
    let logits = RenderOptions {
        z_range: Some(LOGIT_RANGE),
        ..*opts
    };
    let residual = RenderOptions {
        z_range: None,
        ..*opts
    };
    let probability = RenderOptions {
        z_range: Some(PROBABILITY_RANGE),
        ..*opts
    };

    let mut tiles = Vec::with_capacity(panel.rows.len() * PANEL_COLUMNS);
    for row in &panel.rows {
        tiles.push(render_mask(&row.previous_mask, row.color, opts.scale)?);
        tiles.push(render_field(&row.adaptation.previous, &logits)?);
        tiles.push(render_field(&row.adaptation.adaptation, &residual)?);
        tiles.push(render_field(&row.adaptation.probability, &probability)?);
        tiles.push(render_mask(&row.current_mask, row.color, opts.scale)?);
    }
    compose_grid(&tiles, PANEL_COLUMNS, TILE_GAP)
}

// JSON form of a generated field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDump {
    pub params: LandscapeParams,
    pub sigmoid: bool,
    pub width: usize,
    pub height: usize,
    // row-major, length = width × height
    pub values: Vec<f64>,
}

impl FieldDump {
    pub fn new(params: LandscapeParams, sigmoid: bool, field: &Field) -> Self {
        let (height, width) = shape(field);
        Self {
            params,
            sigmoid,
            width,
            height,
            values: flatten2(field),
        }
    }
}
