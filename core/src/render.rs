use std::path::Path;

use image::{Rgb, RgbImage, imageops};
use log::{info, warn};
use palette::{Gradient, LinSrgb};
use serde::{Deserialize, Serialize};

use crate::error::{LandscapeError, Result};
use crate::mask::Mask;
use crate::utils::{Field, check_shape, min_max, shape};

// Light direction for hillshading
const LIGHT_AZIMUTH: f64 = std::f64::consts::FRAC_PI_4; // 45°
const LIGHT_ALTITUDE: f64 = std::f64::consts::FRAC_PI_4; // 45°

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScale {
    // red → yellow → blue, diverging
    #[default]
    Spectral,
    // purple → teal → yellow, perceptually uniform
    Viridis,
    Gray,
}

impl ColorScale {
    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::Spectral => &[
                [158, 1, 66],
                [213, 62, 79],
                [244, 109, 67],
                [253, 174, 97],
                [254, 224, 139],
                [255, 255, 191],
                [230, 245, 152],
                [171, 221, 164],
                [102, 194, 165],
                [50, 136, 189],
                [94, 79, 162],
            ],
            ColorScale::Viridis => &[
                [68, 1, 84],
                [59, 82, 139],
                [33, 145, 140],
                [94, 201, 98],
                [253, 231, 37],
            ],
            ColorScale::Gray => &[[0, 0, 0], [255, 255, 255]],
        }
    }

    // Evenly spaced stops over [0, 1]
    pub fn gradient(&self) -> Gradient<LinSrgb> {
        let stops = self.stops();
        let last = (stops.len() - 1) as f32;
        Gradient::with_domain(
            stops
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    (
                        i as f32 / last,
                        LinSrgb::new(
                            c[0] as f32 / 255.0,
                            c[1] as f32 / 255.0,
                            c[2] as f32 / 255.0,
                        ),
                    )
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub color_scale: ColorScale,
    // Fixed (low, high) value range; None uses the field's own min/max
    pub z_range: Option<(f64, f64)>,
    pub hillshade: bool,
    // Nearest-neighbour upscale factor, >= 1
    pub scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color_scale: ColorScale::Spectral,
            z_range: None,
            hillshade: true,
            scale: 1,
        }
    }
}

// Lambertian shading of the field lit from LIGHT_AZIMUTH / LIGHT_ALTITUDE
// Central differences, clamped at the borders.
pub fn hillshade(field: &Field, z_scale: f64) -> Field {
    let (h, w) = shape(field);
    let (sin_alt, cos_alt) = LIGHT_ALTITUDE.sin_cos();
    let lx = LIGHT_AZIMUTH.cos() * cos_alt;
    let ly = LIGHT_AZIMUTH.sin() * cos_alt;
    let lz = sin_alt;

    let mut shade = vec![vec![0.0; w]; h];
    for y in 0..h {
        for x in 0..w {
            let (x0, x1) = (x.saturating_sub(1), (x + 1).min(w - 1));
            let (y0, y1) = (y.saturating_sub(1), (y + 1).min(h - 1));
            let dzdx = if x1 > x0 {
                (field[y][x1] - field[y][x0]) / (x1 - x0) as f64 * z_scale
            } else {
                0.0
            };
            let dzdy = if y1 > y0 {
                (field[y1][x] - field[y0][x]) / (y1 - y0) as f64 * z_scale
            } else {
                0.0
            };
            // Surface normal
            let (nx, ny, nz) = (-dzdx, -dzdy, 1.0);
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            shade[y][x] = ((nx * lx + ny * ly + nz * lz) / len).max(0.0);
        }
    }
    shade
}

// Colormapped raster of a field, one pixel per cell before scaling
pub fn render_field(field: &Field, opts: &RenderOptions) -> Result<RgbImage> {
    let (h, w) = shape(field);
    if h == 0 || w == 0 {
        return Err(LandscapeError::InvalidDimension {
            width: w,
            height: h,
        });
    }
    check_shape(field, (h, w))?;
    if opts.scale == 0 {
        return Err(LandscapeError::InvalidParameter(
            "render scale must be >= 1".into(),
        ));
    }

    let (lo, hi) = match opts.z_range {
        Some(r) => r,
        // non-empty, checked above
        None => min_max(field).unwrap_or((0.0, 0.0)),
    };
    let span = hi - lo;
    let degenerate = span.is_nan() || span.abs() <= f64::EPSILON;
    if degenerate {
        warn!("degenerate value range [{lo}, {hi}], rendering mid color");
    }

    let gradient = opts.color_scale.gradient();
    let shade = opts.hillshade.then(|| hillshade(field, 1.0));

    let mut img = RgbImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let norm = if degenerate {
                0.5
            } else {
                ((field[y][x] - lo) / span).clamp(0.0, 1.0)
            };
            let col: LinSrgb = gradient.get(norm as f32);
            let rgb = col.into_format::<u8>();
            let light = shade
                .as_ref()
                .map_or(1.0, |s| (s[y][x] * 0.5 + 0.5).clamp(0.0, 1.0))
                as f32;
            img.put_pixel(
                x as u32,
                y as u32,
                Rgb([
                    (rgb.red as f32 * light) as u8,
                    (rgb.green as f32 * light) as u8,
                    (rgb.blue as f32 * light) as u8,
                ]),
            );
        }
    }

    Ok(upscale(img, opts.scale))
}

// Set cells in `color` (components in [0, 1]), others black
pub fn render_mask(mask: &Mask, color: [f32; 3], scale: u32) -> Result<RgbImage> {
    let h = mask.len();
    let w = mask.first().map_or(0, |row| row.len());
    if h == 0 || w == 0 {
        return Err(LandscapeError::InvalidDimension {
            width: w,
            height: h,
        });
    }
    if let Some(row) = mask.iter().find(|row| row.len() != w) {
        return Err(LandscapeError::ShapeMismatch {
            expected: (h, w),
            found: (h, row.len()),
        });
    }
    if scale == 0 {
        return Err(LandscapeError::InvalidParameter(
            "render scale must be >= 1".into(),
        ));
    }

    let fg = Rgb(color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8));
    let mut img = RgbImage::new(w as u32, h as u32);
    for (y, row) in mask.iter().enumerate() {
        for (x, &set) in row.iter().enumerate() {
            if set {
                img.put_pixel(x as u32, y as u32, fg);
            }
        }
    }
    Ok(upscale(img, scale))
}

fn upscale(img: RgbImage, scale: u32) -> RgbImage {
    if scale == 1 {
        return img;
    }
    let (w, h) = img.dimensions();
    imageops::resize(&img, w * scale, h * scale, imageops::FilterType::Nearest)
}

// Lay equally sized tiles out row by row on a white canvas
// `gap` pixels separate neighbouring tiles and pad the border.
pub fn compose_grid(tiles: &[RgbImage], columns: usize, gap: u32) -> Result<RgbImage> {
    let first = tiles
        .first()
        .ok_or_else(|| LandscapeError::InvalidParameter("no tiles to compose".into()))?;
    if columns == 0 {
        return Err(LandscapeError::InvalidParameter(
            "grid needs at least one column".into(),
        ));
    }
    let (tw, th) = first.dimensions();
    for tile in tiles {
        let (w, h) = tile.dimensions();
        if (w, h) != (tw, th) {
            return Err(LandscapeError::ShapeMismatch {
                expected: (th as usize, tw as usize),
                found: (h as usize, w as usize),
            });
        }
    }

    let cols = columns.min(tiles.len()) as u32;
    let rows = tiles.len().div_ceil(columns) as u32;
    let width = cols * tw + (cols + 1) * gap;
    let height = rows * th + (rows + 1) * gap;

    let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for (i, tile) in tiles.iter().enumerate() {
        let col = (i % columns) as u32;
        let row = (i / columns) as u32;
        let x = gap + col * (tw + gap);
        let y = gap + row * (th + gap);
        imageops::replace(&mut canvas, tile, x as i64, y as i64);
    }
    Ok(canvas)
}

pub fn save_png(img: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    img.save(path)?;
    info!("saved {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}
