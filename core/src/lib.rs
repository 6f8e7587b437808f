// landscape holds the synthetic loss-surface generator, its transforms and rendering
pub mod adaptation;
pub mod error;
pub mod gaussian;
pub mod landscape;
pub mod mask;
pub mod panel;
pub mod render;
pub mod sigmoid;
pub mod utils;

pub use adaptation::Adaptation;
pub use error::{LandscapeError, Result};
pub use gaussian::GaussianBump;
pub use landscape::{LandscapeParams, LossLandscape, generate};
pub use mask::{DiscMask, Mask};
pub use panel::{AdaptationPanel, AdaptationRow};
pub use render::{ColorScale, RenderOptions, compose_grid, render_field, render_mask, save_png};
pub use sigmoid::sigmoid;
pub use utils::{Field, flatten2};
