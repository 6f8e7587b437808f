// Generates and saves three 100×100 landscape images:
// Raw landscape in grayscale
// Sigmoid of the landscape
// Hillshaded Spectral rendering

use landscape::{ColorScale, RenderOptions, generate, render_field, save_png, sigmoid};

fn main() -> landscape::Result<()> {
    let field = generate(100, 100, 3, 42)?;

    // 1) Raw, own min/max
    let gray = RenderOptions {
        color_scale: ColorScale::Gray,
        hillshade: false,
        ..Default::default()
    };
    save_png(&render_field(&field, &gray)?, "landscape_gray.png")?;

    // 2) Sigmoid, fixed [0, 1]
    let probs = RenderOptions {
        z_range: Some((0.0, 1.0)),
        ..gray
    };
    save_png(&render_field(&sigmoid(&field), &probs)?, "landscape_sigmoid.png")?;

    // 3) Spectral + hillshade, 4× upscaled
    let shaded = RenderOptions {
        z_range: Some((-20.0, 0.0)),
        scale: 4,
        ..Default::default()
    };
    save_png(&render_field(&field, &shaded)?, "landscape_shaded.png")?;
    Ok(())
}
