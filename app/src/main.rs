use std::time::Instant;

use app::figure::{render_single, single_file_name};
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle};
use image::RgbImage;
use landscape::utils::min_max;
use landscape::{ColorScale, LandscapeParams, LossLandscape, RenderOptions, save_png};
use log::{error, info};

// Each cell is drawn as this many pixels
const PREVIEW_SCALE: u32 = 4;

struct LandscapeApp {
    // parameters
    width: usize,
    height: usize,
    complexity: i64,
    seed: u64,

    // display options
    apply_sigmoid: bool,
    hillshade: bool,
    color_scale: ColorScale,

    // generated texture
    texture: Option<TextureHandle>,
    // Store the last rendered image for saving
    last_image: Option<RgbImage>,
    last_seed: u64,

    // status line
    status_message: String,
}

impl Default for LandscapeApp {
    fn default() -> Self {
        let p = LandscapeParams::default();
        Self {
            width: p.width,
            height: p.height,
            complexity: p.complexity,
            seed: p.seed,
            apply_sigmoid: false,
            hillshade: true,
            color_scale: ColorScale::Spectral,
            texture: None,
            last_image: None,
            last_seed: p.seed,
            status_message: String::new(),
        }
    }
}

impl LandscapeApp {
    fn generate(&mut self, ctx: &egui::Context) {
        let start = Instant::now();
        let opts = RenderOptions {
            color_scale: self.color_scale,
            z_range: None,
            hillshade: self.hillshade,
            scale: PREVIEW_SCALE,
        };

        let result = LossLandscape::new(self.width, self.height, self.complexity, self.seed)
            .and_then(|l| l.generate())
            .and_then(|field| {
                let range = min_max(&field);
                render_single(&field, self.apply_sigmoid, &opts).map(|img| (img, range))
            });

        match result {
            Ok((img, range)) => {
                let size = [img.width() as usize, img.height() as usize];
                let color_image = ColorImage::from_rgb(size, img.as_raw());
                self.texture =
                    Some(ctx.load_texture("landscape", color_image, egui::TextureOptions::NEAREST));
                self.last_image = Some(img);
                self.last_seed = self.seed;
                let ms = start.elapsed().as_secs_f32() * 1000.0;
                let (lo, _) = range.unwrap_or((0.0, 0.0));
                self.status_message =
                    format!("Generated in {:.2} ms (seed {}, min {:.2})", ms, self.seed, lo);
            }
            Err(e) => {
                error!("generation failed: {e}");
                self.status_message = format!("Error: {e}");
            }
        }
        ctx.request_repaint();
    }

    fn save(&mut self) {
        let Some(img) = &self.last_image else {
            self.status_message = "Nothing to save yet".into();
            return;
        };
        let picked = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(single_file_name(self.last_seed))
            .save_file();
        let Some(path) = picked else {
            return;
        };
        match save_png(img, &path) {
            Ok(()) => {
                info!("viewer saved {}", path.display());
                self.status_message = format!("Saved {}", path.display());
            }
            Err(e) => {
                error!("save failed: {e}");
                self.status_message = format!("Save error: {e}");
            }
        }
    }
}

impl App for LandscapeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Loss Landscape");
            ui.separator();

            ui.label("Width");
            ui.add(egui::Slider::new(&mut self.width, 8..=256));
            ui.label("Height");
            ui.add(egui::Slider::new(&mut self.height, 8..=256));

            ui.label("Complexity (Gaussian components)");
            ui.add(egui::Slider::new(&mut self.complexity, 0..=20));

            ui.label("Seed");
            ui.add(egui::DragValue::new(&mut self.seed).speed(1.0));

            ui.separator();

            ui.label("Color Scale");
            egui::ComboBox::from_label("Colormap")
                .selected_text(format!("{:?}", self.color_scale))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.color_scale, ColorScale::Spectral, "Spectral");
                    ui.selectable_value(&mut self.color_scale, ColorScale::Viridis, "Viridis");
                    ui.selectable_value(&mut self.color_scale, ColorScale::Gray, "Gray");
                });
            ui.checkbox(&mut self.apply_sigmoid, "Apply Sigmoid");
            ui.checkbox(&mut self.hillshade, "Hillshade");

            ui.separator();

            if ui.button("Generate Landscape").clicked() {
                self.generate(ctx);
            }

            if ui.button("Save PNG…").clicked() {
                self.save();
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.texture {
                let available = ui.available_size();
                ui.image((tex.id(), available));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Generate” to start");
                });
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Loss Landscape Viewer",
        opts,
        Box::new(|_cc| Ok(Box::new(LandscapeApp::default()))),
    )
}
