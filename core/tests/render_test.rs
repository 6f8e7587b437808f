use landscape::{
    AdaptationPanel, ColorScale, LandscapeParams, RenderOptions, generate, render_field,
    render_mask, save_png,
};

#[test]
fn png_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let field = generate(40, 30, 3, 42).unwrap();
    let img = render_field(&field, &RenderOptions::default()).unwrap();
    let path = dir.path().join("landscape.png");
    save_png(&img, &path).unwrap();

    let back = image::open(&path).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (40, 30));
    assert_eq!(back, img);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let img = render_field(&vec![vec![0.0, 1.0]], &RenderOptions::default()).unwrap();
    assert!(save_png(&img, dir.path().join("no/such/dir/x.png")).is_err());
}

#[test]
fn panel_tiles_render() {
    let params = LandscapeParams {
        width: 24,
        height: 24,
        complexity: 3,
        seed: 0,
    };
    let panel = AdaptationPanel::build(&["Train", "Sofa"], &params, 42).unwrap();
    let opts = RenderOptions {
        color_scale: ColorScale::Viridis,
        z_range: Some((-20.0, 5.0)),
        hillshade: true,
        scale: 2,
    };
    for row in &panel.rows {
        let logits = render_field(&row.adaptation.previous, &opts).unwrap();
        assert_eq!(logits.dimensions(), (48, 48));
        let mask = render_mask(&row.current_mask, row.color, 2).unwrap();
        assert_eq!(mask.dimensions(), (48, 48));
    }
}
