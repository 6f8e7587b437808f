use criterion::{Criterion, criterion_group, criterion_main};
use landscape::{
    AdaptationPanel, LandscapeParams, LossLandscape, RenderOptions, generate, render_field,
    sigmoid,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SIZE: usize = 256;
const SEED: u64 = 2025;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate 256x256, complexity 3", |b| {
        b.iter(|| generate(black_box(SIZE), black_box(SIZE), 3, SEED).unwrap())
    });
}

fn bench_generate_complex(c: &mut Criterion) {
    c.bench_function("generate 256x256, complexity 20", |b| {
        b.iter(|| generate(black_box(SIZE), black_box(SIZE), 20, SEED).unwrap())
    });
}

fn bench_generate_shared_rng(c: &mut Criterion) {
    let landscape = LossLandscape::new(SIZE, SIZE, 3, SEED).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    c.bench_function("generate 256x256 with caller rng", |b| {
        b.iter(|| landscape.generate_with_rng(&mut rng).unwrap())
    });
}

fn bench_sigmoid(c: &mut Criterion) {
    let field = generate(SIZE, SIZE, 3, SEED).unwrap();
    c.bench_function("sigmoid 256x256", |b| b.iter(|| sigmoid(black_box(&field))));
}

fn bench_render(c: &mut Criterion) {
    let field = generate(SIZE, SIZE, 3, SEED).unwrap();
    let opts = RenderOptions::default();
    c.bench_function("hillshaded render 256x256", |b| {
        b.iter(|| render_field(black_box(&field), &opts).unwrap())
    });
}

fn bench_panel(c: &mut Criterion) {
    let params = LandscapeParams::default();
    c.bench_function("adaptation panel, 4 rows of 50x50", |b| {
        b.iter(|| AdaptationPanel::build(&["a", "b", "c", "d"], &params, SEED).unwrap())
    });
}

criterion_group!(
    landscape_benchmarks,
    bench_generate,
    bench_generate_complex,
    bench_generate_shared_rng,
    bench_sigmoid,
    bench_render,
    bench_panel
);
criterion_main!(landscape_benchmarks);
