//! Benchmarks for the retint pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};

use retint::{Colour, ColourMapper, SelectionPolicy, Sprite};

/// Synthetic tool sprite: grey body, wood band, transparent border.
fn tool_image(size: u32) -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
            Rgba([0, 0, 0, 0])
        } else if y > size / 2 {
            Rgba([137, 103, 39, 255])
        } else {
            let shade = 90 + ((x * 7 + y * 13) % 100) as u8;
            Rgba([shade, shade, shade.saturating_add(3), 255])
        };
    }
    img
}

fn bench_mapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper");

    let mapper = ColourMapper::new(Colour::rgb(200, 50, 50));

    group.bench_function("map_single", |b| {
        b.iter(|| mapper.map(black_box(Colour::rgb(130, 130, 131))))
    });

    group.bench_function("map_grey_ramp", |b| {
        b.iter(|| {
            for v in 0..=255u8 {
                black_box(mapper.map(Colour::rgb(v, v, v)));
            }
        })
    });

    group.finish();
}

fn bench_policy(c: &mut Criterion) {
    let policy = SelectionPolicy::default();

    c.bench_function("policy_eligible", |b| {
        b.iter(|| {
            policy.eligible(black_box(Colour::rgb(128, 128, 128)))
                && !policy.eligible(black_box(Colour::rgb(137, 103, 39)))
        })
    });
}

fn bench_recolor(c: &mut Criterion) {
    let mut group = c.benchmark_group("recolor");

    let mapper = ColourMapper::new(Colour::rgb(0, 255, 0));
    let policy = SelectionPolicy::default();

    for size in [16u32, 64] {
        let sprite = Sprite::from_image("bench.png", tool_image(size));
        group.bench_function(format!("sprite_{}x{}", size, size), |b| {
            b.iter(|| {
                let mut sprite = sprite.clone();
                black_box(sprite.recolor(&mapper, &policy))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mapper, bench_policy, bench_recolor);
criterion_main!(benches);
