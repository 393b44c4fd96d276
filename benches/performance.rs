use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::DynamicImage;
use rgb_histogram::plot::{load_font, render_combined};
use rgb_histogram::{ChannelHistograms, Settings};

fn bench_channel_histograms(c: &mut Criterion) {
    let test_image = DynamicImage::ImageRgb8(image::RgbImage::from_fn(1920, 1080, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));

    c.bench_function("channel_histograms_1920x1080", |b| {
        b.iter(|| {
            let _result = ChannelHistograms::from_image(black_box(&test_image));
        })
    });
}

fn bench_render_combined(c: &mut Criterion) {
    let test_image = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(1000, 1000, image::Rgba([200, 150, 100, 255])));
    let histograms = ChannelHistograms::from_image(&test_image);
    let font = load_font().unwrap();
    let size = Settings::default().combined_size;

    c.bench_function("render_combined_figure", |b| {
        b.iter(|| {
            let _result = render_combined(black_box(&histograms), size, &font);
        })
    });
}

criterion_group!(benches, bench_channel_histograms, bench_render_combined);
criterion_main!(benches);
