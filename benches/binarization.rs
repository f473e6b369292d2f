//! Binarization throughput at a few representative image sizes (stage A).
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_decoder::detector::binarizer::binarize;
use qr_decoder::GrayscaleImage;

fn bench_binarize(c: &mut Criterion, label: &str, width: usize, height: usize) {
    let gray = vec![128u8; width * height];
    c.bench_function(label, |b| {
        b.iter(|| {
            let img = GrayscaleImage::new(black_box(&gray), width, height);
            binarize(black_box(&img))
        })
    });
}

fn bench_binarize_small(c: &mut Criterion) {
    bench_binarize(c, "binarize_100x100", 100, 100);
}

fn bench_binarize_medium(c: &mut Criterion) {
    bench_binarize(c, "binarize_640x480", 640, 480);
}

fn bench_binarize_large(c: &mut Criterion) {
    bench_binarize(c, "binarize_1920x1080", 1920, 1080);
}

criterion_group!(
    benches,
    bench_binarize_small,
    bench_binarize_medium,
    bench_binarize_large
);
criterion_main!(benches);
