use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roi_edges::image::synthetic::checkerboard_bgra;
use roi_edges::{BgraImage, EdgeParams, RoiEdgeDetector, RoiRect};

fn bench_roi_edges(c: &mut Criterion) {
    let (w, h) = (1280usize, 1024usize);
    let frame = checkerboard_bgra(w, h, 24);
    let image = BgraImage::new(&frame, w, h).expect("valid frame");
    let det = RoiEdgeDetector::new(EdgeParams::default());

    c.bench_function("roi_edges_640x480_of_1280x1024", |b| {
        b.iter(|| {
            let mask = det
                .detect(black_box(&image), black_box(RoiRect::new(320, 272, 640, 480)))
                .expect("roi inside frame");
            black_box(mask.edge_count());
        });
    });

    c.bench_function("roi_edges_full_1280x1024", |b| {
        b.iter(|| {
            let mask = det
                .detect(black_box(&image), RoiRect::full(w, h))
                .expect("roi inside frame");
            black_box(mask.edge_count());
        });
    });
}

criterion_group!(benches, bench_roi_edges);
criterion_main!(benches);
