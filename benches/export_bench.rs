use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::Vec2;
use road_mesh_export::demo::DemoNetworkBuilder;
use road_mesh_export::export::ClassifierParams;
use road_mesh_export::{ExportOptions, LaneClassifier, MeshBuffer, MeshStitcher, build_artifacts};
use road_terrain::{Extent, HeightFieldParams, TerrainHeightField};
use std::hint::black_box;

fn bench_stitch_ribbon(c: &mut Criterion) {
    let mut group = c.benchmark_group("stitch_ribbon");
    let field = TerrainHeightField::new(42, HeightFieldParams::default());
    let extent = Extent::from_bounds(Vec2::new(0.0, -50.0), Vec2::new(1000.0, 50.0), 50.0);
    let stitcher = MeshStitcher::new(&field, &extent);

    for &points in &[100usize, 1_000usize, 10_000usize] {
        let step = 1000.0 / (points - 1) as f32;
        let left: Vec<Vec2> = (0..points).map(|i| Vec2::new(i as f32 * step, 1.75)).collect();
        let right: Vec<Vec2> = (0..points).map(|i| Vec2::new(i as f32 * step, -1.75)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, _| {
            b.iter(|| {
                let part = stitcher.write_ribbon(black_box(&left), black_box(&right), 0.1);
                black_box(part.vertices.len())
            })
        });
    }

    group.finish();
}

fn bench_classify_and_stitch(c: &mut Criterion) {
    let network = DemoNetworkBuilder::straight_avenue(2000.0, 2001)
        .sections(20)
        .build();
    let classifier = LaneClassifier::new(ClassifierParams::default());

    c.bench_function("classify_avenue_2000m", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&network)).lanes.len()))
    });

    let classified = classifier.classify(&network);
    let field = TerrainHeightField::new(42, HeightFieldParams::default());
    let extent = road_mesh_export::export::compute_extent(&classified.lanes, 50.0);
    let stitcher = MeshStitcher::new(&field, &extent);

    c.bench_function("stitch_avenue_2000m", |b| {
        b.iter(|| {
            let mut buffer = MeshBuffer::new();
            for (i, lane) in classified.lanes.iter().enumerate() {
                buffer.append(format!("lane_{i}"), &stitcher.stitch(lane));
            }
            black_box(buffer.vertex_count())
        })
    });
}

fn bench_build_artifacts(c: &mut Criterion) {
    let network = road_mesh_export::demo::demo_network();
    let options = ExportOptions {
        grid_points: 64,
        ..Default::default()
    };

    c.bench_function("build_artifacts_demo_grid64", |b| {
        b.iter(|| {
            let artifacts = build_artifacts(black_box(&network), &options).expect("Export failed");
            black_box(artifacts.merged.vertex_count())
        })
    });
}

criterion_group!(
    benches,
    bench_stitch_ribbon,
    bench_classify_and_stitch,
    bench_build_artifacts
);
criterion_main!(benches);
