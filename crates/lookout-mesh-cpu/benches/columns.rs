use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lookout_geom::Vec3;
use lookout_mesh_cpu::{MeshBuilder, build_region_mesh};
use lookout_terrain::{HeightMap, NoiseParams, RegionOffsets, RegionWindow};

fn bench_default_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_region_mesh");
    let map = HeightMap::generate(&NoiseParams::default()).unwrap();
    let viewpoint = Vec3::new(-129.906143, 110.205849, 3.054655);
    let window = RegionWindow::around(viewpoint, &RegionOffsets::default());
    let builder = MeshBuilder::new();
    group.bench_function("default_80x80", |b| {
        b.iter(|| {
            let mesh = build_region_mesh(&map, window, &builder);
            black_box(mesh);
        })
    });
    group.finish();
}

fn bench_tall_column(c: &mut Criterion) {
    let map = HeightMap::parse("0 320 0\n").unwrap();
    let window = RegionWindow::new(-1.0, 1.0, -1.0, 1.0);
    let builder = MeshBuilder::new().with_base_elevation(0);
    c.bench_function("single_column_320", |b| {
        b.iter(|| black_box(build_region_mesh(&map, window, &builder)))
    });
}

criterion_group!(benches, bench_default_region, bench_tall_column);
criterion_main!(benches);
