use std::io::Write;

use lookout::config::ViewerConfig;
use lookout::{Scene, load_heightmap};
use lookout_mesh_cpu::constants::{GRASS, VERTS_PER_CUBE};
use lookout_terrain::{HeightMap, HeightSample, TerrainSource};

fn viewer_config(toml_src: &str) -> ViewerConfig {
    toml::from_str(toml_src).unwrap()
}

#[test]
fn viewpoint_drives_region_and_camera() {
    let cfg = viewer_config(
        r#"
        [camera]
        position = [10.0, 80.0, 0.0]
        [region]
        x_min = -3.0
        x_max = 3.0
        z_min = -3.0
        z_max = 3.0
        "#,
    );
    let map = HeightMap::from_samples([
        HeightSample::new(10, 67, 0),  // inside
        HeightSample::new(12, 70, 2),  // inside
        HeightSample::new(13, 90, 0),  // on the open bound
        HeightSample::new(0, 90, 0),   // far outside
    ])
    .unwrap();
    let scene = Scene::build(&cfg, &map);
    assert_eq!(scene.camera.position(), cfg.camera.viewpoint());
    assert_eq!(scene.region.x_min, 7.0);
    assert_eq!(scene.mesh.cube_count(), 2 + 5);
    for cube in scene.mesh.vertices.chunks(VERTS_PER_CUBE) {
        let x = cube.iter().map(|v| v.position.x).fold(f32::INFINITY, f32::min);
        assert!(x == 10.0 || x == 12.0);
    }
    let grass_faces = scene.mesh.vertices.chunks(4).filter(|f| f[0].color == GRASS).count();
    assert_eq!(grass_faces, 2);
}

#[test]
fn default_noise_scene_is_well_formed() {
    let cfg = ViewerConfig::default();
    let map = load_heightmap(&cfg.terrain, None).unwrap();
    let scene = Scene::build(&cfg, &map);
    let n = scene.mesh.vertices.len() as u32;
    assert!(scene.mesh.indices.iter().all(|&i| i < n));
    assert!(scene.mesh.is_world_space());
    for v in &scene.mesh.vertices {
        // Corners span column origin to origin + 1
        assert!(v.position.x > scene.region.x_min && v.position.x <= scene.region.x_max + 1.0);
        assert!(v.position.z > scene.region.z_min && v.position.z <= scene.region.z_max + 1.0);
        assert!(v.position.y >= cfg.mesh.base_elevation as f32);
    }
}

#[test]
fn heightmap_override_file_wins() {
    let mut path = std::env::temp_dir();
    path.push(format!("lookout-scene-{}.txt", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# x height z").unwrap();
        writeln!(f, "-130 67 4").unwrap();
        writeln!(f, "-131 66 4").unwrap();
    }
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.terrain.source, TerrainSource::Noise);
    let map = load_heightmap(&cfg.terrain, Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(map.len(), 2);
    assert_eq!(map.height_at(-131, 4), Some(66));
}

#[test]
fn file_source_without_path_is_an_error() {
    let cfg = viewer_config("[terrain]\nsource = \"file\"");
    assert!(load_heightmap(&cfg.terrain, None).is_err());
}

#[test]
fn pointer_scenario_turns_camera_one_degree() {
    let cfg = ViewerConfig::default();
    let mut cam = cfg.camera.build();
    let pitch = cam.pitch();
    cam.on_cursor_moved(0.0, 0.0);
    cam.on_cursor_moved(10.0, 0.0);
    assert!((cam.yaw() - (-89.0)).abs() < 1e-6);
    assert_eq!(cam.pitch(), pitch);
}

#[test]
fn bundled_ridge_meshes_around_default_viewpoint() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/ridge.txt");
    let map = HeightMap::load(&path).unwrap();
    let scene = Scene::build(&ViewerConfig::default(), &map);
    assert!(!scene.mesh.is_empty());
    assert_eq!(scene.mesh.indices.len(), scene.mesh.cube_count() * 36);
}
