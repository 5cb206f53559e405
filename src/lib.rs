//! Lookout: a heightmap region meshed into voxel columns, viewed with a mouse-look camera.

pub mod camera;
pub mod config;
pub mod scene;

pub use camera::{LookCamera, Projection};
pub use config::ViewerConfig;
pub use scene::{Scene, load_heightmap};
