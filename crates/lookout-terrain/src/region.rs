//! Axis-aligned window of interest over the heightmap.
//!
//! The window bounds how much terrain is meshed; it is derived once from the
//! initial viewpoint and never moves afterwards.

use lookout_geom::Vec3;
use serde::Deserialize;

use crate::heightmap::HeightSample;

/// Window bounds relative to the viewpoint, `[region]` in the viewer config.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct RegionOffsets {
    #[serde(default = "default_x_min")]
    pub x_min: f32,
    #[serde(default = "default_x_max")]
    pub x_max: f32,
    #[serde(default = "default_z_min")]
    pub z_min: f32,
    #[serde(default = "default_z_max")]
    pub z_max: f32,
}

fn default_x_min() -> f32 {
    -90.0
}
fn default_x_max() -> f32 {
    -10.0
}
fn default_z_min() -> f32 {
    -10.0
}
fn default_z_max() -> f32 {
    70.0
}

impl Default for RegionOffsets {
    fn default() -> Self {
        Self {
            x_min: default_x_min(),
            x_max: default_x_max(),
            z_min: default_z_min(),
            z_max: default_z_max(),
        }
    }
}

/// Open rectangle `(x_min, x_max) x (z_min, z_max)` in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionWindow {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl RegionWindow {
    pub const fn new(x_min: f32, x_max: f32, z_min: f32, z_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    pub fn around(viewpoint: Vec3, offsets: &RegionOffsets) -> Self {
        Self::new(
            viewpoint.x + offsets.x_min,
            viewpoint.x + offsets.x_max,
            viewpoint.z + offsets.z_min,
            viewpoint.z + offsets.z_max,
        )
    }

    /// Both bounds exclusive on both axes.
    #[inline]
    pub fn contains(&self, x: i32, z: i32) -> bool {
        let (xf, zf) = (x as f32, z as f32);
        self.x_min < xf && xf < self.x_max && self.z_min < zf && zf < self.z_max
    }

    /// Lazily keeps the samples inside the window, in source order.
    pub fn filter<'a, I>(self, samples: I) -> impl Iterator<Item = HeightSample> + 'a
    where
        I: IntoIterator<Item = &'a HeightSample>,
        I::IntoIter: 'a,
    {
        samples
            .into_iter()
            .copied()
            .filter(move |s| self.contains(s.x, s.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightmap::HeightMap;

    #[test]
    fn around_applies_offsets() {
        let w = RegionWindow::around(
            Vec3::new(-129.906143, 110.205849, 3.054655),
            &RegionOffsets::default(),
        );
        assert!((w.x_min - -219.906143).abs() < 1e-4);
        assert!((w.x_max - -139.906143).abs() < 1e-4);
        assert!((w.z_min - -6.945345).abs() < 1e-4);
        assert!((w.z_max - 73.054655).abs() < 1e-4);
    }

    #[test]
    fn bounds_are_exclusive() {
        let w = RegionWindow::new(-2.0, 2.0, 0.0, 5.0);
        assert!(w.contains(0, 1));
        assert!(w.contains(-1, 4));
        assert!(!w.contains(-2, 1));
        assert!(!w.contains(2, 1));
        assert!(!w.contains(0, 0));
        assert!(!w.contains(0, 5));
    }

    #[test]
    fn filter_keeps_source_order() {
        let map = HeightMap::parse("1 70 1\n9 70 1\n-1 71 2\n0 72 0\n").unwrap();
        let w = RegionWindow::new(-2.0, 2.0, 0.5, 3.0);
        let kept: Vec<_> = w.filter(&map).map(|s| (s.x, s.z)).collect();
        assert_eq!(kept, vec![(1, 1), (-1, 2)]);
    }

    #[test]
    fn empty_window_yields_nothing() {
        let map = HeightMap::parse("0 70 0\n").unwrap();
        let w = RegionWindow::new(0.0, 0.0, -1.0, 1.0);
        assert_eq!(w.filter(map.samples()).count(), 0);
    }

    #[test]
    fn offsets_deserialize_with_defaults() {
        let o: RegionOffsets = toml::from_str("x_max = -5.0").unwrap();
        assert_eq!(o.x_max, -5.0);
        assert_eq!(o.z_max, 70.0);
    }
}
