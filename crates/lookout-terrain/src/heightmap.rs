use std::fs;
use std::path::Path;

use fastnoise_lite::{FastNoiseLite, NoiseType};
use hashbrown::HashMap;

use crate::config::NoiseParams;
use crate::error::TerrainError;

/// One terrain column. `height` is the exclusive top of the solid stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeightSample {
    pub x: i32,
    pub z: i32,
    pub height: i32,
}

impl HeightSample {
    #[inline]
    pub const fn new(x: i32, height: i32, z: i32) -> Self {
        Self { x, z, height }
    }
}

/// Read-only heightmap table with at most one sample per `(x, z)`.
/// Iteration follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct HeightMap {
    samples: Vec<HeightSample>,
    index: HashMap<(i32, i32), usize>,
}

impl HeightMap {
    pub fn from_samples(
        samples: impl IntoIterator<Item = HeightSample>,
    ) -> Result<Self, TerrainError> {
        let mut map = HeightMap::default();
        for s in samples {
            map.push(s)?;
        }
        Ok(map)
    }

    fn push(&mut self, s: HeightSample) -> Result<(), TerrainError> {
        let slot = self.samples.len();
        if self.index.insert((s.x, s.z), slot).is_some() {
            return Err(TerrainError::DuplicateSample { x: s.x, z: s.z });
        }
        self.samples.push(s);
        Ok(())
    }

    /// Samples OpenSimplex2 noise once per column and remaps it into
    /// `[min_height, max_height]`. Rows are emitted z-major, then x.
    pub fn generate(params: &NoiseParams) -> Result<Self, TerrainError> {
        if params.column_count() == 0 {
            return Err(TerrainError::InvalidParams(format!(
                "empty extent x {}..{} z {}..{}",
                params.x_min, params.x_max, params.z_min, params.z_max
            )));
        }
        if params.max_height < params.min_height {
            return Err(TerrainError::InvalidParams(format!(
                "max_height {} below min_height {}",
                params.max_height, params.min_height
            )));
        }
        let mut noise = FastNoiseLite::with_seed(params.seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(params.frequency));

        let mut map = HeightMap {
            samples: Vec::with_capacity(params.column_count()),
            index: HashMap::with_capacity(params.column_count()),
        };
        for z in params.z_min..params.z_max {
            for x in params.x_min..params.x_max {
                let n = noise.get_noise_2d(x as f32, z as f32);
                let height = remap_noise_to_height(n, params.min_height, params.max_height);
                map.push(HeightSample::new(x, height, z))?;
            }
        }
        log::debug!(
            "generated {} columns (seed {}, freq {})",
            map.len(),
            params.seed,
            params.frequency
        );
        Ok(map)
    }

    /// Parses a heightmap table: one `x height z` triple per line.
    /// Whitespace, commas and braces separate fields; `#` starts a comment.
    pub fn parse(text: &str) -> Result<Self, TerrainError> {
        let mut map = HeightMap::default();
        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.split('#').next().unwrap_or("");
            let fields: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || matches!(c, ',' | '{' | '}' | '(' | ')'))
                .filter(|f| !f.is_empty())
                .collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 3 {
                return Err(TerrainError::Parse {
                    line: line_no,
                    msg: format!("expected 3 fields (x height z), found {}", fields.len()),
                });
            }
            let mut vals = [0i32; 3];
            for (slot, field) in vals.iter_mut().zip(&fields) {
                *slot = field.parse().map_err(|e| TerrainError::Parse {
                    line: line_no,
                    msg: format!("`{}`: {}", field, e),
                })?;
            }
            map.push(HeightSample::new(vals[0], vals[1], vals[2]))
                .map_err(|e| TerrainError::Parse {
                    line: line_no,
                    msg: e.to_string(),
                })?;
        }
        Ok(map)
    }

    pub fn load(path: &Path) -> Result<Self, TerrainError> {
        let text = fs::read_to_string(path).map_err(|source| TerrainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text)?;
        log::debug!("loaded {} columns from {}", map.len(), path.display());
        Ok(map)
    }

    #[inline]
    pub fn height_at(&self, x: i32, z: i32) -> Option<i32> {
        self.index.get(&(x, z)).map(|&i| self.samples[i].height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[HeightSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeightSample> + '_ {
        self.samples.iter()
    }

    /// Inclusive `(x_min, x_max, z_min, z_max)` over all samples.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let first = self.samples.first()?;
        Some(self.samples.iter().fold(
            (first.x, first.x, first.z, first.z),
            |(x0, x1, z0, z1), s| (x0.min(s.x), x1.max(s.x), z0.min(s.z), z1.max(s.z)),
        ))
    }
}

impl<'a> IntoIterator for &'a HeightMap {
    type Item = &'a HeightSample;
    type IntoIter = std::slice::Iter<'a, HeightSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

pub(crate) fn remap_noise_to_height(noise: f32, min_h: i32, max_h: i32) -> i32 {
    let span = (max_h - min_h) as f32;
    let hh = ((noise + 1.0) * 0.5 * span) as i32 + min_h;
    hh.clamp(min_h, max_h)
}
