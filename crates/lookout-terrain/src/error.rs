use std::path::PathBuf;

#[derive(Debug)]
pub enum TerrainError {
    /// Two samples share the same `(x, z)` column.
    DuplicateSample { x: i32, z: i32 },
    /// A heightmap table line could not be read as `x height z`.
    Parse { line: usize, msg: String },
    Io { path: PathBuf, source: std::io::Error },
    /// Noise parameters describe no columns or an inverted height range.
    InvalidParams(String),
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::DuplicateSample { x, z } => {
                write!(f, "duplicate heightmap sample at x={} z={}", x, z)
            }
            TerrainError::Parse { line, msg } => write!(f, "line {}: {}", line, msg),
            TerrainError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            TerrainError::InvalidParams(msg) => write!(f, "invalid terrain params: {}", msg),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
