use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

pub const DEFAULT_COORD_SYS: &str = "helioprojective";

/// Rectangular region given by two corners in `coord_sys`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialRegion {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default = "default_coord_sys")]
    pub coord_sys: String,
}

fn default_coord_sys() -> String {
    DEFAULT_COORD_SYS.to_string()
}

impl SpatialRegion {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, coord_sys: impl Into<String>) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            coord_sys: coord_sys.into(),
        }
    }

    /// The whole solar disk and some margin, in helioprojective arcseconds.
    pub fn full_disk() -> Self {
        Self::new(-5000.0, -5000.0, 5000.0, 5000.0, DEFAULT_COORD_SYS)
    }
}

impl Default for SpatialRegion {
    fn default() -> Self {
        Self::full_disk()
    }
}

impl SpatialRegion {
    fn corner_bits(&self) -> [u64; 4] {
        [self.x1, self.y1, self.x2, self.y2].map(f64::to_bits)
    }
}

// Corners compare by bit pattern so equality agrees with `Hash`.
impl PartialEq for SpatialRegion {
    fn eq(&self, other: &Self) -> bool {
        self.corner_bits() == other.corner_bits() && self.coord_sys == other.coord_sys
    }
}

impl Eq for SpatialRegion {}

impl Hash for SpatialRegion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.corner_bits().hash(state);
        self.coord_sys.hash(state);
    }
}
