//! Discrete cell coordinates for the neighbor index.

use glam::Vec3;

/// A discrete 3D coordinate in the cell index.
///
/// Uses `i32` coordinates so the index origin can sit anywhere in world
/// space, including behind the sensor.
///
/// # Example
///
/// ```
/// use fusion_cluster::CellCoord;
/// use glam::Vec3;
///
/// let coord = CellCoord::from_position(Vec3::new(0.55, -0.25, 1.1), 0.5);
/// assert_eq!(coord, CellCoord::new(1, -1, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Bins a world position into a cell of the given size.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_position(position: Vec3, cell_size: f32) -> Self {
        Self {
            x: (position.x / cell_size).floor() as i32,
            y: (position.y / cell_size).floor() as i32,
            z: (position.z / cell_size).floor() as i32,
        }
    }

    /// Returns this cell and its 26 Moore neighbors.
    ///
    /// With cell size equal to the clustering tolerance, any point within
    /// tolerance of a point in this cell must fall in one of these 27 cells.
    #[must_use]
    pub fn neighborhood(self) -> [Self; 27] {
        let mut result = [self; 27];
        let mut idx = 0;

        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                for dz in -1i32..=1 {
                    result[idx] = Self::new(
                        self.x.wrapping_add(dx),
                        self.y.wrapping_add(dy),
                        self.z.wrapping_add(dz),
                    );
                    idx += 1;
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_position_bins() {
        let coord = CellCoord::from_position(Vec3::new(1.2, 0.0, -0.1), 0.5);
        assert_eq!(coord, CellCoord::new(2, 0, -1));
    }

    #[test]
    fn from_position_negative_floors() {
        // -0.01 must land in cell -1, not 0
        let coord = CellCoord::from_position(Vec3::new(-0.01, -0.99, -1.0), 1.0);
        assert_eq!(coord, CellCoord::new(-1, -1, -1));
    }

    #[test]
    fn neighborhood_covers_self_and_26() {
        let coord = CellCoord::new(5, 5, 5);
        let hood = coord.neighborhood();
        assert_eq!(hood.len(), 27);
        assert!(hood.contains(&coord));
        assert!(hood.contains(&CellCoord::new(4, 4, 4)));
        assert!(hood.contains(&CellCoord::new(6, 6, 6)));
        assert!(!hood.contains(&CellCoord::new(7, 5, 5)));
    }

    #[test]
    fn neighborhood_is_distinct() {
        use std::collections::HashSet;
        let hood = CellCoord::new(0, 0, 0).neighborhood();
        let unique: HashSet<_> = hood.iter().copied().collect();
        assert_eq!(unique.len(), 27);
    }
}
