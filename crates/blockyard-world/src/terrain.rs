//! Deterministic layered terrain

use crate::block::BlockKind;
use crate::grid::Grid;

/// Shape of the generated ground
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainConfig {
    /// Every `bump_period`-th column sits one row lower than its neighbours
    pub bump_period: usize,
    /// Rows of dirt between the grass surface and the stone below
    pub dirt_depth: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            bump_period: 7,
            dirt_depth: 2,
        }
    }
}

/// Generate the default terrain for a `width × height` grid
pub fn generate(width: usize, height: usize) -> Grid {
    generate_with(width, height, &TerrainConfig::default())
}

/// Generate layered terrain: grass on the surface row, `dirt_depth` rows of
/// dirt, stone to the bottom, air above. The result depends only on the
/// arguments.
pub fn generate_with(width: usize, height: usize, config: &TerrainConfig) -> Grid {
    let mut grid = Grid::new(width, height);

    for x in 0..width {
        let ground_y = ground_row(x, height, config);
        for y in ground_y..height {
            let kind = if y == ground_y {
                BlockKind::Grass
            } else if y <= ground_y + config.dirt_depth {
                BlockKind::Dirt
            } else {
                BlockKind::Stone
            };
            grid.set(x as i32, y as i32, kind);
        }
    }

    log::debug!(
        "generated {}x{} terrain ({} solid cells)",
        width,
        height,
        width * height - grid.count(BlockKind::Air)
    );
    grid
}

/// Surface row for column `x`
pub fn ground_row(x: usize, height: usize, config: &TerrainConfig) -> usize {
    let bump = if config.bump_period > 0 && x % config.bump_period == 0 {
        1
    } else {
        0
    };
    height / 2 + bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(30, 20), generate(30, 20));
        assert_eq!(generate(13, 9), generate(13, 9));
    }

    #[test]
    fn layers_follow_surface() {
        let grid = generate(30, 20);
        // column 1 is not bumped: surface at row 10
        assert_eq!(grid.get(1, 9), Some(BlockKind::Air));
        assert_eq!(grid.get(1, 10), Some(BlockKind::Grass));
        assert_eq!(grid.get(1, 11), Some(BlockKind::Dirt));
        assert_eq!(grid.get(1, 12), Some(BlockKind::Dirt));
        assert_eq!(grid.get(1, 13), Some(BlockKind::Stone));
        assert_eq!(grid.get(1, 19), Some(BlockKind::Stone));
    }

    #[test]
    fn every_seventh_column_is_bumped() {
        let grid = generate(30, 20);
        for x in [0, 7, 14, 21, 28] {
            assert_eq!(grid.surface_y(x), Some(11), "column {x}");
        }
        for x in [1, 6, 8, 29] {
            assert_eq!(grid.surface_y(x), Some(10), "column {x}");
        }
    }

    #[test]
    fn tiny_grids_do_not_panic() {
        let grid = generate(1, 1);
        // bumped column 0 puts the surface below the only row
        assert_eq!(grid.get(0, 0), Some(BlockKind::Air));
        let empty = generate(0, 0);
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn custom_config_changes_layers() {
        let config = TerrainConfig {
            bump_period: 0,
            dirt_depth: 0,
        };
        let grid = generate_with(4, 6, &config);
        for x in 0..4 {
            assert_eq!(grid.get(x, 3), Some(BlockKind::Grass));
            assert_eq!(grid.get(x, 4), Some(BlockKind::Stone));
        }
    }
}
