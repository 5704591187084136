//! Box-vs-grid overlap queries

use blockyard_core::Rect;
use blockyard_world::Grid;

/// Overlap shallower than this (in pixels) counts as touching, not
/// intersecting. Absorbs the drift left by `top - height` style snapping.
pub const CONTACT_EPSILON: f32 = 1e-3;

/// Pixel rectangle covered by grid cell `(x, y)`
pub fn tile_rect(x: i32, y: i32, tile_size: f32) -> Rect {
    Rect::new(x as f32 * tile_size, y as f32 * tile_size, tile_size, tile_size)
}

/// Inclusive cell range scanned for a box: the cells under its corners,
/// padded by one on every side.
pub fn scan_range(rect: &Rect, tile_size: f32) -> (i32, i32, i32, i32) {
    let cell = |v: f32| (v / tile_size).floor() as i32;
    (
        cell(rect.left()) - 1,
        cell(rect.right()) + 1,
        cell(rect.top()) - 1,
        cell(rect.bottom()) + 1,
    )
}

/// Every solid cell whose rectangle intersects `rect`, scanned column by
/// column. Cells outside the grid are never solid.
pub fn overlapping_tiles(grid: &Grid, rect: &Rect, tile_size: f32) -> Vec<Rect> {
    let (x0, x1, y0, y1) = scan_range(rect, tile_size);
    let mut hits = Vec::new();
    for gx in x0..=x1 {
        for gy in y0..=y1 {
            if !grid.is_solid(gx, gy) {
                continue;
            }
            let tile = tile_rect(gx, gy, tile_size);
            if rect.overlaps_by(&tile, CONTACT_EPSILON) {
                hits.push(tile);
            }
        }
    }
    hits
}

/// Whether `rect` intersects any solid cell
pub fn collides(grid: &Grid, rect: &Rect, tile_size: f32) -> bool {
    !overlapping_tiles(grid, rect, tile_size).is_empty()
}

/// The tile a downward-moving box lands on: the overlapping tile with the
/// highest top edge.
pub fn landing_tile(grid: &Grid, rect: &Rect, tile_size: f32) -> Option<Rect> {
    overlapping_tiles(grid, rect, tile_size)
        .into_iter()
        .min_by(|a, b| a.top().total_cmp(&b.top()))
}

/// The tile an upward-moving box bumps into: the overlapping tile with the
/// lowest bottom edge.
pub fn ceiling_tile(grid: &Grid, rect: &Rect, tile_size: f32) -> Option<Rect> {
    overlapping_tiles(grid, rect, tile_size)
        .into_iter()
        .max_by(|a, b| a.bottom().total_cmp(&b.bottom()))
}
