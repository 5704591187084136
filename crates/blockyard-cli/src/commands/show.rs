//! World inspection command

use anyhow::{Context, Result};
use blockyard_world::{load_world, BlockKind, Grid};

pub fn run(save: &str) -> Result<()> {
    let grid = load_world(save).with_context(|| format!("Failed to load {}", save))?;

    println!("World {} ({}x{})", save, grid.width(), grid.height());
    print!("{}", render_ascii(&grid));
    println!();
    for kind in BlockKind::ALL {
        println!("  {:<6} {:>5}", kind.name(), grid.count(kind));
    }
    Ok(())
}

/// One line per row, one glyph per cell
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            out.push(grid.get(x, y).unwrap_or_default().glyph());
        }
        out.push('\n');
    }
    out
}
