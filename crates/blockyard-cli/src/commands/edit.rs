//! Offline world editing, following the same rules as in-game clicks

use anyhow::{Context, Result};
use blockyard_sandbox::interaction;
use blockyard_world::{load_world, save_world, BlockKind};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum EditCommands {
    /// Place a block into an empty cell
    Place {
        x: i32,
        y: i32,

        /// Block name or code (dirt, grass, stone, wood)
        block: String,

        /// Save file to edit
        #[arg(long, default_value = "world_save.json")]
        save: String,
    },

    /// Clear an occupied cell
    Remove {
        x: i32,
        y: i32,

        /// Save file to edit
        #[arg(long, default_value = "world_save.json")]
        save: String,
    },
}

pub fn run(cmd: EditCommands) -> Result<()> {
    match cmd {
        EditCommands::Place { x, y, block, save } => place(x, y, &block, &save),
        EditCommands::Remove { x, y, save } => remove(x, y, &save),
    }
}

fn place(x: i32, y: i32, block: &str, save: &str) -> Result<()> {
    let kind: BlockKind = block.parse()?;
    if kind == BlockKind::Air {
        anyhow::bail!("Use `edit remove` to clear a cell");
    }
    let mut grid = load_world(save).with_context(|| format!("Failed to load {}", save))?;

    if !grid.in_bounds(x, y) {
        anyhow::bail!(
            "({}, {}) is outside the {}x{} world",
            x,
            y,
            grid.width(),
            grid.height()
        );
    }
    if !interaction::place(&mut grid, (x, y), kind) {
        let existing = grid.get(x, y).unwrap_or_default();
        println!("({}, {}) already holds {}, nothing placed", x, y, existing);
        return Ok(());
    }

    save_world(save, &grid)?;
    println!("Placed {} at ({}, {})", kind, x, y);
    Ok(())
}

fn remove(x: i32, y: i32, save: &str) -> Result<()> {
    let mut grid = load_world(save).with_context(|| format!("Failed to load {}", save))?;

    match interaction::remove(&mut grid, (x, y)) {
        Some(kind) => {
            save_world(save, &grid)?;
            println!("Removed {} at ({}, {})", kind, x, y);
        }
        None => println!("({}, {}) is empty or outside the world, nothing removed", x, y),
    }
    Ok(())
}
