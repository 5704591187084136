//! World creation command

use anyhow::{Context, Result};
use blockyard_world::{cell_count, save_world, Grid, MAX_CELLS};
use std::path::Path;

pub struct NewArgs {
    pub width: usize,
    pub height: usize,
    pub output: String,
    pub force: bool,
}

pub fn run(args: NewArgs) -> Result<()> {
    if cell_count(args.width, args.height).is_none() {
        anyhow::bail!(
            "World must be at least 1x1 and hold at most {} cells, got {}x{}",
            MAX_CELLS,
            args.width,
            args.height
        );
    }
    let path = Path::new(&args.output);
    if path.exists() && !args.force {
        anyhow::bail!(
            "'{}' already exists (use --force to overwrite)",
            args.output
        );
    }

    let grid = Grid::generate(args.width, args.height);
    save_world(path, &grid).with_context(|| format!("Failed to write {}", args.output))?;

    println!(
        "Created {}x{} world at {}",
        grid.width(),
        grid.height(),
        args.output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockyard_world::load_world;

    fn args(output: &Path, force: bool) -> NewArgs {
        NewArgs {
            width: 12,
            height: 8,
            output: output.display().to_string(),
            force,
        }
    }

    #[test]
    fn writes_generated_terrain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        run(args(&path, false)).unwrap();
        assert_eq!(load_world(&path).unwrap(), Grid::generate(12, 8));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(&path, "keep me").unwrap();

        assert!(run(args(&path, false)).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        run(args(&path, true)).unwrap();
        assert!(load_world(&path).is_ok());
    }

    #[test]
    fn rejects_empty_and_oversized_worlds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        for (width, height) in [(0, 8), (usize::MAX, 2), (usize::MAX, usize::MAX), (MAX_CELLS, 2)] {
            let err = run(NewArgs {
                width,
                height,
                ..args(&path, false)
            })
            .unwrap_err();
            assert!(err.to_string().contains("at most"), "{err}");
        }
        assert!(!path.exists());
    }
}
