//! World persistence - JSON save files and the `WorldStore` seam.
//!
//! A save is a single document `{"w": .., "h": .., "grid": [[code; h]; w]}`
//! indexed `[x][y]`. Loading is all-or-nothing: a grid is only produced once
//! the whole document has been parsed and validated.

use crate::grid::Grid;
use blockyard_core::{BlockyardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default save file name, relative to the working directory
pub const DEFAULT_SAVE_FILE: &str = "world_save.json";

/// On-disk representation of a grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWorld {
    /// Grid width in cells
    pub w: usize,
    /// Grid height in cells
    pub h: usize,
    /// Block codes, one inner array per column
    pub grid: Vec<Vec<u8>>,
}

/// Somewhere a world can be saved to and restored from.
///
/// `load` must either return a complete grid or an error; callers rely on
/// that to keep their current world intact when loading fails.
pub trait WorldStore {
    fn load(&self) -> Result<Grid>;

    fn save(&mut self, grid: &Grid) -> Result<()>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Serialize a grid to a JSON string
pub fn world_to_string(grid: &Grid) -> Result<String> {
    Ok(serde_json::to_string(&grid.serialize())?)
}

/// Parse and validate a grid from a JSON string
pub fn world_from_str(content: &str) -> Result<Grid> {
    let saved: SavedWorld = serde_json::from_str(content)
        .map_err(|e| BlockyardError::MalformedSave(e.to_string()))?;
    Grid::deserialize(&saved)
}

/// Write a grid to `path`, replacing any existing save.
///
/// The document is written to a sibling temporary file first and renamed
/// over the target, so an interrupted save leaves the previous file intact.
pub fn save_world<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let content = world_to_string(grid)?;
    let tmp = temp_path(path);
    fs::write(&tmp, content)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    log::info!("World saved to {}", path.display());
    Ok(())
}

/// Read a grid from `path`
pub fn load_world<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BlockyardError::SaveNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let grid = world_from_str(&content)?;
    log::info!(
        "World loaded from {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// A [`WorldStore`] backed by a JSON file
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

impl WorldStore for JsonFileStore {
    fn load(&self) -> Result<Grid> {
        load_world(&self.path)
    }

    fn save(&mut self, grid: &Grid) -> Result<()> {
        save_world(&self.path, grid)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    #[test]
    fn string_round_trip() {
        let mut grid = Grid::generate(12, 8);
        grid.set(3, 1, BlockKind::Wood);
        let json = world_to_string(&grid).unwrap();
        assert_eq!(world_from_str(&json).unwrap(), grid);
    }

    #[test]
    fn document_has_expected_fields() {
        let mut grid = Grid::new(2, 1);
        grid.set(1, 0, BlockKind::Stone);
        let value: serde_json::Value =
            serde_json::from_str(&world_to_string(&grid).unwrap()).unwrap();
        assert_eq!(value["w"], 2);
        assert_eq!(value["h"], 1);
        assert_eq!(value["grid"], serde_json::json!([[0], [3]]));
    }

    #[test]
    fn reads_documents_written_by_hand() {
        let grid = world_from_str(r#"{"w": 2, "h": 2, "grid": [[0, 2], [1, 3]]}"#).unwrap();
        assert_eq!(grid.get(0, 1), Some(BlockKind::Grass));
        assert_eq!(grid.get(1, 0), Some(BlockKind::Dirt));
        assert_eq!(grid.get(1, 1), Some(BlockKind::Stone));
    }

    #[test]
    fn malformed_json_is_a_malformed_save() {
        for doc in ["", "{", r#"{"w": 1}"#, r#"{"w": 1, "h": 1, "grid": [[-1]]}"#] {
            assert!(
                matches!(world_from_str(doc), Err(BlockyardError::MalformedSave(_))),
                "{doc:?}"
            );
        }
    }

    #[test]
    fn oversized_dimensions_are_a_malformed_save() {
        let docs = [
            r#"{"w": 1, "h": 9223372036854775807, "grid": [[]]}"#,
            r#"{"w": 2, "h": 9223372036854775807, "grid": [[], []]}"#,
            r#"{"w": 4096, "h": 8192, "grid": []}"#,
        ];
        for doc in docs {
            assert!(
                matches!(world_from_str(doc), Err(BlockyardError::MalformedSave(_))),
                "{doc:?}"
            );
        }
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        let grid = Grid::generate(30, 20);

        save_world(&path, &grid).unwrap();
        assert_eq!(load_world(&path).unwrap(), grid);
        assert!(!dir.path().join("world.json.tmp").exists());
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        save_world(&path, &Grid::new(3, 3)).unwrap();

        let mut second = Grid::new(4, 2);
        second.set(0, 0, BlockKind::Wood);
        save_world(&path, &second).unwrap();
        assert_eq!(load_world(&path).unwrap(), second);
    }

    #[test]
    fn missing_file_is_save_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_world(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, BlockyardError::SaveNotFound(_)));
    }

    #[test]
    fn json_file_store_saves_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("store.json"));
        assert!(store.load().is_err());

        let grid = Grid::generate(10, 6);
        store.save(&grid).unwrap();
        assert_eq!(store.load().unwrap(), grid);
        assert!(store.describe().ends_with("store.json"));
    }
}
