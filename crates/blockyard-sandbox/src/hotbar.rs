//! The block selection bar

use blockyard_core::{BlockyardError, Result};
use blockyard_world::BlockKind;

/// A fixed, non-empty row of placeable blocks with a wrapping cursor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hotbar {
    slots: Vec<BlockKind>,
    index: usize,
}

impl Default for Hotbar {
    fn default() -> Self {
        Self {
            slots: vec![
                BlockKind::Dirt,
                BlockKind::Grass,
                BlockKind::Stone,
                BlockKind::Wood,
            ],
            index: 0,
        }
    }
}

impl Hotbar {
    pub fn new(slots: Vec<BlockKind>) -> Result<Self> {
        if slots.is_empty() {
            return Err(BlockyardError::InvalidConfig(
                "hotbar needs at least one block".to_string(),
            ));
        }
        Ok(Self { slots, index: 0 })
    }

    /// Select by the 1-based number shown on the slot. Numbers past the end
    /// are ignored. Returns whether the selection is now on that slot.
    pub fn select(&mut self, number: usize) -> bool {
        if number == 0 || number > self.slots.len() {
            return false;
        }
        self.index = number - 1;
        true
    }

    pub fn scroll_up(&mut self) {
        self.index = (self.index + self.slots.len() - 1) % self.slots.len();
    }

    pub fn scroll_down(&mut self) {
        self.index = (self.index + 1) % self.slots.len();
    }

    /// Apply a net scroll amount: negative steps up, positive steps down
    pub fn scroll(&mut self, steps: i32) {
        let len = self.slots.len() as i64;
        let index = (self.index as i64 + steps as i64).rem_euclid(len);
        self.index = index as usize;
    }

    pub fn selected(&self) -> BlockKind {
        self.slots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slots(&self) -> &[BlockKind] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
