//! Block kinds and their display attributes

use blockyard_core::{BlockyardError, Color};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The material held by a single grid cell.
///
/// The numeric code is the value written to save files and must stay stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BlockKind {
    #[default]
    Air = 0,
    Dirt = 1,
    Grass = 2,
    Stone = 3,
    Wood = 4,
}

impl BlockKind {
    /// Every kind, ordered by code
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Air,
        BlockKind::Dirt,
        BlockKind::Grass,
        BlockKind::Stone,
        BlockKind::Wood,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Air => "air",
            BlockKind::Dirt => "dirt",
            BlockKind::Grass => "grass",
            BlockKind::Stone => "stone",
            BlockKind::Wood => "wood",
        }
    }

    /// Fill colour, `None` for blocks that are not drawn
    pub fn color(self) -> Option<Color> {
        match self {
            BlockKind::Air => None,
            BlockKind::Dirt => Some(Color::from_rgb8(120, 72, 36)),
            BlockKind::Grass => Some(Color::from_rgb8(90, 160, 60)),
            BlockKind::Stone => Some(Color::from_rgb8(110, 110, 110)),
            BlockKind::Wood => Some(Color::from_rgb8(150, 100, 50)),
        }
    }

    /// Whether the block is drawn with a highlight line along its top edge
    pub fn has_top_highlight(self) -> bool {
        self == BlockKind::Grass
    }

    /// Solid blocks take part in collision
    pub fn is_solid(self) -> bool {
        self != BlockKind::Air
    }

    /// Single character used by text dumps of the grid
    pub fn glyph(self) -> char {
        match self {
            BlockKind::Air => '.',
            BlockKind::Dirt => 'd',
            BlockKind::Grass => 'g',
            BlockKind::Stone => '#',
            BlockKind::Wood => 'w',
        }
    }
}

impl TryFrom<u8> for BlockKind {
    type Error = BlockyardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(BlockyardError::UnknownBlock(code))
    }
}

impl From<BlockKind> for u8 {
    fn from(kind: BlockKind) -> u8 {
        kind.code()
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either a name (`"stone"`, case-insensitive) or a numeric code (`"3"`).
impl FromStr for BlockKind {
    type Err = BlockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return BlockKind::try_from(code);
        }
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BlockyardError::UnknownBlockName(trimmed.to_string()))
    }
}
