//! Board skins.
//!
//! A closed set of cosmetic layouts a host can draw the board with. Each
//! carries its pixel geometry, pit shape and background asset. Nothing in
//! `rules` reads these values; they travel in `GameConfig` so the host has
//! a single configuration object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available skins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardLayout {
    /// Pastel board with rounded-rectangle pits.
    #[default]
    Easter,
    /// Go-board background with round pits.
    Go,
}

/// How a pit or store outline is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitShape {
    /// Rectangle with rounded corners of the given arc.
    RoundedRect { arc: u32 },
    /// Ellipse inscribed in the pit rectangle.
    Ellipse,
}

/// Pixel geometry of a skin.
///
/// Store A sits at the left edge; store B mirrors it on the right. The two
/// pit rows start at `pit_left`, one above the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub board_width: u32,
    pub store_left: u32,
    pub store_top: u32,
    pub store_width: u32,
    pub store_height: u32,
    pub pit_left: u32,
    pub pit_top: u32,
    pub pit_width: u32,
    pub pit_height: u32,
    /// Horizontal gap between neighbouring pits.
    pub pit_gap_x: u32,
    /// Vertical gap between the two rows.
    pub pit_gap_y: u32,
}

impl LayoutGeometry {
    /// Left edge of store B.
    #[must_use]
    pub const fn store_b_left(&self) -> u32 {
        self.board_width - self.store_left - self.store_width
    }

    /// Right edge of the last pit in a row.
    #[must_use]
    pub const fn row_right(&self) -> u32 {
        self.pit_left + 6 * self.pit_width + 5 * self.pit_gap_x
    }
}

const EASTER_GEOMETRY: LayoutGeometry = LayoutGeometry {
    board_width: 1280,
    store_left: 50,
    store_top: 130,
    store_width: 110,
    store_height: 200,
    pit_left: 165,
    pit_top: 60,
    pit_width: 155,
    pit_height: 160,
    pit_gap_x: 5,
    pit_gap_y: 10,
};

const GO_GEOMETRY: LayoutGeometry = LayoutGeometry {
    board_width: 1280,
    store_left: 75,
    store_top: 100,
    store_width: 100,
    store_height: 260,
    pit_left: 207,
    pit_top: 92,
    pit_width: 110,
    pit_height: 110,
    pit_gap_x: 37,
    pit_gap_y: 38,
};

impl BoardLayout {
    /// Every skin.
    pub const ALL: [BoardLayout; 2] = [BoardLayout::Easter, BoardLayout::Go];

    /// Pixel geometry.
    #[must_use]
    pub const fn geometry(self) -> LayoutGeometry {
        match self {
            BoardLayout::Easter => EASTER_GEOMETRY,
            BoardLayout::Go => GO_GEOMETRY,
        }
    }

    /// Pit outline.
    #[must_use]
    pub const fn pit_shape(self) -> PitShape {
        match self {
            BoardLayout::Easter => PitShape::RoundedRect { arc: 15 },
            BoardLayout::Go => PitShape::Ellipse,
        }
    }

    /// Background image file name.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            BoardLayout::Easter => "easter_board.jpg",
            BoardLayout::Go => "go_board.png",
        }
    }

    /// Configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoardLayout::Easter => "easter",
            BoardLayout::Go => "go",
        }
    }
}

impl fmt::Display for BoardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown skin name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLayout(pub String);

impl fmt::Display for UnknownLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown board layout {:?} (expected \"easter\" or \"go\")", self.0)
    }
}

impl std::error::Error for UnknownLayout {}

impl FromStr for BoardLayout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardLayout::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}
