//! Compass directions for exterior movement.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight compass directions used for grid movement.
///
/// The grid origin is the top-left corner, so north decreases `y` and
/// south increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    #[serde(rename = "N")]
    North,
    /// Northeast.
    #[serde(rename = "NE")]
    Northeast,
    /// East.
    #[serde(rename = "E")]
    East,
    /// Southeast.
    #[serde(rename = "SE")]
    Southeast,
    /// South.
    #[serde(rename = "S")]
    South,
    /// Southwest.
    #[serde(rename = "SW")]
    Southwest,
    /// West.
    #[serde(rename = "W")]
    West,
    /// Northwest.
    #[serde(rename = "NW")]
    Northwest,
}

impl Direction {
    /// All eight directions in clockwise order starting at north.
    pub const ALL: [Direction; 8] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
    ];

    /// Parse a direction from any of its sixteen recognized spellings
    /// (full word or abbreviation, case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "ne" | "northeast" => Some(Self::Northeast),
            "e" | "east" => Some(Self::East),
            "se" | "southeast" => Some(Self::Southeast),
            "s" | "south" => Some(Self::South),
            "sw" | "southwest" => Some(Self::Southwest),
            "w" | "west" => Some(Self::West),
            "nw" | "northwest" => Some(Self::Northwest),
            _ => None,
        }
    }

    /// The canonical abbreviation, as used in cell movement tables.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::Northeast => "NE",
            Self::East => "E",
            Self::Southeast => "SE",
            Self::South => "S",
            Self::Southwest => "SW",
            Self::West => "W",
            Self::Northwest => "NW",
        }
    }

    /// The full lowercase name, as used in narrative sentences.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
        }
    }

    /// The unit coordinate delta `(dx, dy)` for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::Northeast => (1, -1),
            Self::East => (1, 0),
            Self::Southeast => (1, 1),
            Self::South => (0, 1),
            Self::Southwest => (-1, 1),
            Self::West => (-1, 0),
            Self::Northwest => (-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
