//! Exterior grid cells and their movement metadata.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::terrain::Terrain;

/// Unique string key for an exterior cell, e.g. `POST_OFFICE_BAY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    /// Create a cell id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CellId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A position on the exterior grid. Origin is the top-left corner;
/// `y` grows southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing southward.
    pub y: i32,
}

impl GridPos {
    /// Create a position from coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in the given direction.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One exterior grid location with coordinates, terrain, and movement
/// metadata.
///
/// Cells are immutable content: the core only ever reads them. The
/// `valid_moves` set is the sole gate for stepwise movement — it is
/// authored per cell rather than derived from neighbor existence, so a
/// boundary (cliff, surf) can block travel even where a neighboring cell
/// exists, and an allowed move may still lead to undefined ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Unique key for this cell.
    pub id: CellId,
    /// Column on the exterior grid.
    pub x: i32,
    /// Row on the exterior grid.
    pub y: i32,
    /// Display name, e.g. "Post Office Bay".
    pub name: String,
    /// Narrative description shown on arrival.
    pub description: String,
    /// Terrain category.
    pub terrain: Terrain,
    /// Display color for the map layer. Ignored by all core logic.
    #[serde(default)]
    pub color: String,
    /// Directions currently permitted from this cell.
    #[serde(default)]
    pub valid_moves: Vec<Direction>,
    /// Authored obstruction prose for specific blocked directions.
    #[serde(default)]
    pub boundaries: HashMap<Direction, String>,
    /// Specimen ids potentially present here, in display order.
    #[serde(default)]
    pub specimens: Vec<String>,
    /// NPC ids potentially present here, in display order.
    #[serde(default)]
    pub npcs: Vec<String>,
}

impl Cell {
    /// Create a cell with empty description and no movement metadata.
    pub fn new(id: impl Into<CellId>, (x, y): (i32, i32), name: impl Into<String>, terrain: Terrain) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            name: name.into(),
            description: String::new(),
            terrain,
            color: String::new(),
            valid_moves: Vec::new(),
            boundaries: HashMap::new(),
            specimens: Vec::new(),
            npcs: Vec::new(),
        }
    }

    /// Set the narrative description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the map display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the permitted movement directions.
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Direction>) -> Self {
        self.valid_moves = moves.into_iter().collect();
        self
    }

    /// Add authored obstruction prose for a blocked direction.
    pub fn with_boundary(mut self, direction: Direction, reason: impl Into<String>) -> Self {
        self.boundaries.insert(direction, reason.into());
        self
    }

    /// Set the specimen ids present here.
    pub fn with_specimens<S: Into<String>>(mut self, specimens: impl IntoIterator<Item = S>) -> Self {
        self.specimens = specimens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the NPC ids present here.
    pub fn with_npcs<S: Into<String>>(mut self, npcs: impl IntoIterator<Item = S>) -> Self {
        self.npcs = npcs.into_iter().map(Into::into).collect();
        self
    }

    /// This cell's position on the exterior grid.
    pub fn position(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    /// Whether movement in the given direction is permitted from here.
    ///
    /// This is the sole gate for stepwise movement.
    pub fn allows(&self, direction: Direction) -> bool {
        self.valid_moves.contains(&direction)
    }

    /// The authored obstruction prose for a direction, if any.
    pub fn boundary(&self, direction: Direction) -> Option<&str> {
        self.boundaries.get(&direction).map(String::as_str)
    }
}
