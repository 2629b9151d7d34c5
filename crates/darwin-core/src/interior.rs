//! Interior layouts: named indoor locations with their own room grids.
//!
//! An interior is entered from exactly one exterior cell, but one
//! exterior cell may be the entry point of several interiors (a cabin
//! beside a cave mouth). Room coordinates are local to their layout's
//! grid, which is distinct from and much smaller than the exterior grid.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::CellId;
use crate::error::{IslandError, IslandResult};

/// Registry key for an interior layout, e.g. `hms_beagle`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteriorId(String);

impl InteriorId {
    /// Create an interior id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InteriorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InteriorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique string key for a room, e.g. `BEAGLE_BOW`. Room ids are unique
/// across all layouts, not merely within one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Create a room id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// What sort of enclosed place an interior is. Drives exit phrasing:
/// leaving a ship is disembarking, not stepping outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteriorKind {
    /// A vessel boarded from the shore or anchorage.
    Ship,
    /// A built structure.
    Building,
    /// A natural cavern.
    Cave,
}

/// Width and height of a layout's local room coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGrid {
    /// Number of columns of room positions.
    pub width: u32,
    /// Number of rows of room positions.
    pub height: u32,
}

impl RoomGrid {
    /// Create a room grid with the given bounds.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether this layout has exactly one room position. Trivial
    /// single-room interiors always permit "movement" — a look around.
    pub fn is_single_cell(&self) -> bool {
        self.width == 1 && self.height == 1
    }

    /// Whether the given local coordinates fall inside the grid.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

fn default_accessible() -> bool {
    true
}

/// One node in an interior's room graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique key for this room, across all layouts.
    pub id: RoomId,
    /// Local column within the layout's grid.
    pub x: u32,
    /// Local row within the layout's grid.
    pub y: u32,
    /// Display name.
    pub name: String,
    /// Narrative description shown on arrival.
    pub description: String,
    /// Specimen ids potentially present here.
    #[serde(default)]
    pub specimens: Vec<String>,
    /// NPC ids potentially present here.
    #[serde(default)]
    pub npcs: Vec<String>,
    /// Whether the room may be entered. A locked or collapsed room keeps
    /// its place in the grid but refuses entry regardless of adjacency.
    #[serde(default = "default_accessible")]
    pub accessible: bool,
}

impl Room {
    /// Create an accessible room with an empty description.
    pub fn new(id: impl Into<RoomId>, (x, y): (u32, u32), name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            name: name.into(),
            description: String::new(),
            specimens: Vec::new(),
            npcs: Vec::new(),
            accessible: true,
        }
    }

    /// Set the narrative description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
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

    /// Mark the room as refusing entry.
    pub fn inaccessible(mut self) -> Self {
        self.accessible = false;
        self
    }
}

/// A named interior location: a room graph addressed by local
/// coordinates, entered from one exterior cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteriorLayout {
    /// Registry key for this layout.
    pub id: InteriorId,
    /// Display name, e.g. "HMS Beagle".
    pub name: String,
    /// Narrative description of the interior as a whole.
    pub description: String,
    /// What sort of enclosed place this is.
    pub kind: InteriorKind,
    /// The exterior cell from which this interior is entered.
    pub exterior_location: CellId,
    /// Bounds of the local room coordinate space.
    pub grid: RoomGrid,
    /// The rooms, in declaration order. The first room is the default
    /// entry point.
    pub rooms: Vec<Room>,
}

impl InteriorLayout {
    /// Create a layout with no rooms. Rooms are added with
    /// [`InteriorLayout::with_rooms`].
    pub fn new(
        id: impl Into<InteriorId>,
        name: impl Into<String>,
        kind: InteriorKind,
        exterior_location: impl Into<CellId>,
        grid: RoomGrid,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            exterior_location: exterior_location.into(),
            grid,
            rooms: Vec::new(),
        }
    }

    /// Set the narrative description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the rooms, in declaration order.
    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = Room>) -> Self {
        self.rooms = rooms.into_iter().collect();
        self
    }

    /// Look up a room by its unique id.
    pub fn room_by_id(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id.as_str() == id)
    }

    /// Look up the room at the given local coordinates.
    pub fn room_at(&self, x: u32, y: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.x == x && r.y == y)
    }

    /// The default entry room: the first declared.
    ///
    /// Registry validation guarantees every layout has at least one room.
    pub fn first_room(&self) -> Option<&Room> {
        self.rooms.first()
    }
}

/// Read-only registry of every interior layout on the island.
#[derive(Debug, Clone)]
pub struct InteriorRegistry {
    layouts: Vec<InteriorLayout>,
    by_id: HashMap<InteriorId, usize>,
}

impl InteriorRegistry {
    /// Build a registry from authored layouts.
    ///
    /// Fails on duplicate layout ids, duplicate room ids (within or
    /// across layouts), layouts with no rooms, or rooms placed outside
    /// their layout's grid bounds.
    pub fn new(layouts: Vec<InteriorLayout>) -> IslandResult<Self> {
        let mut by_id = HashMap::new();
        let mut room_ids: HashSet<RoomId> = HashSet::new();

        for (index, layout) in layouts.iter().enumerate() {
            if by_id.insert(layout.id.clone(), index).is_some() {
                return Err(IslandError::DuplicateLayoutId(layout.id.clone()));
            }
            if layout.rooms.is_empty() {
                return Err(IslandError::EmptyLayout(layout.id.clone()));
            }
            for room in &layout.rooms {
                if !room_ids.insert(room.id.clone()) {
                    return Err(IslandError::DuplicateRoomId(room.id.clone()));
                }
                if !layout.grid.contains(room.x, room.y) {
                    return Err(IslandError::RoomOutOfBounds {
                        room: room.id.clone(),
                        layout: layout.id.clone(),
                    });
                }
            }
        }

        Ok(Self { layouts, by_id })
    }

    /// An empty registry, for islands with no interiors.
    pub fn empty() -> Self {
        Self {
            layouts: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Look up a layout by its registry key.
    pub fn get(&self, id: &str) -> Option<&InteriorLayout> {
        self.by_id
            .get(&InteriorId::new(id))
            .map(|&i| &self.layouts[i])
    }

    /// Every layout entered from the given exterior cell.
    pub fn layouts_at(&self, cell_id: &str) -> Vec<&InteriorLayout> {
        self.layouts
            .iter()
            .filter(|l| l.exterior_location.as_str() == cell_id)
            .collect()
    }

    /// Iterate over every layout in declaration order.
    pub fn layouts(&self) -> impl Iterator<Item = &InteriorLayout> {
        self.layouts.iter()
    }

    /// The number of layouts defined.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether no layouts are defined.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
