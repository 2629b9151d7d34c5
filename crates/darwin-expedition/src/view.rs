//! Read-only views of the current location.
//!
//! Exterior cells and interior rooms are structurally similar but are
//! not interchangeable; [`CurrentLocation`] keeps them apart as a tagged
//! union so callers pattern-match instead of duck-typing.

use darwin_core::{Cell, CellId, Direction, InteriorId, InteriorLayout, Room, Terrain};

/// Where the player currently stands: an exterior cell or an interior
/// room with its layout.
#[derive(Debug, Clone, Copy)]
pub enum CurrentLocation<'a> {
    /// Out on the exterior grid.
    Exterior(&'a Cell),
    /// Inside an interior layout.
    Interior {
        /// The occupied room.
        room: &'a Room,
        /// The layout the room belongs to.
        layout: &'a InteriorLayout,
        /// The exterior cell the layout is entered from, when it
        /// resolves.
        entry_cell: Option<&'a Cell>,
    },
}

impl CurrentLocation<'_> {
    /// The location's id: cell id outside, room id inside.
    pub fn id(&self) -> &str {
        match self {
            Self::Exterior(cell) => cell.id.as_str(),
            Self::Interior { room, .. } => room.id.as_str(),
        }
    }

    /// The location's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Exterior(cell) => &cell.name,
            Self::Interior { room, .. } => &room.name,
        }
    }

    /// The location's narrative description.
    pub fn description(&self) -> &str {
        match self {
            Self::Exterior(cell) => &cell.description,
            Self::Interior { room, .. } => &room.description,
        }
    }

    /// Specimens listed for the location.
    pub fn specimens(&self) -> &[String] {
        match self {
            Self::Exterior(cell) => &cell.specimens,
            Self::Interior { room, .. } => &room.specimens,
        }
    }

    /// NPCs listed for the location.
    pub fn npcs(&self) -> &[String] {
        match self {
            Self::Exterior(cell) => &cell.npcs,
            Self::Interior { room, .. } => &room.npcs,
        }
    }
}

/// Interior context attached to a [`LocationView`] while inside.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorContext {
    /// The active layout's registry key.
    pub layout_id: InteriorId,
    /// The active layout's display name.
    pub layout_name: String,
    /// The exterior cell the layout is entered from.
    pub exterior_location: CellId,
}

/// A flattened, owned snapshot of the current location for the
/// presentation layer and the prompt-building collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationView {
    /// Location id: cell id outside, room id inside.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Narrative description.
    pub description: String,
    /// Terrain category; absent while inside an interior.
    pub terrain: Option<Terrain>,
    /// Specimens present.
    pub specimens: Vec<String>,
    /// NPCs present.
    pub npcs: Vec<String>,
    /// Directions usable from here; empty while inside an interior.
    pub valid_directions: Vec<Direction>,
    /// Interior context, present while inside.
    pub interior: Option<InteriorContext>,
}

impl From<&CurrentLocation<'_>> for LocationView {
    fn from(location: &CurrentLocation<'_>) -> Self {
        match location {
            CurrentLocation::Exterior(cell) => Self {
                id: cell.id.to_string(),
                name: cell.name.clone(),
                description: cell.description.clone(),
                terrain: Some(cell.terrain.clone()),
                specimens: cell.specimens.clone(),
                npcs: cell.npcs.clone(),
                valid_directions: cell.valid_moves.clone(),
                interior: None,
            },
            CurrentLocation::Interior { room, layout, .. } => Self {
                id: room.id.to_string(),
                name: room.name.clone(),
                description: room.description.clone(),
                terrain: None,
                specimens: room.specimens.clone(),
                npcs: room.npcs.clone(),
                valid_directions: Vec::new(),
                interior: Some(InteriorContext {
                    layout_id: layout.id.clone(),
                    layout_name: layout.name.clone(),
                    exterior_location: layout.exterior_location.clone(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use darwin_core::{InteriorKind, RoomGrid};

    use super::*;

    #[test]
    fn exterior_view_carries_terrain_and_directions() {
        let cell = Cell::new("RIDGE", (2, 2), "The Ridge", Terrain::Highland)
            .with_moves([Direction::North, Direction::South])
            .with_specimens(["galapagos_hawk"]);
        let location = CurrentLocation::Exterior(&cell);
        let view = LocationView::from(&location);
        assert_eq!(view.id, "RIDGE");
        assert_eq!(view.terrain, Some(Terrain::Highland));
        assert_eq!(
            view.valid_directions,
            vec![Direction::North, Direction::South]
        );
        assert!(view.interior.is_none());
    }

    #[test]
    fn interior_view_names_its_layout_and_entry() {
        let layout = InteriorLayout::new(
            "hms_beagle",
            "HMS Beagle",
            InteriorKind::Ship,
            "POST_OFFICE_BAY",
            RoomGrid::new(4, 2),
        );
        let room = Room::new("BEAGLE_BOW", (0, 0), "The Bow");
        let location = CurrentLocation::Interior {
            room: &room,
            layout: &layout,
            entry_cell: None,
        };
        let view = LocationView::from(&location);
        assert_eq!(view.id, "BEAGLE_BOW");
        assert!(view.terrain.is_none());
        assert!(view.valid_directions.is_empty());
        let context = view.interior.unwrap();
        assert_eq!(context.layout_id.as_str(), "hms_beagle");
        assert_eq!(context.exterior_location.as_str(), "POST_OFFICE_BAY");
    }
}
