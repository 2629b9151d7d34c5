//! Mutable location state and the observer seam.

use darwin_core::{CellId, GridPos, InteriorId, InteriorKind, RoomId};

/// Whether the player is out on the grid or inside an interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// On the exterior grid.
    Exterior,
    /// Inside an interior layout.
    Interior,
}

/// The player's presence inside an interior.
///
/// The display name and kind are cached at entry so that exit phrasing
/// and precondition messages need no registry lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorPresence {
    /// The active layout's registry key.
    pub layout_id: InteriorId,
    /// The active layout's display name.
    pub layout_name: String,
    /// What sort of place the player is inside.
    pub kind: InteriorKind,
    /// Local position within the layout's grid.
    pub position: (u32, u32),
    /// The current room's id.
    pub room_id: RoomId,
}

/// The single mutable entity owned by the expedition session.
///
/// Created once pinned to the island's starting cell and mutated only
/// through the session's command entry points. The exterior position and
/// cell id are retained while inside an interior, so exiting restores
/// them without bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationState {
    /// Current exterior grid position.
    pub exterior_position: GridPos,
    /// Id of the current exterior cell.
    pub exterior_cell_id: CellId,
    /// Present when the player is inside an interior.
    pub interior: Option<InteriorPresence>,
}

impl LocationState {
    /// Create state pinned to the given exterior cell.
    pub fn at(cell_id: impl Into<CellId>, position: GridPos) -> Self {
        Self {
            exterior_position: position,
            exterior_cell_id: cell_id.into(),
            interior: None,
        }
    }

    /// The current mode, derived from interior presence.
    pub fn mode(&self) -> Mode {
        if self.interior.is_some() {
            Mode::Interior
        } else {
            Mode::Exterior
        }
    }
}

/// A successful location transition, pushed to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationChange {
    /// The new location id: a cell id outside, a room id inside.
    pub location_id: String,
    /// The mode after the transition.
    pub mode: Mode,
}

/// Receives one-way pushes on every successful transition.
///
/// The session never reads anything back from its observers: game-state
/// collaborators subscribe, and the navigation core stays free of any
/// upward dependency. Zero subscribers is a supported configuration.
pub trait LocationObserver {
    /// Called after every successful transition with the new location.
    fn location_changed(&mut self, change: &LocationChange);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_interior_presence() {
        let mut state = LocationState::at("POST_OFFICE_BAY", GridPos::new(1, 0));
        assert_eq!(state.mode(), Mode::Exterior);

        state.interior = Some(InteriorPresence {
            layout_id: InteriorId::new("hms_beagle"),
            layout_name: "HMS Beagle".to_string(),
            kind: InteriorKind::Ship,
            position: (0, 0),
            room_id: RoomId::new("BEAGLE_BOW"),
        });
        assert_eq!(state.mode(), Mode::Interior);
    }

    #[test]
    fn exterior_fields_survive_interior_presence() {
        let mut state = LocationState::at("POST_OFFICE_BAY", GridPos::new(1, 0));
        let before = (state.exterior_position, state.exterior_cell_id.clone());
        state.interior = Some(InteriorPresence {
            layout_id: InteriorId::new("hms_beagle"),
            layout_name: "HMS Beagle".to_string(),
            kind: InteriorKind::Ship,
            position: (0, 0),
            room_id: RoomId::new("BEAGLE_BOW"),
        });
        assert_eq!(state.exterior_position, before.0);
        assert_eq!(state.exterior_cell_id, before.1);
    }
}
