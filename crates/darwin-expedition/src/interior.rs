//! Room-graph traversal within interiors, and the transitions between
//! interior and exterior.

use darwin_core::{CellId, Grid, GridPos, InteriorLayout, Room, RoomId};

use crate::error::{ExpeditionResult, MoveFailure};
use crate::narrator;
use crate::state::{InteriorPresence, LocationState};

/// A successful arrival in a room, by entry or by movement within.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorArrival {
    /// The room arrived in.
    pub room_id: RoomId,
    /// The room's display name.
    pub room_name: String,
    /// The narrated sentence for this arrival.
    pub message: String,
    /// The room's description.
    pub description: String,
    /// Specimens listed for the room.
    pub specimens: Vec<String>,
    /// NPCs listed for the room.
    pub npcs: Vec<String>,
    /// Whether this was a same-room re-examination rather than a move.
    pub look_around: bool,
}

/// A successful return to the exterior grid.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorExit {
    /// The exterior cell returned to.
    pub cell_id: CellId,
    /// The restored exterior position.
    pub position: GridPos,
    /// The narrated, kind-flavored exit sentence.
    pub message: String,
}

fn arrival(
    layout: &InteriorLayout,
    room: &Room,
    message: String,
    look_around: bool,
    state: &mut LocationState,
) -> InteriorArrival {
    state.interior = Some(InteriorPresence {
        layout_id: layout.id.clone(),
        layout_name: layout.name.clone(),
        kind: layout.kind,
        position: (room.x, room.y),
        room_id: room.id.clone(),
    });
    InteriorArrival {
        room_id: room.id.clone(),
        room_name: room.name.clone(),
        message,
        description: room.description.clone(),
        specimens: room.specimens.clone(),
        npcs: room.npcs.clone(),
        look_around,
    }
}

/// Enter an interior from the exterior grid.
///
/// Each precondition fails with its own reason: not already inside this
/// interior, not inside a different one, and standing at the layout's
/// declared entry cell. The starting room is the one at
/// `start_position`, defaulting to the first-declared room when no room
/// matches.
pub fn enter(
    grid: &Grid,
    layout: &InteriorLayout,
    state: &mut LocationState,
    start_position: Option<(u32, u32)>,
) -> ExpeditionResult<InteriorArrival> {
    if let Some(presence) = &state.interior {
        if presence.layout_id == layout.id {
            return Err(MoveFailure::AlreadyInside(layout.name.clone()));
        }
        return Err(MoveFailure::InsideAnother(presence.layout_name.clone()));
    }

    if state.exterior_cell_id != layout.exterior_location {
        let required = grid
            .cell_by_id(layout.exterior_location.as_str())
            .map(|c| c.name.clone())
            .unwrap_or_else(|| layout.exterior_location.to_string());
        return Err(MoveFailure::NotAtEntrance {
            interior: layout.name.clone(),
            required,
        });
    }

    let room = start_position
        .and_then(|(x, y)| layout.room_at(x, y))
        .or_else(|| layout.first_room())
        .ok_or(MoveFailure::CannotEnter)?;

    let message = narrator::entry_sentence(layout, room);
    Ok(arrival(layout, room, message, false, state))
}

/// Leave the current interior, restoring the exterior position to the
/// layout's declared entry cell.
pub fn exit(grid: &Grid, state: &mut LocationState) -> ExpeditionResult<InteriorExit> {
    let presence = state.interior.take().ok_or(MoveFailure::NotInside)?;

    let outside = grid.cell_by_id(state.exterior_cell_id.as_str());
    let position = outside
        .map(|c| c.position())
        .unwrap_or(state.exterior_position);
    let outside_name = outside
        .map(|c| c.name.clone())
        .unwrap_or_else(|| state.exterior_cell_id.to_string());

    state.exterior_position = position;
    let message = narrator::exit_sentence(presence.kind, &presence.layout_name, &outside_name);
    Ok(InteriorExit {
        cell_id: state.exterior_cell_id.clone(),
        position,
        message,
    })
}

/// Move to a room within the active interior.
///
/// Permitted when the layout is a trivial single-room grid, when the
/// target is the room already occupied (a look around — same transition,
/// different phrasing), or when the target is exactly one cardinal step
/// away. A room flagged inaccessible refuses entry regardless of
/// adjacency; re-examining the occupied room is not an entry.
pub fn move_within(
    layout: &InteriorLayout,
    state: &mut LocationState,
    target: &str,
) -> ExpeditionResult<InteriorArrival> {
    let presence = state.interior.as_ref().ok_or(MoveFailure::NotInside)?;

    let room = layout
        .room_by_id(target)
        .ok_or_else(|| MoveFailure::UnknownRoom(target.to_string()))?;

    let same_room = presence.room_id == room.id;
    if !same_room && !room.accessible {
        return Err(MoveFailure::RoomInaccessible(room.name.clone()));
    }

    let (px, py) = presence.position;
    let cardinal_step =
        (i64::from(px) - i64::from(room.x)).abs() + (i64::from(py) - i64::from(room.y)).abs() == 1;

    if !(layout.grid.is_single_cell() || same_room || cardinal_step) {
        return Err(MoveFailure::RoomNotAdjacent(room.name.clone()));
    }

    let message = if same_room {
        narrator::look_around_sentence(room)
    } else {
        narrator::room_move_sentence(room)
    };
    Ok(arrival(layout, room, message, same_room, state))
}
