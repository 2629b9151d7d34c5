use crate::cell::CellId;
use crate::interior::{InteriorId, RoomId};

/// Alias for `Result<T, IslandError>`.
pub type IslandResult<T> = Result<T, IslandError>;

/// Configuration-level defects in island content.
///
/// These are authoring errors, not player-facing outcomes: they are
/// raised when content is loaded or when a caller requests a layout that
/// was never defined. Player-narratable movement failures live in the
/// navigation layer.
#[derive(Debug, thiserror::Error)]
pub enum IslandError {
    /// Two cells declare the same id.
    #[error("duplicate cell id: {0}")]
    DuplicateCellId(CellId),

    /// Two cells declare the same grid coordinates.
    #[error("duplicate cell coordinates ({x}, {y})")]
    DuplicateCellPosition {
        /// Column of the colliding cells.
        x: i32,
        /// Row of the colliding cells.
        y: i32,
    },

    /// Two interior layouts declare the same id.
    #[error("duplicate interior layout id: {0}")]
    DuplicateLayoutId(InteriorId),

    /// Two rooms declare the same id, within or across layouts.
    #[error("duplicate room id: {0}")]
    DuplicateRoomId(RoomId),

    /// A layout declares no rooms.
    #[error("interior layout {0} has no rooms")]
    EmptyLayout(InteriorId),

    /// A room's local coordinates fall outside its layout's grid.
    #[error("room {room} lies outside the {layout} grid")]
    RoomOutOfBounds {
        /// The out-of-bounds room.
        room: RoomId,
        /// The layout that declares it.
        layout: InteriorId,
    },

    /// The island's starting cell id resolves to no cell.
    #[error("starting cell not found: {0}")]
    UnknownStart(CellId),

    /// A layout's exterior entry cell resolves to no cell.
    #[error("interior {layout} is entered from {cell}, which does not exist")]
    DanglingEntrance {
        /// The layout with the unresolvable entry.
        layout: InteriorId,
        /// The missing exterior cell id.
        cell: CellId,
    },

    /// A layout was requested at run time that the registry never defined.
    #[error("interior layout not defined: {0}")]
    UndefinedLayout(String),
}
