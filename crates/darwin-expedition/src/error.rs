//! The narratable failure taxonomy.
//!
//! Every variant's display string is the in-fiction sentence shown to
//! the player, phrased exactly like a successful narrative line. None of
//! these are exceptional: a blocked path is an expected, narratable
//! outcome, and the presentation layer renders it without any error UI.

use darwin_core::Direction;
use thiserror::Error;

/// Alias for `Result<T, MoveFailure>`.
pub type ExpeditionResult<T> = Result<T, MoveFailure>;

/// Why a navigation command did not change the player's location.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoveFailure {
    /// The input string names no known direction.
    #[error("\"{0}\" is no direction you know how to follow.")]
    InvalidDirection(String),

    /// The cell's authored boundary prose, surfaced verbatim.
    #[error("{0}")]
    Blocked(String),

    /// The move is not permitted and no boundary prose is authored.
    #[error("You cannot travel {0} from here.")]
    BlockedGeneric(Direction),

    /// The destination coordinates hold no cell.
    #[error("The way {0} leads nowhere.")]
    NoDestination(Direction),

    /// The current position resolves to no cell.
    #[error("You cannot make out where you stand well enough to travel.")]
    UnknownPosition,

    /// A travel or entry target id matched nothing.
    #[error("You know of no place called \"{0}\".")]
    UnknownLocation(String),

    /// Entering the interior the player already occupies.
    #[error("You are already within {0}.")]
    AlreadyInside(String),

    /// Entering an interior from the wrong exterior cell.
    #[error("You would have to stand at {required} to enter {interior}.")]
    NotAtEntrance {
        /// The interior's display name.
        interior: String,
        /// The display name of its entry cell.
        required: String,
    },

    /// Entering an interior while inside a different one.
    #[error("You must leave {0} before entering anywhere else.")]
    InsideAnother(String),

    /// Traveling overland while inside an interior.
    #[error("You must leave {0} before traveling on.")]
    MustExitFirst(String),

    /// Exiting or moving within an interior while outside.
    #[error("You are not inside anywhere that you might leave.")]
    NotInside,

    /// An interior move target id matched no room.
    #[error("No part of this place is called \"{0}\".")]
    UnknownRoom(String),

    /// The target room is neither the current room, within a trivial
    /// single-room layout, nor one cardinal step away.
    #[error("You cannot reach {0} from where you stand.")]
    RoomNotAdjacent(String),

    /// The target room refuses entry.
    #[error("{0} is blocked; you cannot go in.")]
    RoomInaccessible(String),

    /// The requested interior is not defined in the registry. This is
    /// the player-facing face of a configuration error; the detail goes
    /// to the log, not the player.
    #[error("That place cannot be entered.")]
    CannotEnter,
}
