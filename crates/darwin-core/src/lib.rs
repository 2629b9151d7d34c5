//! Core types for Young Darwin: grid cells, directions, terrain, and
//! interior layouts.
//!
//! This crate defines the island data model that the navigation engine
//! reads. It is content-agnostic — you can construct an [`Island`]
//! programmatically or deserialize one from JSON; either way the same
//! load-time validation applies.

/// Exterior grid cells and their movement metadata.
pub mod cell;
/// Compass directions for exterior movement.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// The read-only exterior grid and its lookups.
pub mod grid;
/// Interior layouts and the layout registry.
pub mod interior;
/// The island container tying grid and interiors together.
pub mod island;
/// Terrain categories for exterior cells.
pub mod terrain;

/// Re-export cell types.
pub use cell::{Cell, CellId, GridPos};
/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{IslandError, IslandResult};
/// Re-export grid types.
pub use grid::{CellSummary, Grid};
/// Re-export interior types.
pub use interior::{InteriorId, InteriorKind, InteriorLayout, InteriorRegistry, Room, RoomGrid, RoomId};
/// Re-export island types.
pub use island::{Island, IslandDef, IslandMeta};
/// Re-export the terrain type.
pub use terrain::Terrain;
