//! Navigation engine for Young Darwin.
//!
//! Exterior grid movement, interior room traversal, and the stateful
//! [`Expedition`] session that fronts both. The engine is synchronous
//! and single-session: one `Expedition` owns one [`state::LocationState`]
//! and mutates it only through its command entry points. Failures are
//! narratable outcomes, not errors — every command returns a [`Reply`]
//! whose message reads as game text either way.

/// The narratable failure taxonomy.
pub mod error;
/// Interior entry, exit, and room traversal.
pub mod interior;
/// The exterior movement processor and fatigue model.
pub mod movement;
/// Narrative phrasing for navigation outcomes.
pub mod narrator;
/// Command parsing and the free-text movement scanner.
pub mod parser;
/// The expedition session façade.
pub mod session;
/// Mutable location state and the observer seam.
pub mod state;
/// Read-only views of the current location.
pub mod view;

/// Re-export failure types.
pub use error::{ExpeditionResult, MoveFailure};
/// Re-export interior outcomes.
pub use interior::{InteriorArrival, InteriorExit};
/// Re-export movement outcomes.
pub use movement::StepOutcome;
/// Re-export the parser surface.
pub use parser::{Command, parse_command, scan_movement};
/// Re-export the session façade.
pub use session::{Expedition, Reply};
/// Re-export state types.
pub use state::{LocationChange, LocationObserver, LocationState, Mode};
/// Re-export view types.
pub use view::{CurrentLocation, InteriorContext, LocationView};
