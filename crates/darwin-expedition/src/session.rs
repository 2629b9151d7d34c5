//! The expedition session: the one stateful façade over exterior
//! movement and interior navigation.

use darwin_core::{CellId, Direction, GridPos, Island, IslandError, IslandResult};

use crate::error::MoveFailure;
use crate::interior;
use crate::movement::{self, StepOutcome};
use crate::parser;
use crate::state::{LocationChange, LocationObserver, LocationState, Mode};
use crate::view::{CurrentLocation, LocationView};

/// The uniform result of every session command.
///
/// Failures are expected, narratable outcomes: `message` reads as an
/// in-fiction sentence whether the command succeeded or not, and the
/// presentation layer shows both the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Whether the command changed (or re-examined) the location.
    pub success: bool,
    /// The narrated sentence for this outcome.
    pub message: String,
    /// The failure reason, when `success` is false.
    pub failure: Option<MoveFailure>,
    /// Fatigue charged by this command. Zero on failure and for
    /// interior transitions.
    pub fatigue: u32,
    /// The new location id, when the command succeeded.
    pub location_id: Option<String>,
    /// Specimens at the new location.
    pub specimens: Vec<String>,
    /// NPCs at the new location.
    pub npcs: Vec<String>,
}

impl Reply {
    fn moved(
        message: String,
        location_id: String,
        fatigue: u32,
        specimens: Vec<String>,
        npcs: Vec<String>,
    ) -> Self {
        Self {
            success: true,
            message,
            failure: None,
            fatigue,
            location_id: Some(location_id),
            specimens,
            npcs,
        }
    }

    fn fail(failure: MoveFailure) -> Self {
        Self {
            success: false,
            message: failure.to_string(),
            failure: Some(failure),
            fatigue: 0,
            location_id: None,
            specimens: Vec::new(),
            npcs: Vec::new(),
        }
    }
}

/// A stateful expedition across one island.
///
/// Owns the location state for one game session and hides the
/// exterior/interior duality behind a single current-location view and
/// a small set of command entry points. Every operation completes
/// synchronously; nothing here suspends or retries.
pub struct Expedition {
    island: Island,
    state: LocationState,
    observers: Vec<Box<dyn LocationObserver>>,
}

impl Expedition {
    /// Begin an expedition at the island's fixed starting cell.
    pub fn new(island: Island) -> Self {
        let position = island
            .grid()
            .cell_by_id(island.start().as_str())
            .map_or(GridPos::new(0, 0), |c| c.position());
        let state = LocationState::at(island.start().clone(), position);
        Self {
            island,
            state,
            observers: Vec::new(),
        }
    }

    /// Begin an expedition at a specific exterior cell.
    pub fn at_cell(island: Island, cell_id: &str) -> IslandResult<Self> {
        let (id, position) = {
            let cell = island
                .grid()
                .cell_by_id(cell_id)
                .ok_or_else(|| IslandError::UnknownStart(CellId::new(cell_id)))?;
            (cell.id.clone(), cell.position())
        };
        Ok(Self {
            island,
            state: LocationState::at(id, position),
            observers: Vec::new(),
        })
    }

    /// The island being explored.
    pub fn island(&self) -> &Island {
        &self.island
    }

    /// The current location state.
    pub fn state(&self) -> &LocationState {
        &self.state
    }

    /// Subscribe an observer to successful transitions.
    ///
    /// The push is one-way and fire-and-forget; the session never reads
    /// anything back. Zero subscribers is fine.
    pub fn subscribe(&mut self, observer: Box<dyn LocationObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, location_id: &str, mode: Mode) {
        let change = LocationChange {
            location_id: location_id.to_string(),
            mode,
        };
        for observer in &mut self.observers {
            observer.location_changed(&change);
        }
    }

    fn apply_step(&mut self, outcome: StepOutcome) -> Reply {
        self.state.exterior_position = outcome.position;
        self.state.exterior_cell_id = outcome.cell_id.clone();
        self.notify(&outcome.cell_id.to_string(), Mode::Exterior);
        Reply::moved(
            outcome.message,
            outcome.cell_id.to_string(),
            outcome.fatigue,
            outcome.specimens,
            outcome.npcs,
        )
    }

    /// Attempt one stepwise move in the given direction.
    pub fn handle_move(&mut self, direction: &str) -> Reply {
        if let Some(presence) = &self.state.interior {
            return Reply::fail(MoveFailure::MustExitFirst(presence.layout_name.clone()));
        }
        match movement::step(self.island.grid(), self.state.exterior_position, direction) {
            Ok(outcome) => self.apply_step(outcome),
            Err(failure) => Reply::fail(failure),
        }
    }

    /// Travel directly to a cell by id, or — when the argument spells a
    /// direction — delegate to [`Expedition::handle_move`].
    pub fn travel_to(&mut self, target: &str) -> Reply {
        if Direction::parse(target).is_some() {
            return self.handle_move(target);
        }
        if let Some(presence) = &self.state.interior {
            return Reply::fail(MoveFailure::MustExitFirst(presence.layout_name.clone()));
        }
        match movement::travel_to(self.island.grid(), target) {
            Ok(outcome) => self.apply_step(outcome),
            Err(failure) => Reply::fail(failure),
        }
    }

    /// Enter an interior by registry key, optionally at a specific room
    /// position.
    ///
    /// A key the registry never defined is a configuration error: the
    /// detail goes to the log and the player sees only a generic
    /// refusal.
    pub fn enter_interior(&mut self, interior_id: &str, start: Option<(u32, u32)>) -> Reply {
        let Some(layout) = self.island.interiors().get(interior_id) else {
            log::warn!("{}", IslandError::UndefinedLayout(interior_id.to_string()));
            return Reply::fail(MoveFailure::CannotEnter);
        };
        match interior::enter(self.island.grid(), layout, &mut self.state, start) {
            Ok(arrival) => {
                let room_id = arrival.room_id.to_string();
                self.notify(&room_id, Mode::Interior);
                Reply::moved(arrival.message, room_id, 0, arrival.specimens, arrival.npcs)
            }
            Err(failure) => Reply::fail(failure),
        }
    }

    /// Leave the current interior, returning to its entry cell.
    pub fn exit_interior(&mut self) -> Reply {
        match interior::exit(self.island.grid(), &mut self.state) {
            Ok(outcome) => {
                let cell_id = outcome.cell_id.to_string();
                self.notify(&cell_id, Mode::Exterior);
                Reply::moved(outcome.message, cell_id, 0, Vec::new(), Vec::new())
            }
            Err(failure) => Reply::fail(failure),
        }
    }

    /// Move to a room within the current interior. Moving to the
    /// occupied room is a look around: same transition, different
    /// phrasing.
    pub fn move_in_interior(&mut self, room_id: &str) -> Reply {
        let layout_id = match &self.state.interior {
            Some(presence) => presence.layout_id.clone(),
            None => return Reply::fail(MoveFailure::NotInside),
        };
        let Some(layout) = self.island.interiors().get(layout_id.as_str()) else {
            log::warn!("{}", IslandError::UndefinedLayout(layout_id.to_string()));
            return Reply::fail(MoveFailure::CannotEnter);
        };
        match interior::move_within(layout, &mut self.state, room_id) {
            Ok(arrival) => {
                let room_id = arrival.room_id.to_string();
                self.notify(&room_id, Mode::Interior);
                Reply::moved(arrival.message, room_id, 0, arrival.specimens, arrival.npcs)
            }
            Err(failure) => Reply::fail(failure),
        }
    }

    /// Scan free text for an explicit movement intent and, when one is
    /// found, perform the move.
    ///
    /// Returns `None` when no verb-then-direction pattern is present or
    /// while inside an interior; direction words appearing incidentally
    /// never trigger a move.
    pub fn scan_free_text(&mut self, text: &str) -> Option<Reply> {
        if self.state.interior.is_some() {
            return None;
        }
        parser::scan_movement(text).map(|direction| self.handle_move(direction.name()))
    }

    /// Directions usable from the current exterior cell; empty while
    /// inside an interior.
    pub fn valid_directions(&self) -> Vec<Direction> {
        if self.state.interior.is_some() {
            return Vec::new();
        }
        self.island
            .grid()
            .cell_at_pos(self.state.exterior_position)
            .map(|c| c.valid_moves.clone())
            .unwrap_or_default()
    }

    /// The current location as a tagged union.
    ///
    /// `None` would mean the state desynchronized from the island
    /// content, which validated construction prevents.
    pub fn current_location(&self) -> Option<CurrentLocation<'_>> {
        match &self.state.interior {
            Some(presence) => {
                let layout = self.island.interiors().get(presence.layout_id.as_str())?;
                let room = layout.room_by_id(presence.room_id.as_str())?;
                let entry_cell = self
                    .island
                    .grid()
                    .cell_by_id(layout.exterior_location.as_str());
                Some(CurrentLocation::Interior {
                    room,
                    layout,
                    entry_cell,
                })
            }
            None => self
                .island
                .grid()
                .cell_by_id(self.state.exterior_cell_id.as_str())
                .map(CurrentLocation::Exterior),
        }
    }

    /// A flattened owned snapshot of the current location.
    pub fn location_view(&self) -> Option<LocationView> {
        self.current_location().map(|loc| LocationView::from(&loc))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use darwin_core::{
        Cell, Grid, InteriorKind, InteriorLayout, InteriorRegistry, IslandMeta, Room, RoomGrid,
        Terrain,
    };

    use super::*;
    use crate::movement::DIRECT_TRAVEL_FATIGUE;

    fn test_island() -> Island {
        let grid = Grid::new(vec![
            Cell::new("LANDING", (0, 0), "The Landing", Terrain::Beach)
                .with_description("A strip of dark sand.")
                .with_moves([Direction::East])
                .with_boundary(Direction::North, "The sea lies north."),
            Cell::new("SCRUB", (1, 0), "The Scrub", Terrain::Scrubland)
                .with_description("Thorn bushes and dust.")
                .with_moves([Direction::West, Direction::South])
                .with_specimens(["lava_lizard"])
                .with_npcs(["old_sailor"]),
            Cell::new("RIDGE", (1, 1), "The Ridge", Terrain::Highland)
                .with_description("Mist and ferns.")
                .with_moves([Direction::North]),
        ])
        .unwrap();
        let interiors = InteriorRegistry::new(vec![
            InteriorLayout::new(
                "longboat",
                "The Longboat",
                InteriorKind::Ship,
                "LANDING",
                RoomGrid::new(2, 1),
            )
            .with_rooms([
                Room::new("LONGBOAT_THWARTS", (0, 0), "The Thwarts")
                    .with_description("Benches and shipped oars."),
                Room::new("LONGBOAT_STERN", (1, 0), "Stern Sheets")
                    .with_description("The tiller and a locker."),
            ]),
        ])
        .unwrap();
        Island::new(IslandMeta::new("Test Islet"), grid, interiors, "LANDING").unwrap()
    }

    struct Recorder(Rc<RefCell<Vec<LocationChange>>>);

    impl LocationObserver for Recorder {
        fn location_changed(&mut self, change: &LocationChange) {
            self.0.borrow_mut().push(change.clone());
        }
    }

    #[test]
    fn session_starts_at_the_island_start() {
        let session = Expedition::new(test_island());
        assert_eq!(session.state().exterior_cell_id.as_str(), "LANDING");
        assert_eq!(session.state().exterior_position, GridPos::new(0, 0));
        assert_eq!(session.state().mode(), Mode::Exterior);
    }

    #[test]
    fn successful_move_updates_state_and_narrates() {
        let mut session = Expedition::new(test_island());
        let reply = session.handle_move("east");
        assert!(reply.success);
        assert_eq!(reply.location_id.as_deref(), Some("SCRUB"));
        assert_eq!(
            reply.message,
            "You travel east from The Landing to The Scrub. Thorn bushes and dust."
        );
        assert_eq!(reply.specimens, vec!["lava_lizard".to_string()]);
        assert_eq!(session.state().exterior_position, GridPos::new(1, 0));
    }

    #[test]
    fn blocked_move_leaves_position_unchanged() {
        let mut session = Expedition::new(test_island());
        let reply = session.handle_move("north");
        assert!(!reply.success);
        assert_eq!(reply.message, "The sea lies north.");
        assert_eq!(reply.fatigue, 0);
        assert_eq!(session.state().exterior_position, GridPos::new(0, 0));
    }

    #[test]
    fn observers_hear_every_successful_transition() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut session = Expedition::new(test_island());
        session.subscribe(Box::new(Recorder(Rc::clone(&log))));

        session.handle_move("east");
        session.handle_move("nowhere"); // fails: no push
        session.handle_move("west");
        session.enter_interior("longboat", None);
        session.exit_interior();

        let ids: Vec<String> = log
            .borrow()
            .iter()
            .map(|c| c.location_id.clone())
            .collect();
        assert_eq!(ids, vec!["SCRUB", "LANDING", "LONGBOAT_THWARTS", "LANDING"]);
    }

    #[test]
    fn travel_to_charges_the_flat_cost() {
        let mut session = Expedition::new(test_island());
        let reply = session.travel_to("RIDGE");
        assert!(reply.success);
        assert_eq!(reply.fatigue, DIRECT_TRAVEL_FATIGUE);
        assert_eq!(session.state().exterior_position, GridPos::new(1, 1));
    }

    #[test]
    fn travel_to_delegates_direction_spellings() {
        let mut session = Expedition::new(test_island());
        let reply = session.travel_to("e");
        assert!(reply.success);
        // A stepwise move, not a teleport: step fatigue applies.
        assert_eq!(reply.fatigue, crate::movement::BASE_STEP_FATIGUE);
        assert_eq!(reply.location_id.as_deref(), Some("SCRUB"));
    }

    #[test]
    fn enter_and_exit_round_trip_restores_the_exterior() {
        let mut session = Expedition::new(test_island());
        let before = session.state().clone();

        let entered = session.enter_interior("longboat", None);
        assert!(entered.success);
        assert_eq!(session.state().mode(), Mode::Interior);

        let exited = session.exit_interior();
        assert!(exited.success);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn undefined_layout_is_a_generic_refusal() {
        let mut session = Expedition::new(test_island());
        let reply = session.enter_interior("governors_mansion", None);
        assert!(!reply.success);
        assert_eq!(reply.message, "That place cannot be entered.");
        assert_eq!(reply.failure, Some(MoveFailure::CannotEnter));
    }

    #[test]
    fn enter_requires_standing_at_the_entry_cell() {
        let mut session = Expedition::new(test_island());
        session.handle_move("east");
        let reply = session.enter_interior("longboat", None);
        assert!(!reply.success);
        assert_eq!(reply.failure, Some(MoveFailure::NotAtEntrance {
            interior: "The Longboat".to_string(),
            required: "The Landing".to_string(),
        }));
    }

    #[test]
    fn interior_move_and_look_around() {
        let mut session = Expedition::new(test_island());
        session.enter_interior("longboat", None);

        let moved = session.move_in_interior("LONGBOAT_STERN");
        assert!(moved.success);
        assert!(moved.message.starts_with("You make your way"));

        let looked = session.move_in_interior("LONGBOAT_STERN");
        assert!(looked.success);
        assert!(looked.message.starts_with("You look around"));
    }

    #[test]
    fn overland_commands_refuse_while_inside() {
        let mut session = Expedition::new(test_island());
        session.enter_interior("longboat", None);

        let stepped = session.handle_move("east");
        assert_eq!(
            stepped.failure,
            Some(MoveFailure::MustExitFirst("The Longboat".to_string()))
        );
        let traveled = session.travel_to("RIDGE");
        assert_eq!(
            traveled.failure,
            Some(MoveFailure::MustExitFirst("The Longboat".to_string()))
        );
    }

    #[test]
    fn valid_directions_empty_while_inside() {
        let mut session = Expedition::new(test_island());
        assert_eq!(session.valid_directions(), vec![Direction::East]);
        session.enter_interior("longboat", None);
        assert!(session.valid_directions().is_empty());
    }

    #[test]
    fn free_text_scanner_moves_or_stays_silent() {
        let mut session = Expedition::new(test_island());

        let reply = session.scan_free_text("I think we should head east now").unwrap();
        assert!(reply.success);
        assert_eq!(session.state().exterior_cell_id.as_str(), "SCRUB");

        assert!(session.scan_free_text("the east wind was bitter").is_none());
        assert_eq!(session.state().exterior_cell_id.as_str(), "SCRUB");
    }

    #[test]
    fn free_text_scanner_inert_while_inside() {
        let mut session = Expedition::new(test_island());
        session.enter_interior("longboat", None);
        assert!(session.scan_free_text("go east").is_none());
    }

    #[test]
    fn current_location_tags_exterior_and_interior() {
        let mut session = Expedition::new(test_island());
        match session.current_location().unwrap() {
            CurrentLocation::Exterior(cell) => assert_eq!(cell.id.as_str(), "LANDING"),
            CurrentLocation::Interior { .. } => panic!("expected exterior"),
        }

        session.enter_interior("longboat", None);
        match session.current_location().unwrap() {
            CurrentLocation::Interior {
                room, entry_cell, ..
            } => {
                assert_eq!(room.id.as_str(), "LONGBOAT_THWARTS");
                assert_eq!(entry_cell.unwrap().id.as_str(), "LANDING");
            }
            CurrentLocation::Exterior(_) => panic!("expected interior"),
        }
    }

    #[test]
    fn location_view_flattens_the_snapshot() {
        let mut session = Expedition::new(test_island());
        session.enter_interior("longboat", None);
        let view = session.location_view().unwrap();
        assert_eq!(view.id, "LONGBOAT_THWARTS");
        assert!(view.valid_directions.is_empty());
        assert_eq!(
            view.interior.unwrap().exterior_location.as_str(),
            "LANDING"
        );
    }
}
