//! The exterior movement processor.
//!
//! A single stepwise move resolves the direction, gates it against the
//! current cell's authored movement table, and produces either a fully
//! described outcome or a narratable failure with the position unchanged.

use darwin_core::{Cell, CellId, Direction, Grid, GridPos, Terrain};

use crate::error::{ExpeditionResult, MoveFailure};
use crate::narrator;

/// Fatigue charged for any single grid step.
pub const BASE_STEP_FATIGUE: u32 = 6;
/// Extra fatigue when the destination is highland. Steep, tiring.
pub const HIGHLAND_SURCHARGE: u32 = 7;
/// Extra fatigue when the destination is lava field. Rough footing.
pub const LAVA_FIELD_SURCHARGE: u32 = 3;
/// Flat fatigue charged for direct travel to a cell by id, regardless
/// of distance. This constant is the single source of truth for what
/// direct travel costs; any distance-based travel-time display is
/// flavor computed elsewhere.
pub const DIRECT_TRAVEL_FATIGUE: u32 = 10;

/// The terrain surcharge for arriving on the given terrain.
pub fn terrain_surcharge(terrain: &Terrain) -> u32 {
    match terrain {
        Terrain::Highland => HIGHLAND_SURCHARGE,
        Terrain::LavaField => LAVA_FIELD_SURCHARGE,
        _ => 0,
    }
}

/// A fully described successful move.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// The new exterior position.
    pub position: GridPos,
    /// The destination cell's id.
    pub cell_id: CellId,
    /// The destination cell's display name.
    pub cell_name: String,
    /// The narrated sentence for this move.
    pub message: String,
    /// Fatigue charged for the move.
    pub fatigue: u32,
    /// Specimens listed for the destination.
    pub specimens: Vec<String>,
    /// NPCs listed for the destination.
    pub npcs: Vec<String>,
}

impl StepOutcome {
    fn arrival(to: &Cell, message: String, fatigue: u32) -> Self {
        Self {
            position: to.position(),
            cell_id: to.id.clone(),
            cell_name: to.name.clone(),
            message,
            fatigue,
            specimens: to.specimens.clone(),
            npcs: to.npcs.clone(),
        }
    }
}

/// Attempt a single stepwise move from `position`.
///
/// Failure leaves the caller's position unchanged by construction: the
/// outcome carries the new position only on success.
pub fn step(grid: &Grid, position: GridPos, input: &str) -> ExpeditionResult<StepOutcome> {
    let direction =
        Direction::parse(input).ok_or_else(|| MoveFailure::InvalidDirection(input.to_string()))?;

    let current = grid
        .cell_at_pos(position)
        .ok_or(MoveFailure::UnknownPosition)?;

    if !current.allows(direction) {
        // An authored boundary outranks the stock sentence.
        return Err(match current.boundary(direction) {
            Some(reason) => MoveFailure::Blocked(reason.to_string()),
            None => MoveFailure::BlockedGeneric(direction),
        });
    }

    let destination = position.step(direction);
    let to = grid
        .cell_at_pos(destination)
        .ok_or(MoveFailure::NoDestination(direction))?;

    let fatigue = BASE_STEP_FATIGUE + terrain_surcharge(&to.terrain);
    let message = narrator::travel_sentence(direction, current, to);
    Ok(StepOutcome::arrival(to, message, fatigue))
}

/// Travel directly to the cell with the given id, bypassing adjacency
/// and direction checks, at the flat direct-travel fatigue cost.
pub fn travel_to(grid: &Grid, target: &str) -> ExpeditionResult<StepOutcome> {
    let to = grid
        .cell_by_id(target)
        .ok_or_else(|| MoveFailure::UnknownLocation(target.to_string()))?;

    let message = narrator::direct_travel_sentence(to);
    Ok(StepOutcome::arrival(to, message, DIRECT_TRAVEL_FATIGUE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shore_grid() -> Grid {
        Grid::new(vec![
            Cell::new("SHORE", (0, 0), "The Shore", Terrain::Beach)
                .with_moves([Direction::East, Direction::South])
                .with_boundary(Direction::North, "The surf bars the way north."),
            Cell::new("FLATS", (1, 0), "The Flats", Terrain::LavaField)
                .with_description("Black rock in frozen waves.")
                .with_moves([Direction::West, Direction::South])
                .with_specimens(["lava_lizard"]),
            Cell::new("HEIGHTS", (0, 1), "The Heights", Terrain::Highland)
                .with_moves([Direction::North]),
        ])
        .unwrap()
    }

    #[test]
    fn successful_step_narrates_and_charges_fatigue() {
        let grid = shore_grid();
        let outcome = step(&grid, GridPos::new(0, 0), "east").unwrap();
        assert_eq!(outcome.position, GridPos::new(1, 0));
        assert_eq!(outcome.cell_id.as_str(), "FLATS");
        assert_eq!(
            outcome.message,
            "You travel east from The Shore to The Flats. Black rock in frozen waves."
        );
        assert_eq!(outcome.fatigue, BASE_STEP_FATIGUE + LAVA_FIELD_SURCHARGE);
        assert_eq!(outcome.specimens, vec!["lava_lizard".to_string()]);
    }

    #[test]
    fn highland_surcharge_applies() {
        let grid = shore_grid();
        let outcome = step(&grid, GridPos::new(0, 0), "s").unwrap();
        assert_eq!(outcome.fatigue, BASE_STEP_FATIGUE + HIGHLAND_SURCHARGE);
    }

    #[test]
    fn invalid_direction_fails() {
        let grid = shore_grid();
        let err = step(&grid, GridPos::new(0, 0), "sideways").unwrap_err();
        assert_eq!(err, MoveFailure::InvalidDirection("sideways".to_string()));
    }

    #[test]
    fn boundary_prose_outranks_generic_sentence() {
        let grid = shore_grid();
        let err = step(&grid, GridPos::new(0, 0), "north").unwrap_err();
        assert_eq!(
            err,
            MoveFailure::Blocked("The surf bars the way north.".to_string())
        );
    }

    #[test]
    fn disallowed_without_boundary_is_generic() {
        let grid = shore_grid();
        let err = step(&grid, GridPos::new(0, 0), "west").unwrap_err();
        assert_eq!(err, MoveFailure::BlockedGeneric(Direction::West));
        assert_eq!(err.to_string(), "You cannot travel west from here.");
    }

    #[test]
    fn allowed_move_into_empty_ground_leads_nowhere() {
        let grid = shore_grid();
        // FLATS allows south but no cell exists at (1, 1).
        let err = step(&grid, GridPos::new(1, 0), "south").unwrap_err();
        assert_eq!(err, MoveFailure::NoDestination(Direction::South));
    }

    #[test]
    fn step_from_undefined_position_fails() {
        let grid = shore_grid();
        let err = step(&grid, GridPos::new(9, 9), "north").unwrap_err();
        assert_eq!(err, MoveFailure::UnknownPosition);
    }

    #[test]
    fn abbreviation_and_word_agree() {
        let grid = shore_grid();
        let by_word = step(&grid, GridPos::new(0, 0), "east").unwrap();
        let by_abbr = step(&grid, GridPos::new(0, 0), "E").unwrap();
        assert_eq!(by_word, by_abbr);
    }

    #[test]
    fn direct_travel_charges_the_flat_cost() {
        let grid = shore_grid();
        let outcome = travel_to(&grid, "HEIGHTS").unwrap();
        assert_eq!(outcome.fatigue, DIRECT_TRAVEL_FATIGUE);
        assert_eq!(outcome.position, GridPos::new(0, 1));
    }

    #[test]
    fn direct_travel_to_unknown_id_fails() {
        let grid = shore_grid();
        let err = travel_to(&grid, "ATLANTIS").unwrap_err();
        assert_eq!(err, MoveFailure::UnknownLocation("ATLANTIS".to_string()));
    }
}
