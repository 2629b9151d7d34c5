//! Narrative phrasing for navigation outcomes.
//!
//! The navigation core narrates its own results so that success and
//! failure read alike to the player. Phrasing here is part of the
//! engine's contract — tests pin the travel sentence — so there is no
//! configurable tone.

use darwin_core::{Cell, Direction, InteriorKind, InteriorLayout, Room};

/// The sentence for one successful exterior step.
pub fn travel_sentence(direction: Direction, from: &Cell, to: &Cell) -> String {
    format!(
        "You travel {} from {} to {}. {}",
        direction, from.name, to.name, to.description
    )
}

/// The sentence for direct travel to a cell by id.
pub fn direct_travel_sentence(to: &Cell) -> String {
    format!("You make your way to {}. {}", to.name, to.description)
}

/// The sentence for entering an interior and arriving in a room.
pub fn entry_sentence(layout: &InteriorLayout, room: &Room) -> String {
    let verb = match layout.kind {
        InteriorKind::Ship => "go aboard",
        InteriorKind::Building => "enter",
        InteriorKind::Cave => "step into",
    };
    format!(
        "You {} {} and find your way to {}. {}",
        verb, layout.name, room.name, room.description
    )
}

/// The sentence for leaving an interior. Disembarking a ship is
/// narratively distinct from stepping out of a building or cave.
pub fn exit_sentence(kind: InteriorKind, interior_name: &str, outside_name: &str) -> String {
    match kind {
        InteriorKind::Ship => format!(
            "You go over the side of {interior_name} and come ashore at {outside_name}."
        ),
        InteriorKind::Building => {
            format!("You step out of {interior_name} into {outside_name}.")
        }
        InteriorKind::Cave => format!(
            "You come out of {interior_name} into the light of {outside_name}."
        ),
    }
}

/// The sentence for moving to another room within an interior.
pub fn room_move_sentence(room: &Room) -> String {
    format!("You make your way to {}. {}", room.name, room.description)
}

/// The sentence for re-examining the room the player already occupies.
pub fn look_around_sentence(room: &Room) -> String {
    format!("You look around {}. {}", room.name, room.description)
}

/// A display line listing specimens present, if any.
pub fn specimens_line(specimens: &[String]) -> Option<String> {
    if specimens.is_empty() {
        None
    } else {
        Some(format!("Specimens here: {}.", specimens.join(", ")))
    }
}

/// Display lines for NPCs present, one per figure.
pub fn npc_lines(npcs: &[String]) -> Vec<String> {
    npcs.iter().map(|n| format!("{n} is here.")).collect()
}
