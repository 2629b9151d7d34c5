//! End-to-end navigation over the built-in Isla Floreana content.

use darwin_core::GridPos;
use darwin_expedition::movement::DIRECT_TRAVEL_FATIGUE;
use darwin_expedition::{Expedition, Mode, MoveFailure};

fn expedition() -> Expedition {
    Expedition::new(darwin_island::island().unwrap())
}

#[test]
fn the_expedition_opens_in_post_office_bay() {
    let session = expedition();
    assert_eq!(session.state().exterior_cell_id.as_str(), "POST_OFFICE_BAY");
    assert_eq!(session.state().exterior_position, GridPos::new(1, 0));
}

#[test]
fn north_from_post_office_bay_is_refused() {
    let mut session = expedition();
    let reply = session.handle_move("north");
    assert!(!reply.success);
    assert_eq!(session.state().exterior_position, GridPos::new(1, 0));
    // The bay has authored prose for the blocked direction.
    assert!(matches!(reply.failure, Some(MoveFailure::Blocked(_))));
}

#[test]
fn walking_south_reaches_the_coastal_scrub() {
    let mut session = expedition();
    let reply = session.handle_move("south");
    assert!(reply.success);
    assert_eq!(reply.location_id.as_deref(), Some("COASTAL_SCRUB"));
    assert!(reply.message.starts_with("You travel south from Post Office Bay to Coastal Scrub."));
}

#[test]
fn teleport_fatigue_is_constant_across_destinations() {
    let island = darwin_island::island().unwrap();
    let targets: Vec<String> = island
        .grid()
        .summaries()
        .into_iter()
        .map(|s| s.id.to_string())
        .collect();

    let mut session = Expedition::new(island);
    for target in targets {
        let reply = session.travel_to(&target);
        assert!(reply.success, "travel to {target} failed");
        assert_eq!(reply.fatigue, DIRECT_TRAVEL_FATIGUE, "fatigue for {target}");
    }
}

#[test]
fn boarding_the_beagle_lands_at_the_bow() {
    let mut session = expedition();
    let reply = session.enter_interior("hms_beagle", None);
    assert!(reply.success);
    assert_eq!(reply.location_id.as_deref(), Some("BEAGLE_BOW"));
    assert_eq!(session.state().mode(), Mode::Interior);
}

#[test]
fn bow_to_quarterdeck_is_not_adjacent() {
    let mut session = expedition();
    session.enter_interior("hms_beagle", None);
    let reply = session.move_in_interior("BEAGLE_QUARTERDECK");
    assert!(!reply.success);
    assert!(matches!(
        reply.failure,
        Some(MoveFailure::RoomNotAdjacent(_))
    ));
    // Still at the bow.
    let view = session.location_view().unwrap();
    assert_eq!(view.id, "BEAGLE_BOW");
}

#[test]
fn walking_the_deck_room_by_room() {
    let mut session = expedition();
    session.enter_interior("hms_beagle", None);
    for room in ["BEAGLE_FOREDECK", "BEAGLE_MAINDECK", "BEAGLE_QUARTERDECK"] {
        let reply = session.move_in_interior(room);
        assert!(reply.success, "move to {room} failed: {}", reply.message);
    }
    let view = session.location_view().unwrap();
    assert_eq!(view.npcs, vec!["captain_fitzroy".to_string()]);
}

#[test]
fn watkins_cabin_single_room_always_permits_the_move() {
    let mut session = expedition();
    session.travel_to("CAVE_HOLLOW");
    let entered = session.enter_interior("watkins_cabin", None);
    assert!(entered.success);
    let reply = session.move_in_interior("WATKINS_CABIN_INTERIOR");
    assert!(reply.success);
    assert!(reply.message.starts_with("You look around"));
}

#[test]
fn the_collapsed_gallery_refuses_entry() {
    let mut session = expedition();
    session.travel_to("CAVE_HOLLOW");
    session.enter_interior("pirate_caves", None);
    session.move_in_interior("CAVES_CARVED_CHAMBER");
    let reply = session.move_in_interior("CAVES_COLLAPSED_GALLERY");
    assert!(!reply.success);
    assert!(matches!(
        reply.failure,
        Some(MoveFailure::RoomInaccessible(_))
    ));
}

#[test]
fn one_hollow_two_interiors() {
    let mut session = expedition();
    session.travel_to("CAVE_HOLLOW");

    let cabin = session.enter_interior("watkins_cabin", None);
    assert!(cabin.success);
    session.exit_interior();

    let caves = session.enter_interior("pirate_caves", None);
    assert!(caves.success);
}

#[test]
fn entry_gating_holds_for_every_layout() {
    let island = darwin_island::island().unwrap();
    let layouts: Vec<(String, String)> = island
        .interiors()
        .layouts()
        .map(|l| (l.id.to_string(), l.exterior_location.to_string()))
        .collect();

    for (layout_id, entry_cell) in layouts {
        // From a cell that is never an entry point, entering must fail.
        let mut session =
            Expedition::at_cell(darwin_island::island().unwrap(), "DEVILS_CROWN").unwrap();
        let reply = session.enter_interior(&layout_id, None);
        assert!(
            matches!(reply.failure, Some(MoveFailure::NotAtEntrance { .. })),
            "{layout_id} entered from the wrong cell"
        );

        // From its declared entry cell, entering must succeed.
        let mut session =
            Expedition::at_cell(darwin_island::island().unwrap(), &entry_cell).unwrap();
        let reply = session.enter_interior(&layout_id, None);
        assert!(reply.success, "{layout_id} refused from {entry_cell}");
    }
}

#[test]
fn round_trip_restores_the_exterior_for_every_layout() {
    let island = darwin_island::island().unwrap();
    let layouts: Vec<(String, String)> = island
        .interiors()
        .layouts()
        .map(|l| (l.id.to_string(), l.exterior_location.to_string()))
        .collect();

    for (layout_id, entry_cell) in layouts {
        let mut session =
            Expedition::at_cell(darwin_island::island().unwrap(), &entry_cell).unwrap();
        let before = session.state().clone();

        assert!(session.enter_interior(&layout_id, None).success);
        let exited = session.exit_interior();
        assert!(exited.success);
        assert_eq!(session.state(), &before, "round trip through {layout_id}");
    }
}

#[test]
fn disembarking_reads_differently_from_stepping_out() {
    let mut session = expedition();
    session.enter_interior("hms_beagle", None);
    let off_ship = session.exit_interior();
    assert!(off_ship.message.contains("come ashore"));

    session.travel_to("SETTLEMENT");
    session.enter_interior("governors_house", None);
    let out_of_house = session.exit_interior();
    assert!(out_of_house.message.contains("step out"));
}

#[test]
fn journal_text_can_move_the_expedition() {
    let mut session = expedition();
    let reply = session
        .scan_free_text("After breakfast we walk east along the strand.")
        .unwrap();
    assert!(reply.success);
    assert_eq!(session.state().exterior_cell_id.as_str(), "NORTHERN_SHORE");

    // Mentions of compass points without a movement verb do nothing.
    assert!(
        session
            .scan_free_text("The north wind held all morning.")
            .is_none()
    );
}
