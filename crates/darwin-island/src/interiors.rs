//! The interior layouts of Isla Floreana.
//!
//! The cabin and the caves are both entered from Cave Hollow — one
//! exterior cell, two interiors.

use darwin_core::{InteriorKind, InteriorLayout, Room, RoomGrid};

/// Every interior layout, in authoring order.
pub(crate) fn layouts() -> Vec<InteriorLayout> {
    vec![beagle(), watkins_cabin(), pirate_caves(), governors_house()]
}

fn beagle() -> InteriorLayout {
    InteriorLayout::new(
        "hms_beagle",
        "HMS Beagle",
        InteriorKind::Ship,
        "POST_OFFICE_BAY",
        RoomGrid::new(4, 2),
    )
    .with_description(
        "A ten-gun brig-sloop of ninety feet, crowded from stem to stern \
         with instruments, stores, and twenty-two chronometers.",
    )
    .with_rooms([
        Room::new("BEAGLE_BOW", (0, 0), "The Bow")
            .with_description(
                "The forward deck, where the anchor cables run out through the \
                 hawseholes. Spray comes over the rail with every swell.",
            ),
        Room::new("BEAGLE_FOREDECK", (1, 0), "Foredeck")
            .with_description(
                "Coiled lines and the galley smoke-pipe. Off-watch sailors \
                 mend clothes in the lee of the boats.",
            ),
        Room::new("BEAGLE_MAINDECK", (2, 0), "Main Deck")
            .with_description(
                "The waist of the ship, busy with the boatswain's party. The \
                 whaleboats hang at their davits overhead.",
            )
            .with_npcs(["john_wickham"]),
        Room::new("BEAGLE_QUARTERDECK", (3, 0), "Quarterdeck")
            .with_description(
                "The captain's walk abaft the wheel, holystoned white. \
                 Conversation here is by invitation.",
            )
            .with_npcs(["captain_fitzroy"]),
        Room::new("BEAGLE_FORE_HOLD", (0, 1), "Fore Hold")
            .with_description(
                "Casks, crates, and the sour smell of bilgewater. Your specimen \
                 barrels are lashed against the foremast step.",
            )
            .with_specimens(["specimen_casks"]),
        Room::new("BEAGLE_CREW_QUARTERS", (1, 1), "Crew Quarters")
            .with_description(
                "Hammocks slung fourteen inches apart, struck and stowed by \
                 day. A lantern swings with the roll.",
            ),
        Room::new("BEAGLE_CHART_ROOM", (2, 1), "Chart Room")
            .with_description(
                "Charts of the archipelago weighted open on the table, the \
                 soundings inked in FitzRoy's precise hand.",
            ),
        Room::new("BEAGLE_POOP_CABIN", (3, 1), "Poop Cabin")
            .with_description(
                "Your own corner of the ship: the chart table you work at, the \
                 drawers of shells and skins, your hammock slung above it all.",
            )
            .with_specimens(["collecting_chest", "specimen_jars"]),
    ])
}

fn watkins_cabin() -> InteriorLayout {
    InteriorLayout::new(
        "watkins_cabin",
        "Watkins' Cabin",
        InteriorKind::Building,
        "CAVE_HOLLOW",
        RoomGrid::new(1, 1),
    )
    .with_description(
        "The ruin left by Patrick Watkins, the island's first and strangest \
         settler, who grew potatoes here and traded them to whalers for rum.",
    )
    .with_rooms([
        Room::new("WATKINS_CABIN_INTERIOR", (0, 0), "Inside Watkins' Cabin")
            .with_description(
                "A single low room of planks and whale-rib, roofed with thatch \
                 gone grey. A broken spade and a litter of bottle glass are all \
                 the furniture that remains.",
            )
            .with_specimens(["potato_patch_remnant"]),
    ])
}

fn pirate_caves() -> InteriorLayout {
    InteriorLayout::new(
        "pirate_caves",
        "Pirate Caves",
        InteriorKind::Cave,
        "CAVE_HOLLOW",
        RoomGrid::new(2, 2),
    )
    .with_description(
        "Chambers cut into the soft tuff by buccaneers watering here a \
         century and more ago.",
    )
    .with_rooms([
        Room::new("CAVES_ENTRY", (0, 0), "Cave Mouth")
            .with_description(
                "Daylight reaches a few yards into the cool of the rock. Old \
                 soot stains the ceiling.",
            ),
        Room::new("CAVES_CARVED_CHAMBER", (1, 0), "Carved Chamber")
            .with_description(
                "Benches and niches hewn square out of the living tuff, and \
                 initials of dead men cut beside them.",
            )
            .with_npcs(["gabriel_puig"]),
        Room::new("CAVES_SPRING_POOL", (0, 1), "Spring Pool")
            .with_description(
                "A seep of fresh water gathers in a stone basin, dripping \
                 somewhere back in the dark.",
            )
            .with_specimens(["cave_cricket"]),
        Room::new("CAVES_COLLAPSED_GALLERY", (1, 1), "Collapsed Gallery")
            .with_description(
                "A fall of rock chokes the passage; only a black gap at the \
                 top hints at the chamber beyond.",
            )
            .inaccessible(),
    ])
}

fn governors_house() -> InteriorLayout {
    InteriorLayout::new(
        "governors_house",
        "Governor's House",
        InteriorKind::Building,
        "SETTLEMENT",
        RoomGrid::new(2, 1),
    )
    .with_description(
        "The residence of the acting governor of the penal colony, the \
         largest building the island can claim.",
    )
    .with_rooms([
        Room::new("GOVERNORS_PARLOR", (0, 0), "Governor's Parlor")
            .with_description(
                "Whitewashed walls, a mainland table, and a shelf of ledgers. \
                 Señor Lawson receives visitors with mainland formality.",
            )
            .with_npcs(["nicolas_lawson"]),
        Room::new("GOVERNORS_VERANDA", (1, 0), "Veranda")
            .with_description(
                "A shaded platform looking down the slope to the sea. Tortoise \
                 shells are stacked like washbasins along the rail.",
            ),
    ])
}
