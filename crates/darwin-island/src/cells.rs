//! The exterior grid of Isla Floreana, 1835.
//!
//! Twenty-five cells on a five-by-five grid. Valid moves are authored to
//! match real neighbors; where the sea or a cliff blocks travel toward an
//! existing edge, a boundary entry carries the obstruction prose.

use darwin_core::Direction::{self, East, North, Northeast, Northwest, South, Southeast, Southwest, West};
use darwin_core::{Cell, Terrain};

const ALL_EIGHT: [Direction; 8] = Direction::ALL;

/// Every exterior cell, in authoring order.
pub(crate) fn cells() -> Vec<Cell> {
    vec![
        // Row 0 — the north coast
        Cell::new("DEVILS_CROWN", (0, 0), "Devil's Crown Overlook", Terrain::Coastal)
            .with_description(
                "A ragged half-sunken crater rises from the swell offshore, ringed \
                 with wheeling seabirds. The tide pools at your feet teem with life.",
            )
            .with_color("#8a7f6d")
            .with_moves([East, Southeast, South])
            .with_boundary(
                West,
                "The drowned crater lies across a channel of racing current; no \
                 swimmer would survive the crossing.",
            )
            .with_boundary(
                North,
                "Open sea stretches north without a foothold.",
            )
            .with_specimens(["sally_lightfoot_crab", "marine_iguana", "frigatebird"]),
        Cell::new("POST_OFFICE_BAY", (1, 0), "Post Office Bay", Terrain::Bay)
            .with_description(
                "A quiet anchorage of dark sand and scattered driftwood. A barrel \
                 on a post serves whalers as an unattended post office, and the \
                 Beagle rides at anchor in the bay.",
            )
            .with_color("#5b7f9e")
            .with_moves([East, Southeast, South, Southwest, West])
            .with_boundary(
                North,
                "The bay opens into the sea to the north; without the ship's \
                 launch you can go no further.",
            )
            .with_specimens(["galapagos_sea_lion", "sally_lightfoot_crab"])
            .with_npcs(["syms_covington"]),
        Cell::new("NORTHERN_SHORE", (2, 0), "Northern Shore", Terrain::Beach)
            .with_description(
                "A long strand of coral rubble and bleached shells. Turtle tracks \
                 run from the waterline to pits dug above the tide mark.",
            )
            .with_color("#c9b98a")
            .with_moves([East, Southeast, South, Southwest, West])
            .with_specimens(["green_sea_turtle", "lava_heron"]),
        Cell::new("MANGROVE_THICKET", (3, 0), "Mangrove Thicket", Terrain::Wetland)
            .with_description(
                "Red mangroves stand knee-deep in brackish water, their prop roots \
                 knotted into a maze. Herons stalk the shallows between them.",
            )
            .with_color("#4f7250")
            .with_moves([East, Southeast, South, Southwest, West])
            .with_specimens(["lava_heron", "mangrove_finch"]),
        Cell::new("PUNTA_CORMORANT", (4, 0), "Punta Cormorant", Terrain::Coastal)
            .with_description(
                "A green-tinged beach of olivine sand behind a rocky point. \
                 Boobies nest on the slopes above, indifferent to your approach.",
            )
            .with_color("#7f8f6d")
            .with_moves([South, Southwest, West])
            .with_boundary(
                East,
                "The point drops into green surf; there is no footing beyond.",
            )
            .with_specimens(["blue_footed_booby", "green_sea_turtle"]),
        // Row 1 — behind the coast
        Cell::new("BLACK_BEACH", (0, 1), "Black Beach", Terrain::Beach)
            .with_description(
                "Volcanic sand black as coal, hot underfoot by mid-morning. This \
                 is the island's landing place; a track climbs inland toward the \
                 settlement.",
            )
            .with_color("#3d3a36")
            .with_moves([North, Northeast, East, Southeast, South])
            .with_boundary(
                West,
                "Breakers pound the black sand; the sea allows no path west.",
            )
            .with_specimens(["marine_iguana", "galapagos_sea_lion"])
            .with_npcs(["lascar_joe"]),
        Cell::new("COASTAL_SCRUB", (1, 1), "Coastal Scrub", Terrain::Scrubland)
            .with_description(
                "Thorn bushes and grey saltbush on broken ground. Finches move \
                 through the branches in small restless flocks.",
            )
            .with_color("#9a8f62")
            .with_moves(ALL_EIGHT)
            .with_specimens(["medium_ground_finch", "lava_lizard", "galapagos_dove"]),
        Cell::new("PALO_SANTO_WOOD", (2, 1), "Palo Santo Woodland", Terrain::Forest)
            .with_description(
                "Pale leafless palo santo trees cover the slope like a standing \
                 fog. The air carries their faint incense.",
            )
            .with_color("#8d9b7a")
            .with_moves(ALL_EIGHT)
            .with_specimens(["vermilion_flycatcher", "galapagos_dove"]),
        Cell::new("LAVA_FLATS", (3, 1), "Lava Flats", Terrain::LavaField)
            .with_description(
                "A field of ropy pahoehoe and clinker, sharp enough to cut boot \
                 leather. Lizards bask on the black slabs.",
            )
            .with_color("#4a4440")
            .with_moves(ALL_EIGHT)
            .with_specimens(["lava_lizard", "lava_cactus"]),
        Cell::new("EASTERN_CLIFFS", (4, 1), "Eastern Cliffs", Terrain::Coastal)
            .with_description(
                "Basalt ramparts stand over the sea. Tropicbirds launch from \
                 ledges streaked white with guano.",
            )
            .with_color("#6d665e")
            .with_moves([North, Northwest, West, Southwest, South])
            .with_boundary(East, "The cliffs fall sheer to the sea.")
            .with_specimens(["red_billed_tropicbird", "frigatebird"]),
        // Row 2 — the middle of the island
        Cell::new("WESTERN_SHORE", (0, 2), "Western Shore", Terrain::Beach)
            .with_description(
                "A narrow shelf of sand between lava points. Sea lions haul out \
                 here in the afternoon heat.",
            )
            .with_color("#bda87f")
            .with_moves([North, Northeast, East, Southeast, South])
            .with_boundary(West, "Surf closes the shore to the west.")
            .with_specimens(["galapagos_sea_lion", "marine_iguana"]),
        Cell::new("SETTLEMENT", (1, 2), "The Settlement", Terrain::Settlement)
            .with_description(
                "A straggle of huts and garden plots on the lower slope, peopled \
                 by convicts deported from the mainland. The governor's house \
                 stands apart behind a paling fence.",
            )
            .with_color("#a4764a")
            .with_moves(ALL_EIGHT)
            .with_npcs(["nicolas_lawson", "maria_yupanqui"]),
        Cell::new("CERRO_PAJAS", (2, 2), "Cerro Pajas", Terrain::Highland)
            .with_description(
                "The island's highest ground, green with ferns and grasses where \
                 the garúa mist settles. The crater rim gives a view of the whole \
                 island.",
            )
            .with_color("#5f7a4f")
            .with_moves(ALL_EIGHT)
            .with_specimens(["galapagos_hawk", "dark_billed_cuckoo"]),
        Cell::new("CAVE_HOLLOW", (3, 2), "Cave Hollow", Terrain::Highland)
            .with_description(
                "A sheltered hollow below the crater rim. Caves open in the tuff \
                 wall, and a ruined cabin of planks and whale-rib stands in the \
                 grass before them.",
            )
            .with_color("#6b7a55")
            .with_moves(ALL_EIGHT)
            .with_specimens(["floreana_mockingbird", "cactus_finch"]),
        Cell::new("EASTERN_LAVA_FIELD", (4, 2), "Eastern Lava Field", Terrain::LavaField)
            .with_description(
                "Block lava stacked in frozen waves, crossed only by the thin \
                 trails of tortoises going to water.",
            )
            .with_color("#524a44")
            .with_moves([North, Northwest, West, Southwest, South])
            .with_specimens(["lava_lizard", "galapagos_tortoise"]),
        // Row 3 — the southern uplands
        Cell::new("SOUTHWEST_POINT", (0, 3), "Southwest Point", Terrain::Coastal)
            .with_description(
                "Wind-bitten headland grass and salt spray. Petrels skim the \
                 swell below the rocks.",
            )
            .with_color("#7d8474")
            .with_moves([North, Northeast, East, Southeast, South])
            .with_boundary(
                West,
                "Waves break against the point; there is nothing west but ocean.",
            )
            .with_specimens(["galapagos_petrel"]),
        Cell::new("FRESHWATER_SPRING", (1, 3), "Freshwater Spring", Terrain::Wetland)
            .with_description(
                "A spring seeps from the rock into a chain of clear pools — the \
                 only sweet water on the island, fenced about with trampled mud \
                 and tortoise tracks.",
            )
            .with_color("#55785f")
            .with_moves(ALL_EIGHT)
            .with_specimens(["galapagos_tortoise", "common_gallinule"])
            .with_npcs(["maria_yupanqui"]),
        Cell::new("HIGHLAND_MEADOW", (2, 3), "Highland Meadow", Terrain::Highland)
            .with_description(
                "Open grassland in the mist belt, cropped short by tortoises. \
                 Hawks watch from the scattered scalesia trees.",
            )
            .with_color("#64824f")
            .with_moves(ALL_EIGHT)
            .with_specimens(["galapagos_tortoise", "galapagos_hawk", "scalesia_tree"]),
        Cell::new("TORTOISE_GROUNDS", (3, 3), "Tortoise Grounds", Terrain::Scrubland)
            .with_description(
                "Broad tortoise trails converge here from every quarter of the \
                 island, worn smooth by generations of shells.",
            )
            .with_color("#98885f")
            .with_moves(ALL_EIGHT)
            .with_specimens(["galapagos_tortoise", "cactus_finch", "opuntia_cactus"]),
        Cell::new("SOUTHEASTERN_BLUFFS", (4, 3), "Southeastern Bluffs", Terrain::Coastal)
            .with_description(
                "Crumbling tuff bluffs stepped down toward the southern shore. \
                 Doves pick through the fallen rubble.",
            )
            .with_color("#857a66")
            .with_moves([North, Northwest, West, Southwest, South])
            .with_boundary(East, "The bluffs break away into the sea.")
            .with_specimens(["galapagos_dove", "lava_lizard"]),
        // Row 4 — the south coast
        Cell::new("SEA_LION_ROOKERY", (0, 4), "Sea Lion Rookery", Terrain::Beach)
            .with_description(
                "A crowded rookery loud with barking bulls and mewling pups. The \
                 smell arrives long before the sand does.",
            )
            .with_color("#c0a878")
            .with_moves([North, Northeast, East])
            .with_boundary(South, "The rookery ends at open water.")
            .with_specimens(["galapagos_sea_lion", "galapagos_penguin"]),
        Cell::new("SOUTHERN_BEACH", (1, 4), "Southern Beach", Terrain::Beach)
            .with_description(
                "A white crescent of coral sand facing the long southern swell. \
                 Turtle nests pock the upper beach.",
            )
            .with_color("#d3c49a")
            .with_moves([North, Northeast, East, Northwest, West])
            .with_boundary(
                South,
                "The southern surf is heavy; no boat could land and no walker \
                 could pass.",
            )
            .with_specimens(["green_sea_turtle", "sally_lightfoot_crab"]),
        Cell::new("FLAMINGO_LAGOON", (2, 4), "Flamingo Lagoon", Terrain::Wetland)
            .with_description(
                "A shallow brine lagoon behind the dunes, pink at its far edge \
                 with feeding flamingoes.",
            )
            .with_color("#9a7f8a")
            .with_moves([North, Northeast, East, Northwest, West])
            .with_specimens(["greater_flamingo", "black_necked_stilt"]),
        Cell::new("SOUTHERN_SCRUB", (3, 4), "Southern Scrub", Terrain::Scrubland)
            .with_description(
                "Low thorn scrub running down to the dunes, alive with finches \
                 after the brief rains.",
            )
            .with_color("#93875e")
            .with_moves([North, Northeast, East, Northwest, West])
            .with_specimens(["medium_ground_finch", "galapagos_mockingbird"]),
        Cell::new("PUNTA_SUR", (4, 4), "Punta Sur", Terrain::Coastal)
            .with_description(
                "The island's southern extremity, all wind and spray. Albatrosses \
                 pass far out over the whitecaps.",
            )
            .with_color("#70757f")
            .with_moves([North, Northwest, West])
            .with_boundary(South, "Beyond the point there is only the Southern Ocean.")
            .with_specimens(["waved_albatross", "blue_footed_booby"]),
    ]
}
