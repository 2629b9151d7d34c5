//! Built-in Isla Floreana content for Young Darwin.
//!
//! The expedition opens in September 1835 with the Beagle at anchor in
//! Post Office Bay. This crate authors the island as code literals and
//! validates it through the same path as JSON-loaded islands, so a
//! mistake in the content fails fast at startup rather than mid-game.

use darwin_core::{Island, IslandMeta, IslandResult};

mod cells;
mod interiors;

/// Id of the fixed starting cell.
pub const START: &str = "POST_OFFICE_BAY";

/// Build the built-in island.
///
/// Construction runs full content validation; an error here means the
/// authored content itself is defective.
pub fn island() -> IslandResult<Island> {
    let grid = darwin_core::Grid::new(cells::cells())?;
    let interiors = darwin_core::InteriorRegistry::new(interiors::layouts())?;
    Island::new(
        IslandMeta::new("Isla Floreana").with_description(
            "A volcanic island of the Galápagos, September 1835: black lava \
             shores, misted highlands, a penal settlement, and one good spring.",
        ),
        grid,
        interiors,
        START,
    )
}

#[cfg(test)]
mod tests {
    use darwin_core::{Direction, GridPos};

    use super::*;

    #[test]
    fn island_content_validates() {
        let island = island().unwrap();
        assert_eq!(island.grid().len(), 25);
        assert_eq!(island.interiors().len(), 4);
    }

    #[test]
    fn start_is_post_office_bay_at_one_zero() {
        let island = island().unwrap();
        let start = island.grid().cell_by_id(island.start().as_str()).unwrap();
        assert_eq!(start.id.as_str(), "POST_OFFICE_BAY");
        assert_eq!(start.position(), GridPos::new(1, 0));
    }

    #[test]
    fn post_office_bay_excludes_north() {
        let island = island().unwrap();
        let bay = island.grid().cell_by_id("POST_OFFICE_BAY").unwrap();
        assert!(!bay.allows(Direction::North));
        assert!(bay.boundary(Direction::North).is_some());
    }

    #[test]
    fn every_valid_move_leads_to_a_cell() {
        let island = island().unwrap();
        for cell in island.grid().cells() {
            for &dir in &cell.valid_moves {
                let dest = cell.position().step(dir);
                assert!(
                    island.grid().cell_at_pos(dest).is_some(),
                    "{} allows {} toward empty {}",
                    cell.id,
                    dir.abbreviation(),
                    dest
                );
            }
        }
    }

    #[test]
    fn boundaries_only_cover_blocked_directions() {
        let island = island().unwrap();
        for cell in island.grid().cells() {
            for dir in cell.boundaries.keys() {
                assert!(
                    !cell.allows(*dir),
                    "{} has boundary prose for permitted direction {}",
                    cell.id,
                    dir.abbreviation()
                );
            }
        }
    }

    #[test]
    fn beagle_first_room_is_the_bow() {
        let island = island().unwrap();
        let beagle = island.interiors().get("hms_beagle").unwrap();
        assert_eq!(beagle.first_room().unwrap().id.as_str(), "BEAGLE_BOW");
        assert_eq!(beagle.grid.width, 4);
        assert_eq!(beagle.grid.height, 2);
    }

    #[test]
    fn quarterdeck_is_three_columns_abaft_the_bow() {
        let island = island().unwrap();
        let beagle = island.interiors().get("hms_beagle").unwrap();
        let bow = beagle.room_by_id("BEAGLE_BOW").unwrap();
        let quarterdeck = beagle.room_by_id("BEAGLE_QUARTERDECK").unwrap();
        assert_eq!(quarterdeck.x - bow.x, 3);
        assert_eq!(quarterdeck.y, bow.y);
    }

    #[test]
    fn watkins_cabin_is_single_cell() {
        let island = island().unwrap();
        let cabin = island.interiors().get("watkins_cabin").unwrap();
        assert!(cabin.grid.is_single_cell());
        assert_eq!(
            cabin.first_room().unwrap().id.as_str(),
            "WATKINS_CABIN_INTERIOR"
        );
    }

    #[test]
    fn cave_hollow_hosts_two_interiors() {
        let island = island().unwrap();
        let at = island.interiors().layouts_at("CAVE_HOLLOW");
        assert_eq!(at.len(), 2);
    }

    #[test]
    fn collapsed_gallery_is_inaccessible() {
        let island = island().unwrap();
        let caves = island.interiors().get("pirate_caves").unwrap();
        assert!(!caves.room_by_id("CAVES_COLLAPSED_GALLERY").unwrap().accessible);
    }

    #[test]
    fn island_round_trips_through_json() {
        let island = island().unwrap();
        let json = serde_json::to_string(&island).unwrap();
        let back: Island = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grid().len(), 25);
        assert_eq!(back.interiors().len(), 4);
        assert_eq!(back.start().as_str(), START);
    }
}
