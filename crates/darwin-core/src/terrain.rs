//! Terrain categories for exterior cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The terrain category of an exterior cell.
///
/// Known categories cover the island content; `Custom(String)` admits
/// user-authored islands with terrain the core has no opinion about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Terrain {
    /// Sheltered anchorage water reachable on foot at the shore.
    Bay,
    /// Sand or shingle shoreline.
    Beach,
    /// Rocky coastline and bluffs.
    Coastal,
    /// Dry brush and cactus country.
    Scrubland,
    /// Palo santo and scalesia woodland.
    Forest,
    /// Lagoon, marsh, or spring-fed ground.
    Wetland,
    /// Steep volcanic uplands. Tiring to climb.
    Highland,
    /// Broken basalt flows. Rough footing.
    LavaField,
    /// Cleared and inhabited ground.
    Settlement,
    /// A terrain category not known to the core.
    Custom(String),
}

impl Terrain {
    /// The camelCase label for this terrain, matching its data form.
    ///
    /// This label participates in name-based cell lookup alongside the
    /// cell's display name.
    pub fn label(&self) -> &str {
        match self {
            Self::Bay => "bay",
            Self::Beach => "beach",
            Self::Coastal => "coastal",
            Self::Scrubland => "scrubland",
            Self::Forest => "forest",
            Self::Wetland => "wetland",
            Self::Highland => "highland",
            Self::LavaField => "lavaField",
            Self::Settlement => "settlement",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_camel_case() {
        assert_eq!(Terrain::LavaField.label(), "lavaField");
        assert_eq!(Terrain::Highland.label(), "highland");
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Terrain::LavaField).unwrap();
        assert_eq!(json, "\"lavaField\"");
        let back: Terrain = serde_json::from_str("\"highland\"").unwrap();
        assert_eq!(back, Terrain::Highland);
    }

    #[test]
    fn custom_terrain_keeps_its_label() {
        let t = Terrain::Custom("mangrove".to_string());
        assert_eq!(t.label(), "mangrove");
    }
}
