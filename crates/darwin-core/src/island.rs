//! The island container: grid, interiors, and metadata as one model.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellId};
use crate::error::{IslandError, IslandResult};
use crate::grid::Grid;
use crate::interior::{InteriorLayout, InteriorRegistry};

/// Metadata about the island itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslandMeta {
    /// Display name, e.g. "Isla Floreana".
    pub name: String,
    /// Narrative description of the island as a whole.
    #[serde(default)]
    pub description: String,
}

impl IslandMeta {
    /// Create metadata with an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set the narrative description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A complete island: validated grid, interior registry, and the fixed
/// starting cell.
///
/// An island can be constructed programmatically from content literals
/// or deserialized from JSON; either way the same validation runs, so a
/// well-formed `Island` value always has a resolvable start cell and
/// every interior anchored to a real exterior cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "IslandDef", into = "IslandDef")]
pub struct Island {
    meta: IslandMeta,
    grid: Grid,
    interiors: InteriorRegistry,
    start: CellId,
}

impl Island {
    /// Assemble and validate an island.
    ///
    /// Fails if the start cell does not resolve in the grid, or if any
    /// interior layout's `exterior_location` does not resolve.
    pub fn new(
        meta: IslandMeta,
        grid: Grid,
        interiors: InteriorRegistry,
        start: impl Into<CellId>,
    ) -> IslandResult<Self> {
        let start = start.into();
        if grid.cell_by_id(start.as_str()).is_none() {
            return Err(IslandError::UnknownStart(start));
        }
        for layout in interiors.layouts() {
            if grid.cell_by_id(layout.exterior_location.as_str()).is_none() {
                return Err(IslandError::DanglingEntrance {
                    layout: layout.id.clone(),
                    cell: layout.exterior_location.clone(),
                });
            }
        }
        Ok(Self {
            meta,
            grid,
            interiors,
            start,
        })
    }

    /// The island's metadata.
    pub fn meta(&self) -> &IslandMeta {
        &self.meta
    }

    /// The exterior grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The interior layout registry.
    pub fn interiors(&self) -> &InteriorRegistry {
        &self.interiors
    }

    /// The id of the fixed starting cell.
    pub fn start(&self) -> &CellId {
        &self.start
    }
}

/// The raw serde form of an island, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IslandDef {
    /// Island metadata.
    pub meta: IslandMeta,
    /// Every exterior cell.
    pub cells: Vec<Cell>,
    /// Every interior layout.
    #[serde(default)]
    pub interiors: Vec<InteriorLayout>,
    /// Id of the starting cell.
    pub start: CellId,
}

impl TryFrom<IslandDef> for Island {
    type Error = IslandError;

    fn try_from(def: IslandDef) -> IslandResult<Self> {
        let grid = Grid::new(def.cells)?;
        let interiors = InteriorRegistry::new(def.interiors)?;
        Island::new(def.meta, grid, interiors, def.start)
    }
}

impl From<Island> for IslandDef {
    fn from(island: Island) -> Self {
        Self {
            meta: island.meta,
            cells: island.grid.cells().cloned().collect(),
            interiors: island.interiors.layouts().cloned().collect(),
            start: island.start,
        }
    }
}
