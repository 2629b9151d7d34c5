use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellId, GridPos};
use crate::error::{IslandError, IslandResult};
use crate::terrain::Terrain;

/// Lightweight cell record for map rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSummary {
    /// The cell's unique key.
    pub id: CellId,
    /// Display name.
    pub name: String,
    /// Column on the exterior grid.
    pub x: i32,
    /// Row on the exterior grid.
    pub y: i32,
    /// Terrain category.
    pub terrain: Terrain,
}

/// The read-only exterior grid: every cell of the island, indexed by id
/// and by coordinates.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    by_id: HashMap<CellId, usize>,
    by_pos: HashMap<(i32, i32), usize>,
}

impl Grid {
    /// Build a grid from authored cells.
    ///
    /// Fails on duplicate ids or duplicate coordinates. A move authored
    /// toward coordinates with no cell is legal data — it fails at run
    /// time as "leads nowhere" — but is logged as an authoring warning.
    pub fn new(cells: Vec<Cell>) -> IslandResult<Self> {
        let mut by_id = HashMap::new();
        let mut by_pos = HashMap::new();

        for (index, cell) in cells.iter().enumerate() {
            if by_id.insert(cell.id.clone(), index).is_some() {
                return Err(IslandError::DuplicateCellId(cell.id.clone()));
            }
            if by_pos.insert((cell.x, cell.y), index).is_some() {
                return Err(IslandError::DuplicateCellPosition {
                    x: cell.x,
                    y: cell.y,
                });
            }
        }

        let grid = Self {
            cells,
            by_id,
            by_pos,
        };
        grid.warn_dangling_moves();
        Ok(grid)
    }

    fn warn_dangling_moves(&self) {
        for cell in &self.cells {
            for &dir in &cell.valid_moves {
                let dest = cell.position().step(dir);
                if self.cell_at(dest.x, dest.y).is_none() {
                    log::warn!(
                        "cell {} allows {} but no cell exists at {}",
                        cell.id,
                        dir.abbreviation(),
                        dest
                    );
                }
            }
        }
    }

    /// Look up a cell by its unique id.
    pub fn cell_by_id(&self, id: &str) -> Option<&Cell> {
        self.by_id.get(&CellId::new(id)).map(|&i| &self.cells[i])
    }

    /// Look up the cell at the given coordinates.
    ///
    /// This is the primary position-to-cell resolution; absence means
    /// the coordinates lie off the map or in a data gap.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.by_pos.get(&(x, y)).map(|&i| &self.cells[i])
    }

    /// Look up the cell at the given position.
    pub fn cell_at_pos(&self, pos: GridPos) -> Option<&Cell> {
        self.cell_at(pos.x, pos.y)
    }

    /// Look up a cell by display name or terrain label, case-insensitively.
    ///
    /// Neither names nor terrain labels are unique; the first match in
    /// declaration order wins. Callers wanting a precise handle should use
    /// [`Grid::cell_by_id`].
    pub fn cell_by_name(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| {
            c.name.eq_ignore_ascii_case(name) || c.terrain.label().eq_ignore_ascii_case(name)
        })
    }

    /// Lightweight summaries of every cell, in declaration order.
    pub fn summaries(&self) -> Vec<CellSummary> {
        self.cells
            .iter()
            .map(|c| CellSummary {
                id: c.id.clone(),
                name: c.name.clone(),
                x: c.x,
                y: c.y,
                terrain: c.terrain.clone(),
            })
            .collect()
    }

    /// Iterate over every cell in declaration order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
