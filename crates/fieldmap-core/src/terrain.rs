//! Terrain cost table: per-code movement cost parameters.

use std::collections::HashMap;

/// Cost parameters for one terrain code.
///
/// `base_cost` must be positive, `ascent_cost` / `descent_cost`
/// non-negative and `diagonal_factor` at least 1 for the search heuristics
/// to stay admissible; tables are produced by an external loader that
/// enforces this.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCell {
    pub code: char,
    pub base_cost: f64,
    pub ascent_cost: f64,
    pub descent_cost: f64,
    pub diagonal_factor: f64,
    pub passable: bool,
}

impl TerrainCell {
    /// Create a new cell.
    pub const fn new(
        code: char,
        base_cost: f64,
        ascent_cost: f64,
        descent_cost: f64,
        diagonal_factor: f64,
        passable: bool,
    ) -> Self {
        Self {
            code,
            base_cost,
            ascent_cost,
            descent_cost,
            diagonal_factor,
            passable,
        }
    }
}

/// Fallback cell for unknown terrain codes: plain ground.
pub const DEFAULT_TERRAIN: TerrainCell = TerrainCell::new('.', 1.0, 2.0, 0.5, 1.414, true);

/// Immutable lookup table from terrain code to [`TerrainCell`].
///
/// Lookups never fail: codes absent from the table resolve to the table's
/// default cell. Tables are built once (typically by a map loader) and
/// shared read-only across searches.
#[derive(Debug, Clone)]
pub struct TerrainCostTable {
    cells: HashMap<char, TerrainCell>,
    default_cell: TerrainCell,
}

impl TerrainCostTable {
    /// Build a table from a set of cells, keyed by each cell's code.
    /// Unknown codes fall back to [`DEFAULT_TERRAIN`].
    pub fn new(cells: impl IntoIterator<Item = TerrainCell>) -> Self {
        Self::with_default(cells, DEFAULT_TERRAIN)
    }

    /// Build a table with an explicit fallback cell for unknown codes.
    pub fn with_default(
        cells: impl IntoIterator<Item = TerrainCell>,
        default_cell: TerrainCell,
    ) -> Self {
        let cells = cells.into_iter().map(|c| (c.code, c)).collect();
        Self {
            cells,
            default_cell,
        }
    }

    /// The standard terrain set used by the map format.
    ///
    /// `S` and `G` mark start and goal and cost the same as plain ground.
    pub fn standard() -> Self {
        Self::new([
            TerrainCell::new('.', 1.0, 2.0, 0.5, 1.414, true), // plain
            TerrainCell::new('=', 0.8, 2.0, 0.5, 1.414, true), // paved road
            TerrainCell::new('F', 2.0, 1.5, 1.0, 1.414, true), // forest
            TerrainCell::new('~', 3.0, 2.0, 1.0, 1.414, true), // shallow water
            TerrainCell::new('s', 2.5, 3.0, 1.0, 1.414, true), // sand
            TerrainCell::new('^', 5.0, 10.0, 3.0, 1.414, true), // cliff
            TerrainCell::new('#', 1.0, 0.0, 0.0, 1.414, false), // wall
            TerrainCell::new('S', 1.0, 2.0, 0.5, 1.414, true), // start marker
            TerrainCell::new('G', 1.0, 2.0, 0.5, 1.414, true), // goal marker
        ])
    }

    /// Look up the cell for a terrain code.
    ///
    /// Unknown codes resolve to the default cell rather than failing.
    pub fn lookup(&self, code: char) -> &TerrainCell {
        match self.cells.get(&code) {
            Some(cell) => cell,
            None => {
                log::trace!("unknown terrain code {code:?}, using default cell");
                &self.default_cell
            }
        }
    }

    /// The fallback cell returned for unknown codes.
    pub fn default_cell(&self) -> &TerrainCell {
        &self.default_cell
    }

    /// Whether `code` is present in the table (the default fallback does
    /// not count).
    pub fn contains(&self, code: char) -> bool {
        self.cells.contains_key(&code)
    }
}

impl Default for TerrainCostTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_known_codes() {
        let table = TerrainCostTable::standard();
        assert_eq!(table.lookup('.').base_cost, 1.0);
        assert_eq!(table.lookup('=').base_cost, 0.8);
        assert_eq!(table.lookup('^').base_cost, 5.0);
        assert_eq!(table.lookup('^').ascent_cost, 10.0);
        assert!(!table.lookup('#').passable);
        assert_eq!(table.lookup('S').base_cost, 1.0);
        assert_eq!(table.lookup('G').base_cost, 1.0);
    }

    #[test]
    fn unknown_code_resolves_to_default() {
        let table = TerrainCostTable::standard();
        assert!(!table.contains('?'));
        assert_eq!(table.lookup('?'), &DEFAULT_TERRAIN);
        assert!(table.lookup('?').passable);
    }

    #[test]
    fn custom_default_cell() {
        let lava = TerrainCell::new('L', 9.0, 0.0, 0.0, 1.414, false);
        let table = TerrainCostTable::with_default([], lava);
        assert_eq!(table.lookup('x'), &lava);
        assert!(!table.lookup('x').passable);
    }

    #[test]
    fn later_cell_with_same_code_wins() {
        let a = TerrainCell::new('.', 1.0, 0.0, 0.0, 1.0, true);
        let b = TerrainCell::new('.', 4.0, 0.0, 0.0, 1.0, true);
        let table = TerrainCostTable::new([a, b]);
        assert_eq!(table.lookup('.').base_cost, 4.0);
    }
}
