//! Brick grid and level template

/// The single level layout. 0 = empty, otherwise the hits a brick takes.
pub const LEVEL_MAP: [[u8; 10]; 4] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 3, 1, 1, 3, 0, 0, 0],
    [0, 0, 0, 0, 3, 3, 0, 0, 0, 0],
];

/// Live brick layout: durability per (row, col)
///
/// The grid always owns its rows. Building one from the template or from a
/// restored map copies every row, so mutating the live grid never touches
/// the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickGrid {
    cells: Vec<Vec<u8>>,
    remaining: u32,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::from_level()
    }
}

impl BrickGrid {
    /// Fresh grid from the level template
    pub fn from_level() -> Self {
        Self::from_rows(LEVEL_MAP.iter().map(|row| row.as_slice()))
    }

    /// Grid from a previously stored map (copied row by row)
    pub fn from_map(map: &[Vec<u8>]) -> Self {
        Self::from_rows(map.iter().map(Vec::as_slice))
    }

    fn from_rows<'a>(rows: impl Iterator<Item = &'a [u8]>) -> Self {
        let mut grid = Self {
            cells: rows.map(<[u8]>::to_vec).collect(),
            remaining: 0,
        };
        grid.recount();
        grid
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Column count (width of the widest row)
    pub fn cols(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Durability at a cell; 0 for absent or out-of-range cells
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    /// Read-only view of the rows
    pub fn map(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// Apply one hit to a cell. Returns true when the brick was destroyed.
    ///
    /// Hitting an absent or out-of-range cell does nothing.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
            return false;
        };
        let destroyed = match *cell {
            0 => return false,
            1 => {
                *cell = 0;
                true
            }
            _ => {
                *cell -= 1;
                false
            }
        };
        self.recount();
        destroyed
    }

    /// Iterate live bricks as (row, col, durability)
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &d)| d > 0)
                .map(move |(c, &d)| (r, c, d))
        })
    }

    fn recount(&mut self) {
        self.remaining = self.cells.iter().flatten().filter(|&&d| d > 0).count() as u32;
    }
}
