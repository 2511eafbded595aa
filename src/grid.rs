use crate::config::GridBounds;
use std::fmt;

/// Anomalies on direct grid access. Neither variant crosses the session's
/// external interface; call sites correct by clamping or drop the access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    InvalidDimension { count: usize, min: usize, max: usize },
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { count, min, max } => {
                write!(f, "grid dimension {count} outside [{min}, {max}]")
            }
            GridError::IndexOutOfRange { index, len } => {
                write!(f, "cell index {index} out of range for {len} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A square board of cells, stored as a flat row-major buffer
/// (`index = row * count + col`). The cheapest representation that still
/// lets neighbor lookups stay in one allocation.
///
/// A `Grid` is a value: `step` builds a fresh successor and never aliases
/// cell storage with the generation it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    count: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a `count x count` grid with the given cells alive. Seed
    /// indices outside the board are dropped silently.
    pub fn new(count: usize, alive: &[usize], bounds: GridBounds) -> Result<Self, GridError> {
        if !bounds.contains(count) {
            return Err(GridError::InvalidDimension {
                count,
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(Self::seeded(count, alive))
    }

    /// Infallible variant of [`Grid::new`]: the dimension is clamped into
    /// bounds instead of reported. Used where an out-of-range request is a
    /// correctable user action, not an error.
    pub fn clamped(count: usize, alive: &[usize], bounds: GridBounds) -> Self {
        Self::seeded(bounds.clamp(count), alive)
    }

    fn seeded(count: usize, alive: &[usize]) -> Self {
        let mut cells = vec![false; count * count];
        for &index in alive {
            if let Some(cell) = cells.get_mut(index) {
                *cell = true;
            }
        }
        Self { count, cells }
    }

    /// Cells per side.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of cells (`count * count`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell states ordered by index.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    pub fn at(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.count && col < self.count).then(|| self.cells[row * self.count + col])
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, GridError> {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = !*cell;
                Ok(*cell)
            }
            None => Err(GridError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            }),
        }
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Number of alive cells among the up-to-8 adjacent positions. Edges
    /// are hard boundaries: positions off the board are excluded from the
    /// count, so corners see at most 3 and edge cells at most 5.
    pub fn neighbor_count(&self, index: usize) -> u8 {
        if index >= self.cells.len() {
            return 0;
        }
        let count = self.count as isize;
        let row = index as isize / count;
        let col = index as isize % count;

        let mut neighbors = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (r, c) = (row + dr, col + dc);
                if r < 0 || r >= count || c < 0 || c >= count {
                    continue;
                }
                if self.cells[(r * count + c) as usize] {
                    neighbors += 1;
                }
            }
        }
        neighbors
    }

    /// Produces the next generation (B3/S23) together with its alive-cell
    /// count. Every cell is judged against the *current* generation only;
    /// the successor lives in its own buffer until the caller commits it.
    pub fn step(&self) -> (Grid, usize) {
        let mut next = vec![false; self.cells.len()];
        let mut alive = 0;

        for (index, &was_alive) in self.cells.iter().enumerate() {
            let neighbors = self.neighbor_count(index);
            let lives = if was_alive {
                (2..=3).contains(&neighbors)
            } else {
                neighbors == 3
            };
            if lives {
                alive += 1;
            }
            next[index] = lives;
        }

        (
            Grid {
                count: self.count,
                cells: next,
            },
            alive,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: GridBounds = GridBounds { min: 3, max: 120 };

    fn grid(count: usize, alive: &[usize]) -> Grid {
        Grid::new(count, alive, BOUNDS).unwrap()
    }

    /// Converts (row, col) pairs to flat indices for readable seeds.
    fn indices(count: usize, cells: &[(usize, usize)]) -> Vec<usize> {
        cells.iter().map(|&(r, c)| r * count + c).collect()
    }

    #[test]
    fn test_new_rejects_out_of_bounds_dimension() {
        assert_eq!(
            Grid::new(2, &[], BOUNDS),
            Err(GridError::InvalidDimension {
                count: 2,
                min: 3,
                max: 120
            })
        );
        assert!(Grid::new(121, &[], BOUNDS).is_err());
        assert!(Grid::new(3, &[], BOUNDS).is_ok());
        assert!(Grid::new(120, &[], BOUNDS).is_ok());
    }

    #[test]
    fn test_clamped_corrects_dimension() {
        assert_eq!(Grid::clamped(0, &[], BOUNDS).count(), 3);
        assert_eq!(Grid::clamped(500, &[], BOUNDS).count(), 120);
        assert_eq!(Grid::clamped(50, &[], BOUNDS).count(), 50);
    }

    #[test]
    fn test_seed_indices_out_of_range_are_dropped() {
        let g = grid(3, &[0, 8, 9, 100]);
        assert_eq!(g.alive_count(), 2);
        assert_eq!(g.get(0), Some(true));
        assert_eq!(g.get(8), Some(true));
    }

    #[test]
    fn test_toggle_flips_and_reports_new_state() {
        let mut g = grid(3, &[]);
        assert_eq!(g.toggle(4), Ok(true));
        assert_eq!(g.get(4), Some(true));
        assert_eq!(g.toggle(4), Ok(false));
        assert_eq!(g.get(4), Some(false));
    }

    #[test]
    fn test_toggle_out_of_range_is_an_error() {
        let mut g = grid(3, &[]);
        assert_eq!(
            g.toggle(9),
            Err(GridError::IndexOutOfRange { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_neighbor_count_respects_hard_boundaries() {
        // Fully alive 4x4 board: every cell counts exactly its real
        // adjacency, never phantom wrapped neighbors.
        let g = grid(4, &(0..16).collect::<Vec<_>>());
        assert_eq!(g.neighbor_count(0), 3); // corner
        assert_eq!(g.neighbor_count(3), 3); // corner
        assert_eq!(g.neighbor_count(12), 3); // corner
        assert_eq!(g.neighbor_count(15), 3); // corner
        assert_eq!(g.neighbor_count(1), 5); // top edge
        assert_eq!(g.neighbor_count(7), 5); // right edge
        assert_eq!(g.neighbor_count(5), 8); // interior
        for index in 0..16 {
            assert!(g.neighbor_count(index) <= 8);
        }
    }

    #[test]
    fn test_all_dead_grid_stays_dead() {
        let g = grid(10, &[]);
        let (next, alive) = g.step();
        assert_eq!(alive, 0);
        assert_eq!(next, g);
    }

    #[test]
    fn test_l_tromino_births_the_diagonal_cell() {
        // Dead cell with exactly 3 alive neighbors comes alive, for every
        // orientation of the corner tromino.
        let orientations: [&[(usize, usize)]; 4] = [
            &[(1, 1), (1, 2), (2, 1)], // missing corner at (2, 2)
            &[(1, 1), (1, 2), (2, 2)], // missing corner at (2, 1)
            &[(1, 1), (2, 1), (2, 2)], // missing corner at (1, 2)
            &[(1, 2), (2, 1), (2, 2)], // missing corner at (1, 1)
        ];
        let corners = [(2, 2), (2, 1), (1, 2), (1, 1)];

        for (cells, corner) in orientations.iter().zip(corners) {
            let g = grid(5, &indices(5, cells));
            let (next, _) = g.step();
            assert_eq!(
                next.at(corner.0, corner.1),
                Some(true),
                "corner {corner:?} should be born"
            );
        }
    }

    #[test]
    fn test_block_is_a_fixed_point() {
        let g = grid(6, &indices(6, &[(2, 2), (2, 3), (3, 2), (3, 3)]));
        let (next, alive) = g.step();
        assert_eq!(alive, 4);
        assert_eq!(next, g);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let g = grid(5, &indices(5, &[(2, 1), (2, 2), (2, 3)]));
        let (once, _) = g.step();
        assert_ne!(once, g);
        let (twice, _) = once.step();
        assert_eq!(twice, g);
    }

    #[test]
    fn test_step_does_not_mutate_the_current_generation() {
        let g = grid(5, &indices(5, &[(2, 1), (2, 2), (2, 3)]));
        let before = g.clone();
        let _ = g.step();
        assert_eq!(g, before);
    }

    #[test]
    fn test_step_alive_count_matches_census() {
        let g = grid(8, &[0, 1, 2, 9, 10, 20, 35, 36, 37, 44]);
        let (next, alive) = g.step();
        assert_eq!(alive, next.alive_count());
    }
}
