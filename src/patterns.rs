/// Named seed configurations for the board.
///
/// Each pattern carries its own board dimension; switching to a pattern
/// adopts that dimension. Seed cells are kept as `(row, col)` pairs and
/// lowered to flat indices against the pattern's own dimension.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub grid_count: usize,
    cells: &'static [(usize, usize)],
}

impl Pattern {
    pub const fn new(name: &'static str, grid_count: usize, cells: &'static [(usize, usize)]) -> Self {
        Self {
            name,
            grid_count,
            cells,
        }
    }

    /// Row-major indices of the initially-alive cells. Cells outside the
    /// pattern's own board are dropped.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|&&(row, col)| row < self.grid_count && col < self.grid_count)
            .map(|&(row, col)| row * self.grid_count + col)
            .collect()
    }
}

const EMPTY: Pattern = Pattern::new("Empty", 50, &[]);

const GLIDER: Pattern = Pattern::new("Glider", 30, &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)]);

const BLINKER: Pattern = Pattern::new("Blinker", 20, &[(10, 9), (10, 10), (10, 11)]);

const TOAD: Pattern = Pattern::new(
    "Toad",
    20,
    &[(9, 10), (9, 11), (9, 12), (10, 9), (10, 10), (10, 11)],
);

const BEACON: Pattern = Pattern::new(
    "Beacon",
    20,
    &[
        (8, 8),
        (8, 9),
        (9, 8),
        (9, 9),
        (10, 10),
        (10, 11),
        (11, 10),
        (11, 11),
    ],
);

#[rustfmt::skip]
const PULSAR: Pattern = Pattern::new(
    "Pulsar",
    40,
    &[
        // Top half
        (20, 24), (20, 25), (20, 26), (20, 30), (20, 31), (20, 32),
        (22, 22), (22, 27), (22, 29), (22, 34),
        (23, 22), (23, 27), (23, 29), (23, 34),
        (24, 22), (24, 27), (24, 29), (24, 34),
        (25, 24), (25, 25), (25, 26), (25, 30), (25, 31), (25, 32),
        // Bottom half (mirrored)
        (27, 24), (27, 25), (27, 26), (27, 30), (27, 31), (27, 32),
        (28, 22), (28, 27), (28, 29), (28, 34),
        (29, 22), (29, 27), (29, 29), (29, 34),
        (30, 22), (30, 27), (30, 29), (30, 34),
        (32, 24), (32, 25), (32, 26), (32, 30), (32, 31), (32, 32),
    ],
);

const R_PENTOMINO: Pattern = Pattern::new(
    "R-pentomino",
    50,
    &[(24, 26), (25, 25), (25, 26), (26, 24), (26, 25)],
);

#[rustfmt::skip]
const GOSPER_GLIDER_GUN: Pattern = Pattern::new(
    "Gosper Glider Gun",
    50,
    &[
        (5, 1), (5, 2), (6, 1), (6, 2),
        (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
        (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
        (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
        (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
        (3, 35), (4, 35), (3, 36), (4, 36),
    ],
);

/// Fixed, ordered list of patterns, navigated by cyclic index. Read-only
/// once built and never empty: an empty input list degrades to the empty
/// pattern alone.
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<Pattern>,
}

impl Catalog {
    pub fn new(mut patterns: Vec<Pattern>) -> Self {
        if patterns.is_empty() {
            patterns.push(EMPTY);
        }
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn at(&self, index: usize) -> &Pattern {
        &self.patterns[index % self.patterns.len()]
    }

    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.patterns.len()
    }

    pub fn prev(&self, index: usize) -> usize {
        if index == 0 {
            self.patterns.len() - 1
        } else {
            index - 1
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            EMPTY,
            GLIDER,
            BLINKER,
            TOAD,
            BEACON,
            PULSAR,
            R_PENTOMINO,
            GOSPER_GLIDER_GUN,
        ])
    }
}
