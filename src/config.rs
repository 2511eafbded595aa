/// Inclusive range of legal grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min: usize,
    pub max: usize,
}

impl GridBounds {
    pub fn contains(self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    pub fn clamp(self, count: usize) -> usize {
        count.clamp(self.min, self.max)
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self { min: 3, max: 120 }
    }
}

/// Constants the simulation core depends on. Supplied at session
/// construction; the core hard-codes none of these.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Window width in points; the board spans the full width.
    pub window_width: f32,
    /// Window height in points, header band included.
    pub window_height: f32,
    /// Height of the header band holding status text and buttons.
    /// Everything below it is the cell board.
    pub header_height: f32,
    pub bounds: GridBounds,
    /// Step rate the session starts with.
    pub start_sims_per_second: f32,
    /// Rate change applied per frame while a speed key is held.
    pub speed_step: f32,
    /// Ceiling for the step rate. The floor is always 0 (frozen).
    pub max_sims_per_second: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_width: 720.0,
            window_height: 800.0,
            header_height: 80.0,
            bounds: GridBounds::default(),
            start_sims_per_second: 2.5,
            speed_step: 0.05,
            max_sims_per_second: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_is_inclusive() {
        let bounds = GridBounds { min: 3, max: 120 };
        assert!(bounds.contains(3));
        assert!(bounds.contains(120));
        assert!(!bounds.contains(2));
        assert!(!bounds.contains(121));
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = GridBounds { min: 3, max: 120 };
        assert_eq!(bounds.clamp(0), 3);
        assert_eq!(bounds.clamp(50), 50);
        assert_eq!(bounds.clamp(500), 120);
    }
}
