use crate::config::SessionConfig;

/// Axis-aligned rectangle in window points. Containment is closed on all
/// four edges, matching how the header buttons and cells are hit-tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// The fixed controls in the header band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiButton {
    StartStop,
    Reset,
    PrevPattern,
    NextPattern,
}

/// What a pointer position resolves to. A position matching neither a
/// button nor a cell resolves to no hit at all, which callers ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell(usize),
    Button(UiButton),
}

/// Maps window positions to semantic targets and, for the renderer, the
/// other way around: the same rectangles drive hit-testing and painting,
/// so the two can never disagree.
///
/// The window splits at `header` into the button band above and the cell
/// board below. Cell rectangles tile the board evenly for the current
/// grid dimension.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    width: f32,
    height: f32,
    header: f32,
    start: Rect,
    reset: Rect,
    prev: Rect,
    next: Rect,
}

impl Layout {
    pub fn new(config: &SessionConfig) -> Self {
        let center = config.window_width / 2.0;
        Self {
            width: config.window_width,
            height: config.window_height,
            header: config.header_height,
            start: Rect { x: center - 50.0, y: 10.0, w: 100.0, h: 25.0 },
            reset: Rect { x: center + 60.0, y: 10.0, w: 100.0, h: 25.0 },
            prev: Rect { x: center - 170.0, y: 10.0, w: 50.0, h: 25.0 },
            next: Rect { x: center + 170.0, y: 10.0, w: 50.0, h: 25.0 },
        }
    }

    pub fn header(&self) -> f32 {
        self.header
    }

    pub fn button_rect(&self, button: UiButton) -> Rect {
        match button {
            UiButton::StartStop => self.start,
            UiButton::Reset => self.reset,
            UiButton::PrevPattern => self.prev,
            UiButton::NextPattern => self.next,
        }
    }

    /// Side lengths of one cell rectangle for the given grid dimension.
    pub fn cell_size(&self, grid_count: usize) -> (f32, f32) {
        (
            self.width / grid_count as f32,
            (self.height - self.header) / grid_count as f32,
        )
    }

    /// Rectangle of the cell at `index`, used by the renderer.
    pub fn cell_rect(&self, index: usize, grid_count: usize) -> Rect {
        let (w, h) = self.cell_size(grid_count);
        let row = index / grid_count;
        let col = index % grid_count;
        Rect {
            x: col as f32 * w,
            y: self.header + row as f32 * h,
            w,
            h,
        }
    }

    /// Resolves a pointer position. Positions in the header band test
    /// against the button rectangles; positions below it resolve to a cell
    /// by stride arithmetic, with board-edge points belonging to the last
    /// row/column.
    pub fn hit_test(&self, x: f32, y: f32, grid_count: usize) -> Option<Hit> {
        if y <= self.header {
            return [
                UiButton::StartStop,
                UiButton::Reset,
                UiButton::PrevPattern,
                UiButton::NextPattern,
            ]
            .into_iter()
            .find(|&button| self.button_rect(button).contains(x, y))
            .map(Hit::Button);
        }
        self.locate_cell(x, y, grid_count).map(Hit::Cell)
    }

    fn locate_cell(&self, x: f32, y: f32, grid_count: usize) -> Option<usize> {
        if grid_count == 0 || x < 0.0 || x > self.width || y > self.height {
            return None;
        }
        let (w, h) = self.cell_size(grid_count);
        let col = ((x / w) as usize).min(grid_count - 1);
        let row = (((y - self.header) / h) as usize).min(grid_count - 1);
        Some(row * grid_count + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 720x800 window with an 80-point header: a 10-cell board has
    // 72x72-point cells starting at y = 80.
    fn layout() -> Layout {
        Layout::new(&SessionConfig::default())
    }

    #[test]
    fn test_button_containment_is_closed_interval() {
        let layout = layout();
        let rect = layout.button_rect(UiButton::StartStop); // (310, 10) 100x25
        assert_eq!(
            layout.hit_test(310.0, 10.0, 10),
            Some(Hit::Button(UiButton::StartStop))
        );
        assert_eq!(
            layout.hit_test(410.0, 35.0, 10),
            Some(Hit::Button(UiButton::StartStop))
        );
        assert_eq!(layout.hit_test(rect.x - 1.0, 20.0, 10), None);
        assert_eq!(layout.hit_test(rect.x + rect.w + 1.0, 20.0, 10), None);
    }

    #[test]
    fn test_all_buttons_resolve() {
        let layout = layout();
        for button in [
            UiButton::StartStop,
            UiButton::Reset,
            UiButton::PrevPattern,
            UiButton::NextPattern,
        ] {
            let rect = layout.button_rect(button);
            let hit = layout.hit_test(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0, 10);
            assert_eq!(hit, Some(Hit::Button(button)));
        }
    }

    #[test]
    fn test_header_band_never_resolves_to_a_cell() {
        let layout = layout();
        // Dead zone between buttons, still inside the header band.
        assert_eq!(layout.hit_test(5.0, 79.0, 10), None);
        assert_eq!(layout.hit_test(5.0, 80.0, 10), None);
    }

    #[test]
    fn test_cells_resolve_by_position() {
        let layout = layout();
        assert_eq!(layout.hit_test(1.0, 81.0, 10), Some(Hit::Cell(0)));
        // (100, 250) with 72x72 cells: col 1, row 2.
        assert_eq!(layout.hit_test(100.0, 250.0, 10), Some(Hit::Cell(21)));
    }

    #[test]
    fn test_board_edges_belong_to_the_last_row_and_column() {
        let layout = layout();
        assert_eq!(layout.hit_test(720.0, 800.0, 10), Some(Hit::Cell(99)));
        assert_eq!(layout.hit_test(0.0, 800.0, 10), Some(Hit::Cell(90)));
    }

    #[test]
    fn test_positions_off_the_window_do_not_match() {
        let layout = layout();
        assert_eq!(layout.hit_test(-1.0, 100.0, 10), None);
        assert_eq!(layout.hit_test(721.0, 100.0, 10), None);
        assert_eq!(layout.hit_test(100.0, 801.0, 10), None);
    }

    #[test]
    fn test_cell_rects_tile_the_board() {
        let layout = layout();
        let rect = layout.cell_rect(21, 10);
        assert_eq!(rect.x, 72.0);
        assert_eq!(rect.y, 80.0 + 144.0);
        assert_eq!(rect.w, 72.0);
        assert_eq!(rect.h, 72.0);
    }
}
