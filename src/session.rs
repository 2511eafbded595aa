use crate::config::SessionConfig;
use crate::grid::Grid;
use crate::input::{Hit, Layout, UiButton};
use crate::patterns::Catalog;

/// The two states of the edit/run machine. Editing holds the simulation
/// clock at rest; Running advances the grid on the step timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedKey {
    Faster,
    Slower,
}

/// Discrete input events the session consumes. How they were captured is
/// the frontend's business; coordinates are window points, `dt` is the
/// frame delta in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    PointerDown { x: f32, y: f32 },
    PointerDrag { x: f32, y: f32 },
    PointerUp,
    WheelUp,
    WheelDown,
    KeyHeld(SpeedKey),
    Tick { dt: f32 },
}

/// Read-only view of the session for one frame of rendering.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Cell states ordered by row-major index.
    pub cells: &'a [bool],
    pub grid_count: usize,
    pub mode: Mode,
    pub generation: u32,
    pub alive_count: usize,
    pub sims_per_second: f32,
    pub pattern_name: &'a str,
}

/// One interactive Game of Life session: the live grid, the edit/run state
/// machine, and the timing state that gates stepping.
///
/// Everything runs on the caller's frame loop. Each submitted `Tick`
/// performs at most one grid step; waiting for the next step is an
/// accumulator compared against `1 / sims_per_second`, never a sleep.
pub struct Session {
    config: SessionConfig,
    layout: Layout,
    catalog: Catalog,
    grid: Grid,
    mode: Mode,
    sims_per_second: f32,
    time_since_step: f32,
    generation: u32,
    alive_count: usize,
    pattern_index: usize,
    /// Most recently toggled cell of the current pointer-down gesture.
    /// Suppresses re-toggling the same cell while the button stays held.
    last_toggled: Option<usize>,
    /// Last known pointer position; button presses resolve against it on
    /// release.
    last_pointer: Option<(f32, f32)>,
}

impl Session {
    pub fn new(config: SessionConfig, catalog: Catalog) -> Self {
        let layout = Layout::new(&config);
        let pattern = catalog.at(0);
        let grid = Grid::clamped(pattern.grid_count, &pattern.alive_indices(), config.bounds);
        let alive_count = grid.alive_count();
        log::info!(
            "session created: {0}x{0} board, pattern \"{1}\"",
            grid.count(),
            pattern.name
        );
        Self {
            config,
            layout,
            catalog,
            grid,
            mode: Mode::Editing,
            sims_per_second: config.start_sims_per_second.max(0.0),
            time_since_step: f32::INFINITY,
            generation: 0,
            alive_count,
            pattern_index: 0,
            last_toggled: None,
            last_pointer: None,
        }
    }

    /// The screen layout shared between hit-testing and rendering.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            cells: self.grid.cells(),
            grid_count: self.grid.count(),
            mode: self.mode,
            generation: self.generation,
            alive_count: self.alive_count,
            sims_per_second: self.sims_per_second,
            pattern_name: self.catalog.at(self.pattern_index).name,
        }
    }

    /// Applies one input event. Never fails: anomalous positions and
    /// out-of-range requests are absorbed by no-op or clamping.
    pub fn submit(&mut self, action: Action) {
        match action {
            Action::PointerDown { x, y } | Action::PointerDrag { x, y } => self.pointer_at(x, y),
            Action::PointerUp => self.pointer_released(),
            Action::WheelUp => self.resize_grid(-1),
            Action::WheelDown => self.resize_grid(1),
            Action::KeyHeld(SpeedKey::Faster) => self.adjust_speed(self.config.speed_step),
            Action::KeyHeld(SpeedKey::Slower) => self.adjust_speed(-self.config.speed_step),
            Action::Tick { dt } => self.tick(dt),
        }
    }

    fn pointer_at(&mut self, x: f32, y: f32) {
        self.last_pointer = Some((x, y));
        if y <= self.layout.header() {
            // Header presses resolve on release.
            return;
        }

        // Drawing on the board implicitly pauses the simulation.
        if self.mode == Mode::Running {
            self.enter_editing();
        }

        match self.layout.hit_test(x, y, self.grid.count()) {
            Some(Hit::Cell(index)) if self.last_toggled != Some(index) => {
                if let Ok(alive) = self.grid.toggle(index) {
                    if alive {
                        self.alive_count += 1;
                    } else {
                        self.alive_count -= 1;
                    }
                    self.last_toggled = Some(index);
                    log::debug!("cell {index} toggled to {alive}");
                }
            }
            // Same cell within one drag gesture, or no cell at all.
            _ => {}
        }
    }

    fn pointer_released(&mut self) {
        self.last_toggled = None;
        let Some((x, y)) = self.last_pointer else {
            return;
        };
        if y > self.layout.header() {
            return;
        }
        if let Some(Hit::Button(button)) = self.layout.hit_test(x, y, self.grid.count()) {
            self.press_button(button);
        }
    }

    fn press_button(&mut self, button: UiButton) {
        match button {
            UiButton::StartStop => self.toggle_run_state(),
            UiButton::Reset => self.reset(),
            UiButton::PrevPattern => self.select_pattern(-1),
            UiButton::NextPattern => self.select_pattern(1),
        }
    }

    fn toggle_run_state(&mut self) {
        match self.mode {
            Mode::Editing => {
                self.mode = Mode::Running;
                log::info!("simulation started at {} sims/s", self.sims_per_second);
            }
            Mode::Running => {
                self.enter_editing();
                log::info!("simulation stopped");
            }
        }
    }

    /// Re-enters Editing: the generation counter returns to zero and the
    /// step accumulator is parked above any interval, so the next run's
    /// first step fires immediately.
    fn enter_editing(&mut self) {
        self.mode = Mode::Editing;
        self.generation = 0;
        self.time_since_step = f32::INFINITY;
    }

    /// Re-seeds the board from the current pattern, keeping the current
    /// board size. Seed cells beyond a smaller board are dropped.
    fn reset(&mut self) {
        let pattern = self.catalog.at(self.pattern_index);
        let name = pattern.name;
        let seed = pattern.alive_indices();
        self.grid = Grid::clamped(self.grid.count(), &seed, self.config.bounds);
        self.alive_count = self.grid.alive_count();
        self.enter_editing();
        log::info!("board reset to pattern \"{name}\"");
    }

    /// Moves the catalog cursor cyclically and rebuilds the board from the
    /// new pattern's seed at the pattern's own size.
    fn select_pattern(&mut self, step: i32) {
        self.pattern_index = if step < 0 {
            self.catalog.prev(self.pattern_index)
        } else {
            self.catalog.next(self.pattern_index)
        };
        let pattern = self.catalog.at(self.pattern_index);
        let name = pattern.name;
        let count = pattern.grid_count;
        let seed = pattern.alive_indices();
        self.grid = Grid::clamped(count, &seed, self.config.bounds);
        self.alive_count = self.grid.alive_count();
        self.enter_editing();
        log::info!("pattern \"{name}\" selected ({count}x{count} board)");
    }

    /// Grows or shrinks the board by one cell per side, clamped into
    /// bounds. A resize is a canvas operation: the new board is empty.
    fn resize_grid(&mut self, delta: i32) {
        let target = (self.grid.count() as i32 + delta).max(0) as usize;
        self.grid = Grid::clamped(target, &[], self.config.bounds);
        self.alive_count = 0;
        self.enter_editing();
        log::info!("board resized to {0}x{0}", self.grid.count());
    }

    fn adjust_speed(&mut self, delta: f32) {
        self.sims_per_second =
            (self.sims_per_second + delta).clamp(0.0, self.config.max_sims_per_second);
    }

    /// Advances the clock. In Running mode, performs one grid step once
    /// the accumulator reaches the step interval; the excess beyond the
    /// threshold is dropped, so the effective rate never exceeds the
    /// configured one. At a rate of zero the board is frozen and time
    /// simply accumulates.
    fn tick(&mut self, dt: f32) {
        if self.mode != Mode::Running {
            return;
        }
        if self.sims_per_second > 0.0 && self.time_since_step >= 1.0 / self.sims_per_second {
            let (next, alive) = self.grid.step();
            self.grid = next;
            self.alive_count = alive;
            self.generation += 1;
            self.time_since_step = 0.0;
        } else {
            self.time_since_step += dt;
        }
    }
}
