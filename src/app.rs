use eframe::egui;

use crate::input::{Rect, UiButton};
use crate::session::{Action, Mode, Session, SpeedKey};

// Palette and cell chrome carried over from the session's look: dark board,
// ember-colored live cells with a red border glow.
const COLOR_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);
const COLOR_CELL_DEAD: egui::Color32 = egui::Color32::from_rgb(20, 20, 0);
const COLOR_CELL_ALIVE: egui::Color32 = egui::Color32::from_rgba_premultiplied(78, 16, 0, 200);
const COLOR_CELL_BORDER_DEAD: egui::Color32 = egui::Color32::from_rgba_premultiplied(81, 14, 19, 90);
const COLOR_CELL_BORDER_ALIVE: egui::Color32 = egui::Color32::from_rgb(230, 41, 55);
const COLOR_TEXT: egui::Color32 = egui::Color32::WHITE;

const CELL_PADDING: f32 = 1.0;
const CELL_BORDER_WIDTH: f32 = 3.0;

/// The windowed frontend: translates egui input into session actions and
/// paints the session snapshot. Holds no simulation state of its own.
pub struct LifeApp {
    session: Session,
}

impl LifeApp {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn collect_actions(ctx: &egui::Context) -> Vec<Action> {
        ctx.input(|i| {
            let mut actions = Vec::new();

            if let Some(pos) = i.pointer.interact_pos() {
                if i.pointer.primary_pressed() {
                    actions.push(Action::PointerDown { x: pos.x, y: pos.y });
                } else if i.pointer.primary_down() {
                    actions.push(Action::PointerDrag { x: pos.x, y: pos.y });
                }
            }
            if i.pointer.primary_released() {
                actions.push(Action::PointerUp);
            }

            let scroll = i.raw_scroll_delta.y;
            if scroll >= 1.0 {
                actions.push(Action::WheelUp);
            } else if scroll <= -1.0 {
                actions.push(Action::WheelDown);
            }

            if i.key_down(egui::Key::ArrowRight) {
                actions.push(Action::KeyHeld(SpeedKey::Faster));
            }
            if i.key_down(egui::Key::ArrowLeft) {
                actions.push(Action::KeyHeld(SpeedKey::Slower));
            }

            actions.push(Action::Tick { dt: i.stable_dt });
            actions
        })
    }

    fn draw_board(&self, painter: &egui::Painter) {
        let snap = self.session.snapshot();
        let layout = self.session.layout();

        for (index, &alive) in snap.cells.iter().enumerate() {
            let rect = layout.cell_rect(index, snap.grid_count);

            let border = Rect {
                x: rect.x + CELL_PADDING,
                y: rect.y + CELL_PADDING,
                w: rect.w - 2.0 * CELL_PADDING,
                h: rect.h - 2.0 * CELL_PADDING,
            };
            if border.w <= 0.0 || border.h <= 0.0 {
                continue;
            }
            painter.rect_filled(
                to_egui(border),
                0.0,
                if alive {
                    COLOR_CELL_BORDER_ALIVE
                } else {
                    COLOR_CELL_BORDER_DEAD
                },
            );

            let inset = CELL_PADDING + CELL_BORDER_WIDTH;
            let body = Rect {
                x: rect.x + inset,
                y: rect.y + inset,
                w: rect.w - 2.0 * inset,
                h: rect.h - 2.0 * inset,
            };
            // Tiny cells on large boards are border-only.
            if body.w > 0.0 && body.h > 0.0 {
                painter.rect_filled(
                    to_egui(body),
                    0.0,
                    if alive { COLOR_CELL_ALIVE } else { COLOR_CELL_DEAD },
                );
            }
        }
    }

    fn draw_header(&self, painter: &egui::Painter, window_width: f32, header_height: f32) {
        let snap = self.session.snapshot();
        let layout = self.session.layout();
        let small = egui::FontId::proportional(14.0);

        for (line, text) in [
            format!("Pattern: {}", snap.pattern_name),
            format!("Simulation: {}", snap.generation),
            format!("Grid: {0}x{0}", snap.grid_count),
            format!("Speed: {:.2} sims/s", snap.sims_per_second),
        ]
        .into_iter()
        .enumerate()
        {
            painter.text(
                egui::pos2(15.0, 10.0 + 15.0 * line as f32),
                egui::Align2::LEFT_TOP,
                text,
                small.clone(),
                COLOR_TEXT,
            );
        }

        painter.text(
            egui::pos2(window_width / 2.0, header_height - 20.0),
            egui::Align2::CENTER_CENTER,
            format!("Alive cells: {}", snap.alive_count),
            egui::FontId::proportional(24.0),
            COLOR_TEXT,
        );

        let start_color = if snap.mode == Mode::Editing {
            egui::Color32::from_rgb(0, 160, 60)
        } else {
            egui::Color32::from_rgb(190, 40, 40)
        };
        let start_label = if snap.mode == Mode::Editing { "Start" } else { "Stop" };
        self.draw_button(painter, layout.button_rect(UiButton::StartStop), start_color, start_label);

        // The reset button only appears once there is something to clear.
        if snap.alive_count > 0 {
            self.draw_button(
                painter,
                layout.button_rect(UiButton::Reset),
                egui::Color32::DARK_GRAY,
                "Clear",
            );
        }

        self.draw_button(painter, layout.button_rect(UiButton::PrevPattern), egui::Color32::DARK_GRAY, "<");
        self.draw_button(painter, layout.button_rect(UiButton::NextPattern), egui::Color32::DARK_GRAY, ">");
    }

    fn draw_button(&self, painter: &egui::Painter, rect: Rect, fill: egui::Color32, label: &str) {
        let rect = to_egui(rect);
        painter.rect_filled(rect, 2.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(14.0),
            COLOR_TEXT,
        );
    }
}

fn to_egui(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(rect.x, rect.y), egui::vec2(rect.w, rect.h))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in Self::collect_actions(ctx) {
            self.session.submit(action);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(COLOR_BACKGROUND))
            .show(ctx, |ui| {
                let painter = ui.painter();
                self.draw_board(painter);
                let window = ui.max_rect();
                self.draw_header(painter, window.width(), self.session.layout().header());
            });

        // The simulation clock runs on the frame clock.
        ctx.request_repaint();
    }
}
