//! Sudolink desktop application UI.
//!
//! # Design Notes
//! - Single-screen client over the remote puzzle service: grid, lives,
//!   status, and the load/validate/solve controls.
//! - Keyboard-driven input (digits, arrows, delete/backspace) with mouse
//!   selection; the grid adapts to whatever board size the service returns.
//! - All game logic lives in [`sudolink_game::Store`]; the UI only reads
//!   state and dispatches intents, polling the store once per frame.

use std::sync::Arc;
use std::time::Duration;

use eframe::{
    App, CreationContext, Frame,
    egui::{
        Button, CentralPanel, ComboBox, Context, Grid, InputState, Key, RichText, Spinner, Stroke,
        StrokeKind, Ui, Vec2,
    },
};
use egui_extras::{Size, StripBuilder};
use sudolink_board::{Cell, Difficulty};
use sudolink_game::{MAX_LIVES, Store};
use sudolink_gateway::SugokuClient;

#[derive(Debug)]
pub struct SudolinkApp {
    store: Store,
    selected_cell: Option<(usize, usize)>,
    picked_difficulty: Difficulty,
}

impl SudolinkApp {
    pub fn new(_cc: &CreationContext<'_>, gateway: SugokuClient) -> Self {
        let picked_difficulty = Difficulty::default();
        let mut store = Store::new(Arc::new(gateway));
        store.load_board(picked_difficulty);
        Self {
            store,
            selected_cell: None,
            picked_difficulty,
        }
    }

    fn new_game(&mut self) {
        self.selected_cell = None;
        self.store.load_board(self.picked_difficulty);
    }

    fn enter_value(&mut self, value: u8) {
        if self.store.status().is_game_over() {
            return;
        }
        if let Some((row, col)) = self.selected_cell {
            self.store.update_board(row, col, value);
        }
    }

    fn move_selection(&mut self, drow: isize, dcol: isize) {
        let n = self.store.board().size();
        if n == 0 {
            return;
        }
        let (row, col) = self.selected_cell.get_or_insert((0, 0));
        let new_row = row.checked_add_signed(drow).filter(|r| *r < n);
        let new_col = col.checked_add_signed(dcol).filter(|c| *c < n);
        if let (Some(r), Some(c)) = (new_row, new_col) {
            (*row, *col) = (r, c);
        }
    }

    fn handle_input(&mut self, i: &InputState) {
        if (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(Key::N) {
            self.new_game();
        }
        if i.key_pressed(Key::ArrowUp) {
            self.move_selection(-1, 0);
        }
        if i.key_pressed(Key::ArrowDown) {
            self.move_selection(1, 0);
        }
        if i.key_pressed(Key::ArrowLeft) {
            self.move_selection(0, -1);
        }
        if i.key_pressed(Key::ArrowRight) {
            self.move_selection(0, 1);
        }
        if i.key_pressed(Key::Escape) {
            self.selected_cell = None;
        }

        let pairs = [
            (Key::Delete, Cell::EMPTY),
            (Key::Backspace, Cell::EMPTY),
            (Key::Num1, 1),
            (Key::Num2, 2),
            (Key::Num3, 3),
            (Key::Num4, 4),
            (Key::Num5, 5),
            (Key::Num6, 6),
            (Key::Num7, 7),
            (Key::Num8, 8),
            (Key::Num9, 9),
        ];
        for (key, value) in pairs {
            if i.key_pressed(key) {
                self.enter_value(value);
            }
        }
    }
}

impl App for SudolinkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.store.poll();
        if self.store.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        ctx.input(|i| self.handle_input(i));

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.7))
                .size(Size::relative(0.3))
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        self.draw_grid(ui);
                    });
                    strip.cell(|ui| {
                        self.draw_sidebar(ui);
                    });
                });
        });
    }
}

/// Returns the box edge length for an `n`×`n` board, or `n` itself when the
/// board has no square box structure.
fn box_edge(n: usize) -> usize {
    (1..=n).find(|b| b * b == n).unwrap_or(n)
}

impl SudolinkApp {
    #[expect(clippy::too_many_lines, clippy::cast_precision_loss)]
    fn draw_grid(&mut self, ui: &mut Ui) {
        let n = self.store.board().size();
        if n == 0 {
            let text = if self.store.loading() {
                "Fetching a fresh puzzle..."
            } else {
                "No puzzle loaded. Start a new game from the sidebar."
            };
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(text).size(20.0));
            });
            return;
        }
        let b = box_edge(n);
        let boxes_per_side = n / b;

        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let border_color = visuals.widgets.inactive.fg_stroke.color;
        let given_text_color = visuals.strong_text_color();
        let filled_text_color = visuals.text_color();
        let invalid_text_color = visuals.error_fg_color;
        let selected_bg_color = visuals.selection.bg_fill;
        let same_house_bg_color = visuals.widgets.hovered.bg_fill;
        let bg_color = visuals.text_edit_bg_color();

        let thin_border = Stroke::new(1.0, border_color);
        let thick_border = Stroke::new(3.0, border_color);
        let selected_border = Stroke::new(6.0, border_color);

        let cell_size = ui.available_size().min_elem() / n as f32;
        let game_over = self.store.status().is_game_over();

        Grid::new(ui.id().with("outer_board"))
            .spacing((0.0, 0.0))
            .min_col_width(cell_size * b as f32)
            .min_row_height(cell_size * b as f32)
            .show(ui, |ui| {
                for box_row in 0..boxes_per_side {
                    for box_col in 0..boxes_per_side {
                        let grid = Grid::new(ui.id().with(format!("box_{box_row}_{box_col}")))
                            .spacing((0.0, 0.0))
                            .min_col_width(cell_size)
                            .min_row_height(cell_size)
                            .show(ui, |ui| {
                                for cell_row in 0..b {
                                    for cell_col in 0..b {
                                        let row = box_row * b + cell_row;
                                        let col = box_col * b + cell_col;
                                        let Some(cell) = self.store.board().cell(row, col) else {
                                            continue;
                                        };

                                        let text = if cell.is_empty() {
                                            RichText::new("")
                                        } else if !cell.valid {
                                            RichText::new(cell.value.to_string())
                                                .color(invalid_text_color)
                                        } else if cell.editable {
                                            RichText::new(cell.value.to_string())
                                                .color(filled_text_color)
                                        } else {
                                            RichText::new(cell.value.to_string())
                                                .color(given_text_color)
                                        }
                                        .size(cell_size * 0.8);

                                        let mut button =
                                            Button::new(text).min_size(Vec2::splat(cell_size));
                                        if self.selected_cell == Some((row, col)) {
                                            button = button.fill(selected_bg_color);
                                        } else if self.selected_cell.is_some_and(|(r, c)| {
                                            r == row
                                                || c == col
                                                || (r / b == row / b && c / b == col / b)
                                        }) {
                                            button = button.fill(same_house_bg_color);
                                        } else {
                                            button = button.fill(bg_color);
                                        }

                                        let button = ui.add_enabled(!game_over, button);
                                        let border = if self.selected_cell == Some((row, col)) {
                                            selected_border
                                        } else {
                                            thin_border
                                        };
                                        ui.painter().rect_stroke(
                                            button.rect,
                                            0.0,
                                            border,
                                            StrokeKind::Inside,
                                        );
                                        if button.clicked() {
                                            self.selected_cell = Some((row, col));
                                        }
                                    }
                                    ui.end_row();
                                }
                            });
                        ui.painter().rect_stroke(
                            grid.response.rect,
                            0.0,
                            thick_border,
                            StrokeKind::Inside,
                        );
                    }
                    ui.end_row();
                }
            });
    }

    fn draw_keypad(&mut self, ui: &mut Ui) {
        let n = self.store.board().size().min(9);
        let enabled = !self.store.status().is_game_over()
            && self
                .selected_cell
                .and_then(|(row, col)| self.store.board().cell(row, col))
                .is_some_and(|cell| cell.editable);

        ui.horizontal_wrapped(|ui| {
            #[expect(clippy::cast_possible_truncation)]
            for value in 1..=n as u8 {
                let button = Button::new(RichText::new(value.to_string()).size(18.0))
                    .min_size(Vec2::splat(32.0));
                if ui.add_enabled(enabled, button).clicked() {
                    self.enter_value(value);
                }
            }
            let clear = Button::new(RichText::new("X").size(18.0)).min_size(Vec2::splat(32.0));
            if ui
                .add_enabled(enabled, clear)
                .on_hover_text("Clear cell")
                .clicked()
            {
                self.enter_value(Cell::EMPTY);
            }
        });
    }

    fn draw_sidebar(&mut self, ui: &mut Ui) {
        let status = self.store.status();
        let lives = self.store.lives();
        let loading = self.store.loading();

        ui.vertical(|ui| {
            ui.group(|ui| {
                let status_text = if status.is_solved() {
                    "Congratulations! You solved the puzzle!"
                } else if status.is_unsolved() {
                    "Not solved yet. Keep trying!"
                } else if status.is_game_over() {
                    "Game over. Out of lives!"
                } else {
                    "Game in progress"
                };
                let status_label = if status.is_idle() {
                    RichText::new(status_text)
                } else {
                    RichText::new(status_text).color(ui.visuals().warn_fg_color)
                };
                ui.label(status_label.size(18.0));
                ui.label(RichText::new(format!("Lives: {lives} / {MAX_LIVES}")).size(18.0));
            });

            if loading {
                ui.horizontal(|ui| {
                    ui.add(Spinner::new());
                    ui.label("Talking to the puzzle service...");
                });
            }
            if let Some(error) = self.store.last_error() {
                ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
            }

            ui.separator();
            ComboBox::from_label("Difficulty")
                .selected_text(self.picked_difficulty.as_str())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.selectable_value(
                            &mut self.picked_difficulty,
                            difficulty,
                            difficulty.as_str(),
                        );
                    }
                });
            if ui.button(RichText::new("New Game").size(18.0)).clicked() {
                self.new_game();
            }

            let board_ready = !self.store.board().is_empty() && !loading;
            let check = Button::new(RichText::new("Check solution").size(18.0));
            if ui.add_enabled(board_ready, check).clicked() {
                self.store.validate_board();
            }
            let solve = Button::new(RichText::new("Solve").size(18.0));
            if ui
                .add_enabled(board_ready && self.store.solution().is_some(), solve)
                .clicked()
            {
                self.store.solve_board();
            }

            ui.separator();
            self.draw_keypad(ui);
        });
    }
}
