// ui.rs - egui rendering and input for the viewer

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::PATTERNS;

use crate::app::LifeApp;
use crate::config::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

// Gap between drawn cells, in points
const SPACING: f32 = 0.5;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the clock from the repaint loop
        if self.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.advance();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                let selected = PATTERNS.get(self.selected_pattern).map_or("", |p| p.name);
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.engine().generation()));
            });

            ui.separator();

            // Speed and colours
            ui.horizontal(|ui| {
                ui.label("Speed:");
                // Range matches what config validation accepts, so the slider never clamps
                let slowest = 1000.0 / MAX_TICK_INTERVAL_MS as f32;
                let fastest = 1000.0 / MIN_TICK_INTERVAL_MS as f32;
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, slowest..=fastest).suffix(" gen/sec")).changed() {
                    let millis = ((1000.0 / speed) as u64).clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
                    self.update_interval = Duration::from_millis(millis);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them. Start runs one generation per tick.");
            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            // Statistics
            let dimension = self.engine().dimension();
            let total = dimension * dimension;
            let live_cells = self.engine().population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total.max(1) as f32 * 100.0));
            });
        });

        // Keep the clock ticking while running
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl LifeApp {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let dimension = self.engine().dimension();
        let pitch = self.cell_size + SPACING;
        let total_size = Vec2::splat(pitch * dimension as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let start_pos = response.rect.min;

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        for (row, cells) in self.engine().snapshot().rows().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                let min = start_pos + Vec2::new(col as f32 * pitch, row as f32 * pitch);
                let rect = Rect::from_min_size(min, Vec2::splat(self.cell_size));
                let cell_color = if alive { self.live_color } else { self.dead_color };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Clicks edit the grid whether or not the clock is running
        if !response.clicked() {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            let offset = pos - start_pos;
            if offset.x >= 0.0 && offset.y >= 0.0 {
                let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
                // Out-of-range clicks land on the spacing edge; the engine rejects them
                self.toggle_cell(row, col);
            }
        }
    }
}
