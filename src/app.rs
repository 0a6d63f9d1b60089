use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui::{Key, Modifiers, Sense, Vec2};

use crate::canvas::StrokeCapture;
use crate::entry::DayEntry;
use crate::export;
use crate::history::DrawingHistory;
use crate::renderer::{self, DrawingRenderer};
use crate::shared_store::WidgetExport;
use crate::store::JournalStore;
use crate::stroke::Stroke;

/// The desktop editing surface: one day's sketch and note at a time.
///
/// Every committing operation persists the current drawing synchronously and
/// best-effort; store failures are logged, never surfaced.
pub struct JournalApp {
    store: JournalStore,
    widget_export: WidgetExport,
    renderer: DrawingRenderer,
    capture: StrokeCapture,
    history: DrawingHistory,
    date: NaiveDate,
    body: String,
    confirm_delete: bool,
}

impl JournalApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, start_date: Option<NaiveDate>) -> Self {
        let data_dir = std::env::var_os("INKDAY_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("inkday-data"));

        // A deep link wins over the remembered date, which wins over today.
        let remembered = cc
            .storage
            .and_then(|storage| eframe::get_value::<NaiveDate>(storage, eframe::APP_KEY));
        let date = start_date
            .or(remembered)
            .unwrap_or_else(|| Local::now().date_naive());

        let mut app = Self {
            store: JournalStore::new(&data_dir),
            widget_export: WidgetExport::new(data_dir.join("widget")),
            renderer: DrawingRenderer::new(),
            capture: StrokeCapture::new(),
            history: DrawingHistory::new(),
            date,
            body: String::new(),
            confirm_delete: false,
        };
        app.load_day(date);
        app
    }

    /// Switch to a day, loading its entry and dropping all edit history so
    /// undo never leaks across entries.
    fn load_day(&mut self, date: NaiveDate) {
        self.capture.cancel();
        self.confirm_delete = false;
        self.date = date;

        let entry = match self.store.load(date) {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("failed to load entry for {date}: {err}");
                None
            }
        };
        let entry = entry.unwrap_or_else(|| DayEntry::new(date));
        self.body = entry.body.clone().unwrap_or_default();
        self.history.reset(entry.drawing());
    }

    /// Write the current day back to the store and refresh the widget
    /// export. Fire-and-forget: failures are logged and swallowed.
    fn persist(&self) {
        let mut entry = DayEntry::new(self.date);
        entry.set_body(&self.body);
        entry.set_drawing(self.history.current().clone());

        // Entries are created lazily; an empty day that was never saved
        // leaves no record behind.
        if entry.is_empty() && !self.store.exists(self.date) {
            return;
        }

        if let Err(err) = self.store.save(&entry) {
            log::warn!("failed to save entry for {}: {err}", self.date);
        }

        let exported = match &entry.drawing {
            Some(drawing) => self.widget_export.publish(self.date, drawing),
            None => self.widget_export.remove(self.date),
        };
        if let Err(err) = exported {
            log::warn!("failed to refresh widget export for {}: {err}", self.date);
        }
    }

    fn commit_stroke(&mut self, stroke: Stroke) {
        let mut drawing = self.history.current().clone();
        drawing.add_stroke(stroke);
        self.history.commit(drawing);
        self.persist();
    }

    fn undo(&mut self) {
        if self.history.undo() {
            self.persist();
        }
    }

    fn redo(&mut self) {
        if self.history.redo() {
            self.persist();
        }
    }

    /// Explicit user action: remove the day's record entirely.
    fn delete_day(&mut self) {
        if let Err(err) = self.store.delete(self.date) {
            log::warn!("failed to delete entry for {}: {err}", self.date);
        }
        if let Err(err) = self.widget_export.remove(self.date) {
            log::warn!("failed to remove widget export for {}: {err}", self.date);
        }
        self.body.clear();
        self.history.reset(Default::default());
    }

    fn share_png(&self) {
        let path = self.store.root().join(format!("{}.png", self.date));
        match export::save_png(self.history.current(), &path, 600) {
            Ok(()) => log::info!("exported {}", path.display()),
            Err(err) => log::warn!("failed to export {}: {err}", path.display()),
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                if let Some(date) = self.date.pred_opt() {
                    self.load_day(date);
                }
            }
            ui.label(self.date.format("%a %Y-%m-%d").to_string());
            if ui.button("▶").clicked() {
                if let Some(date) = self.date.succ_opt() {
                    self.load_day(date);
                }
            }
            if ui.button("Today").clicked() {
                self.load_day(Local::now().date_naive());
            }

            ui.separator();

            if ui
                .add_enabled(self.history.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.undo();
            }
            if ui
                .add_enabled(self.history.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.redo();
            }

            ui.separator();

            if ui.button("Share PNG").clicked() {
                self.share_png();
            }
            if ui.button("Delete day").clicked() {
                self.confirm_delete = true;
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let side = ui.available_size().min_elem().max(1.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::drag());
        let display = response.rect;

        painter.rect_filled(display, 4.0, egui::Color32::WHITE);

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.capture.begin(renderer::screen_to_logical(display, pos));
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let logical = renderer::screen_to_logical(display, pos);
                if let Some(stroke) = self.capture.extend(logical) {
                    // Left the canvas mid-drag: the stroke commits at the
                    // boundary and the next pointer-down starts fresh.
                    self.commit_stroke(stroke);
                }
            }
        }
        if response.drag_stopped() {
            if let Some(pos) = response.interact_pointer_pos() {
                let logical = renderer::screen_to_logical(display, pos);
                if let Some(stroke) = self.capture.end(logical) {
                    self.commit_stroke(stroke);
                }
            }
        }

        let preview = self.capture.preview_points().map(|p| p.to_vec());
        self.renderer.set_preview(preview);
        self.renderer.render(&painter, display, self.history.current());
    }

    fn delete_modal(&mut self, ctx: &egui::Context) {
        if !self.confirm_delete {
            return;
        }
        egui::Window::new("Delete entry")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Delete everything recorded for {}?", self.date));
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.delete_day();
                        self.confirm_delete = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_delete = false;
                    }
                });
            });
    }
}

impl eframe::App for JournalApp {
    /// Remember which day was open across restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.date);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check the redo chord first so plain undo doesn't eat it.
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)) {
            self.redo();
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Z)) {
            self.undo();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::TopBottomPanel::bottom("note").show(ctx, |ui| {
            let edit = ui.add(
                egui::TextEdit::multiline(&mut self.body)
                    .hint_text("What happened today?")
                    .desired_width(f32::INFINITY)
                    .desired_rows(3),
            );
            if edit.changed() {
                self.persist();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });

        self.delete_modal(ctx);
    }
}
