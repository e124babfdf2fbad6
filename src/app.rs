use eframe::egui;

use crate::canvas::Canvas;
use crate::dialogs;
use crate::input::{PointerTracker, Segment};
use crate::stroke::StrokeSettings;

pub struct DrawerApp {
    canvas: Canvas,
    settings: StrokeSettings,
    tracker: PointerTracker,
    texture: Option<egui::TextureHandle>,
    canvas_dirty: bool,
}

impl DrawerApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            canvas: Canvas::default(),
            settings: StrokeSettings::new(),
            tracker: PointerTracker::new(),
            texture: None,
            canvas_dirty: false,
        }
    }

    fn toolbar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("QUIT").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            if ui.button("SAVE").clicked() {
                self.save_image();
            }
            if ui.button("CLEAR").clicked() {
                self.canvas.clear();
                self.canvas_dirty = true;
            }

            let mut eraser = self.settings.eraser();
            if ui.toggle_value(&mut eraser, "ERASER").changed() {
                log::info!("eraser {}", if eraser { "on" } else { "off" });
                self.settings.set_eraser(eraser);
            }

            ui.separator();

            ui.label("Color:");
            let mut color = self.settings.color();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                self.settings.set_color(color);
            }

            ui.label("Line width:");
            let mut width = self.settings.width() as i32;
            if ui.add(egui::Slider::new(&mut width, 1..=10)).changed() {
                self.settings.set_width(width);
            }
        });
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(self.canvas.width() as f32, self.canvas.height() as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let rect = response.rect;

        if self.canvas_dirty || self.texture.is_none() {
            let snapshot = self.canvas.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(snapshot, egui::TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ui.ctx().load_texture(
                        "canvas",
                        snapshot,
                        egui::TextureOptions::NEAREST,
                    ));
                }
            }
            self.canvas_dirty = false;
        }
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        // Pointer positions are in screen coordinates; the canvas wants them
        // relative to its own top-left corner.
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.tracker.press(pos - rect.min.to_vec2());
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(segment) = self.tracker.drag(pos - rect.min.to_vec2()) {
                    self.apply_segment(segment);
                }
            }
        }
        if response.drag_stopped() {
            match response.interact_pointer_pos() {
                Some(pos) => {
                    if let Some(segment) = self.tracker.release(pos - rect.min.to_vec2()) {
                        self.apply_segment(segment);
                    }
                }
                None => self.tracker.cancel(),
            }
        }
    }

    fn apply_segment(&mut self, segment: Segment) {
        self.canvas.draw_segment(
            segment.start,
            segment.end,
            self.settings.active_color(self.canvas.background()),
            self.settings.active_width(),
        );
        self.canvas_dirty = true;
    }

    /// SAVE button flow: pick a target, confirm overwrites, export, report.
    /// Cancelling either dialog stops the save with no error.
    fn save_image(&mut self) {
        let Some(path) = dialogs::pick_save_target() else {
            return;
        };
        match dialogs::ensure_writable(&path, dialogs::confirm_overwrite) {
            Ok(true) => {}
            Ok(false) => {
                log::info!("save declined, {} left untouched", path.display());
                return;
            }
            Err(err) => {
                log::warn!("save aborted: {err}");
                dialogs::show_error(&err.to_string());
                return;
            }
        }
        match self.canvas.export(&path) {
            Ok(()) => {
                log::info!("saved image to {}", path.display());
                dialogs::show_message(&format!("Saved image to {}.", path.display()));
            }
            Err(err) => {
                log::warn!("export failed: {err}");
                dialogs::show_error(&err.to_string());
            }
        }
    }
}

impl eframe::App for DrawerApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas_ui(ui);
        });
    }
}
