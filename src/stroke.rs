use egui::Color32;

/// Width the eraser always draws with, regardless of the configured width.
pub const ERASER_WIDTH: u32 = 20;

/// The active drawing attributes: color, width, and whether the eraser is on.
///
/// Changes apply to segments drawn afterwards; pixels already on the canvas
/// are never revisited.
#[derive(Debug, Clone, Copy)]
pub struct StrokeSettings {
    color: Color32,
    width: u32,
    eraser: bool,
}

impl StrokeSettings {
    pub fn new() -> Self {
        Self {
            color: Color32::BLACK,
            width: 1,
            eraser: false,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the stroke width. Values below 1 clamp to 1.
    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(1) as u32;
    }

    pub fn eraser(&self) -> bool {
        self.eraser
    }

    pub fn set_eraser(&mut self, eraser: bool) {
        self.eraser = eraser;
    }

    /// Color the next segment should be drawn with: the stroke color, or the
    /// canvas background when erasing.
    pub fn active_color(&self, background: Color32) -> Color32 {
        if self.eraser {
            background
        } else {
            self.color
        }
    }

    /// Width the next segment should be drawn with. The eraser uses a fixed
    /// width and ignores the configured one.
    pub fn active_width(&self) -> u32 {
        if self.eraser {
            ERASER_WIDTH
        } else {
            self.width
        }
    }
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self::new()
    }
}
