//! The raster surface: an in-memory RGBA buffer the strokes are burned into.

use std::path::Path;

use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::error::DrawerError;
use crate::fileio;

/// Extensions the exporter will encode to.
pub const EXPORT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub struct Canvas {
    buffer: RgbaImage,
    background: Color32,
}

impl Canvas {
    pub const DEFAULT_SIZE: u32 = 600;

    /// Create a canvas filled uniformly with `background`.
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, rgba(background)),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color32 {
        let Rgba([r, g, b, a]) = *self.buffer.get_pixel(x, y);
        Color32::from_rgba_premultiplied(r, g, b, a)
    }

    /// Refill with the background color, discarding everything drawn so far.
    pub fn clear(&mut self) {
        for px in self.buffer.pixels_mut() {
            *px = rgba(self.background);
        }
    }

    /// Rasterize a straight line segment from `p0` to `p1`.
    ///
    /// The stroke is built by stamping filled discs of diameter `width` at
    /// sub-pixel steps along the segment, which gives round caps and round
    /// joins between consecutive segments for free. Coordinates outside the
    /// canvas are clipped, not an error.
    pub fn draw_segment(&mut self, p0: Pos2, p1: Pos2, color: Color32, width: u32) {
        let radius = width.max(1) as f32 / 2.0;
        let delta = p1 - p0;
        let steps = delta.length().ceil() as usize;
        if steps == 0 {
            self.stamp_disc(p0, radius, color);
            return;
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(p0 + delta * t, radius, color);
        }
    }

    fn stamp_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let px = rgba(color);
        let (w, h) = (self.width() as i64, self.height() as i64);

        let x0 = (center.x - radius).floor() as i64;
        let x1 = (center.x + radius).ceil() as i64;
        let y0 = (center.y - radius).floor() as i64;
        let y1 = (center.y + radius).ceil() as i64;
        for y in y0.max(0)..=y1.min(h - 1) {
            for x in x0.max(0)..=x1.min(w - 1) {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius * radius {
                    self.buffer.put_pixel(x as u32, y as u32, px);
                }
            }
        }

        // A width-1 disc can miss every pixel center when the point lands on
        // a grid line; always plot the pixel containing the point itself.
        let (cx, cy) = (center.x.floor() as i64, center.y.floor() as i64);
        if (0..w).contains(&cx) && (0..h).contains(&cy) {
            self.buffer.put_pixel(cx as u32, cy as u32, px);
        }
    }

    /// Encode the buffer to `path`, codec chosen by the filename extension.
    pub fn export(&self, path: &Path) -> Result<(), DrawerError> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let ext = fileio::file_extension(name)
            .ok_or_else(|| DrawerError::UnsupportedExtension(path.to_path_buf()))?;
        if !EXPORT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(DrawerError::UnsupportedExtension(path.to_path_buf()));
        }
        // JPEG has no alpha channel and the canvas is opaque anyway.
        let rgb = image::DynamicImage::ImageRgba8(self.buffer.clone()).to_rgb8();
        rgb.save(path)?;
        Ok(())
    }

    /// Snapshot the buffer for upload as an egui texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.buffer.as_raw(),
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE, Color32::WHITE)
    }
}

fn rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_background_everywhere() {
        let canvas = Canvas::new(8, 8, Color32::WHITE);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Color32::WHITE);
            }
        }
    }

    #[test]
    fn segment_touches_both_endpoints() {
        let mut canvas = Canvas::new(32, 32, Color32::WHITE);
        canvas.draw_segment(Pos2::new(4.5, 4.5), Pos2::new(20.5, 12.5), Color32::RED, 1);
        assert_eq!(canvas.pixel(4, 4), Color32::RED);
        assert_eq!(canvas.pixel(20, 12), Color32::RED);
    }

    #[test]
    fn zero_length_segment_plots_a_dot() {
        let mut canvas = Canvas::new(16, 16, Color32::WHITE);
        canvas.draw_segment(Pos2::new(7.0, 7.0), Pos2::new(7.0, 7.0), Color32::BLACK, 1);
        assert_eq!(canvas.pixel(7, 7), Color32::BLACK);
    }

    #[test]
    fn wide_segment_covers_more_than_the_center_line() {
        let mut canvas = Canvas::new(32, 32, Color32::WHITE);
        canvas.draw_segment(Pos2::new(8.0, 16.0), Pos2::new(24.0, 16.0), Color32::BLUE, 8);
        // A pixel three rows off the center line is still inside the stroke.
        assert_eq!(canvas.pixel(16, 13), Color32::BLUE);
        assert_eq!(canvas.pixel(16, 19), Color32::BLUE);
        // Well outside the stroke stays background.
        assert_eq!(canvas.pixel(16, 25), Color32::WHITE);
    }

    #[test]
    fn width_zero_draws_like_width_one() {
        let mut canvas = Canvas::new(16, 16, Color32::WHITE);
        canvas.draw_segment(Pos2::new(3.5, 3.5), Pos2::new(3.5, 3.5), Color32::BLACK, 0);
        assert_eq!(canvas.pixel(3, 3), Color32::BLACK);
    }

    #[test]
    fn segments_off_canvas_are_clipped() {
        let mut canvas = Canvas::new(16, 16, Color32::WHITE);
        canvas.draw_segment(Pos2::new(-10.0, 8.0), Pos2::new(30.0, 8.0), Color32::RED, 4);
        assert_eq!(canvas.pixel(0, 8), Color32::RED);
        assert_eq!(canvas.pixel(15, 8), Color32::RED);
    }

    #[test]
    fn clear_restores_the_background() {
        let mut canvas = Canvas::new(16, 16, Color32::WHITE);
        canvas.draw_segment(Pos2::new(2.0, 2.0), Pos2::new(12.0, 12.0), Color32::RED, 5);
        canvas.clear();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(canvas.pixel(x, y), Color32::WHITE);
            }
        }
    }
}
