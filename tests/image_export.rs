use std::fs;
use std::path::PathBuf;

use egui::{Color32, Pos2};
use simple_drawer::{Canvas, DrawerError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("simple_drawer_export_{}_{name}", std::process::id()))
}

fn painted_canvas() -> Canvas {
    let mut canvas = Canvas::new(32, 32, Color32::WHITE);
    canvas.draw_segment(Pos2::new(4.0, 16.0), Pos2::new(28.0, 16.0), Color32::BLACK, 3);
    canvas
}

#[test]
fn png_round_trips_through_the_codec() {
    let path = temp_path("roundtrip.png");
    painted_canvas().export(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (32, 32));
    assert_eq!(decoded.get_pixel(16, 16), &image::Rgb([0, 0, 0]));
    assert_eq!(decoded.get_pixel(0, 0), &image::Rgb([255, 255, 255]));

    fs::remove_file(&path).unwrap();
}

#[test]
fn jpeg_export_is_accepted() {
    let path = temp_path("photo.jpg");
    painted_canvas().export(&path).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_extension_is_rejected() {
    let path = temp_path("noext");
    let err = painted_canvas().export(&path).unwrap_err();
    assert!(matches!(err, DrawerError::UnsupportedExtension(_)));
    assert!(!path.exists());
}

#[test]
fn unknown_extension_is_rejected() {
    let path = temp_path("drawing.gif");
    let err = painted_canvas().export(&path).unwrap_err();
    assert!(matches!(err, DrawerError::UnsupportedExtension(_)));
    assert!(!path.exists());
}

#[test]
fn uppercase_extension_is_accepted() {
    let path = temp_path("SHOUT.PNG");
    painted_canvas().export(&path).unwrap();
    assert!(path.is_file());
    fs::remove_file(&path).unwrap();
}
