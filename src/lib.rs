#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod dialogs;
pub mod error;
pub mod fileio;
pub mod input;
pub mod stroke;

pub use app::DrawerApp;
pub use canvas::Canvas;
pub use error::DrawerError;
pub use input::PointerTracker;
pub use stroke::StrokeSettings;
