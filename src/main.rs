#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Simple Drawer")
            .with_inner_size([616.0, 656.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "simple_drawer",
        native_options,
        Box::new(|cc| Ok(Box::new(simple_drawer::DrawerApp::new(cc)))),
    )
}
