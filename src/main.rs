use eframe::egui;

mod app;

use app::OrreryApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Orrery",
        options,
        Box::new(|cc| Ok(Box::new(OrreryApp::new(cc)))),
    )
    .expect("Failed to start Orrery");
}
