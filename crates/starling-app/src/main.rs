//! Main application entry point.

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting Starling");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Starling",
        options,
        Box::new(|_cc| Ok(Box::new(starling_app::StarlingApp::new()))),
    )
}
