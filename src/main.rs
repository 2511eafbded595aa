use grid_life::app::LifeApp;
use grid_life::config::SessionConfig;
use grid_life::patterns::Catalog;
use grid_life::session::Session;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = SessionConfig::default();
    let session = Session::new(config, Catalog::default());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(false),
        ..Default::default()
    };

    log::info!(
        "starting window ({}x{})",
        config.window_width,
        config.window_height
    );
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(session))),
    )
}
