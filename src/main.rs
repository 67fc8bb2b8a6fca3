//! Connect-Four GUI
//!
//! Play Connect-Four against the minimax engine, against another person, or
//! watch two engines play each other.

use std::path::Path;

use anyhow::Result;
use connect_four::config::AppConfig;
use connect_four::ui::ConnectFourApp;

const CONFIG_PATH: &str = "connect_four.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    )
    .init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_PATH)).unwrap_or_else(|e| {
        log::error!("{}, using defaults", e);
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(move |cc| Ok(Box::new(ConnectFourApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the GUI: {}", e))
}
