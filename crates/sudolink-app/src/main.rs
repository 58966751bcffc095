//! Sudolink desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Sudolink application. The
//! puzzle service base URL can be overridden with the `SUDOLINK_SERVER_URL`
//! environment variable.

use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};
use sudolink_gateway::{DEFAULT_BASE_URL, SugokuClient};

use crate::app::SudolinkApp;

mod app;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let base_url =
        std::env::var("SUDOLINK_SERVER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    log::info!("using puzzle service at {base_url}");
    let gateway = SugokuClient::new(base_url);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(800.0, 600.0))
            .with_min_inner_size(Vec2::new(400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Sudolink",
        options,
        Box::new(|cc| Ok(Box::new(SudolinkApp::new(cc, gateway)))),
    )
}
