mod app;
mod color;
mod data;
mod reactive;
mod state;
mod ui;

use anyhow::Context;
use app::PenguinExplorerApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is read once, before the event loop starts.
    let dataset = data::loader::load_penguins().inspect_err(|e| {
        log::error!("Failed to load dataset: {e:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Webb of Data",
        options,
        Box::new(|_cc| Ok(Box::new(PenguinExplorerApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
