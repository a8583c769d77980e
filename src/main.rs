//! Genescreen - Gene Stability & CRISPR Editing Simulator
//!
//! A Rust application for screening short DNA sequences: rule-based
//! structural stability prediction plus a simulated CRISPR-Cas9 repair of
//! point mutations against a reference sequence.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod analysis;
mod app;

use app::GenescreenApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([860.0, 560.0])
            .with_title("Genescreen Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "Genescreen Tool",
        native_options,
        Box::new(|cc| Ok(Box::new(GenescreenApp::new(cc)))),
    )
}
