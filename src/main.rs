// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Filmroom
//!
//! A desktop application for sports film review: timestamped coaching
//! notes over a video reference, athlete tagging from a roster, and
//! freehand telestration per coaching point.

mod app;
mod io;
mod models;
mod recorder;
mod session;
mod ui;
mod util;
mod video;

use anyhow::Result;
use app::FilmroomApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Filmroom - Film Review"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Filmroom",
        options,
        Box::new(|_cc| Ok(Box::new(FilmroomApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
