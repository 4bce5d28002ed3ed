//! Swatchbook - theme color inspector
//!
//! A single-window GUI for inspecting editor color themes.
//!
//! # Features
//!
//! - Paste or open a VS Code-style theme JSON document
//! - Every referenced color extracted, deduplicated and sorted spectrally
//! - Swatches labeled with canonical hex and contributing scopes
//! - Contrast-aware labels (black on light swatches, white on dark)
//! - Fuzzy scope filter and click-to-copy
//!
//! # Architecture
//!
//! - `core`: Color parsing and the extract/dedupe/sort transform
//! - `app`: GUI application state and event handling
//! - `theme`: UI chrome themes for the application itself
//! - `config`: Settings persistence

mod app;
mod config;
mod core;
mod theme;
mod utils;

use iced::Size;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = crate::utils::ensure_dirs();
    launch_gui()
}

fn launch_gui() -> ExitCode {
    // Set up logging to file
    if let Some(mut log_path) = crate::utils::get_state_dir() {
        log_path.push("swatchbook.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let result = iced::application(app::State::new, app::State::update, app::State::view)
        .subscription(app::State::subscription)
        .window(iced::window::Settings {
            size: Size::new(1100.0, 720.0),
            ..Default::default()
        })
        .title("Swatchbook")
        .theme(|_state: &app::State| iced::Theme::Dark)
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
