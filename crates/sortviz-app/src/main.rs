//! Sortviz - watch and hear sorting algorithms work
//!
//! This is the entry point for the GUI application. It:
//! 1. Loads the YAML config (defaults if missing)
//! 2. Starts the run controller thread, which owns the tone output
//! 3. Launches the iced window
//!
//! ## Command line flags
//!
//! - `--config PATH`: use a config file other than the default location

mod ui;
mod worker;

use std::cell::RefCell;
use std::path::PathBuf;

use anyhow::{bail, Context};
use iced::{Size, Task};
use sortviz_core::config::{default_config_path, load_config, VisualizerConfig};

use ui::{Message, SortvizApp};
use worker::WorkerHandle;

fn config_path() -> anyhow::Result<PathBuf> {
    let mut args = std::env::args().skip(1);
    let mut path = default_config_path();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => path = PathBuf::from(args.next().context("--config needs a path")?),
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("sortviz starting up");

    let path = config_path()?;
    let mut config: VisualizerConfig = load_config(&path);
    config.validate();
    log::info!(
        "{} elements, tones {}-{} Hz, {} ms per step",
        config.element_count,
        config.tone.min_frequency,
        config.tone.max_frequency,
        config.pacing.step_delay_ms
    );

    let display = config.display.clone();
    let worker = match WorkerHandle::spawn(config) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("Could not start run controller: {:#}", e);
            None
        }
    };

    // Boot must be Fn; the handle is taken out on the single call
    let worker_cell = RefCell::new(worker);
    let boot_display = display.clone();

    iced::application(
        move || {
            let app = SortvizApp::new(worker_cell.borrow_mut().take(), boot_display.clone());
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Sortviz")
    .window_size(Size::new(display.width + 20.0, display.height + 120.0))
    .run()?;

    log::info!("sortviz stopped");
    Ok(())
}

fn update(app: &mut SortvizApp, message: Message) -> Task<Message> {
    app.update(message)
}

fn view(app: &SortvizApp) -> iced::Element<'_, Message> {
    app.view()
}

fn subscription(app: &SortvizApp) -> iced::Subscription<Message> {
    app.subscription()
}

fn theme(app: &SortvizApp) -> iced::Theme {
    app.theme()
}
