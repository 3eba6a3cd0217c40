#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod cmd;
mod controller;
mod data;
mod ui;
mod widget;

use druid::AppLauncher;
use env_logger::{Builder, Env};

use crate::data::AppState;

const ENV_LOG: &str = "PURR_LOG";
const ENV_LOG_STYLE: &str = "PURR_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let state = AppState::default();

    AppLauncher::with_window(ui::main_window())
        .configure_env(ui::theme::setup)
        .launch(state)
        .expect("Application launch");
}
