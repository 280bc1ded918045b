// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod logic;
mod models;
mod mvu;
mod telemetry;
mod ui;
mod utils;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::AppConfig;

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    telemetry::init_tracing(config.debug)?;
    tracing::info!(source = %config.source_label(), "starting reusable content browser");

    app::run(config)
}
