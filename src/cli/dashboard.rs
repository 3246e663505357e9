//! `tui` command handler.

use crate::config::AppConfig;
use crate::data::{builtin_companies, builtin_regions};
use crate::detect::DetectClient;
use crate::tui::{run_tui, App};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Run the interactive dashboard
pub fn run_dashboard(config: &AppConfig) -> Result<i32> {
    let client = DetectClient::new(config.detection.client_config())
        .context("Failed to build the detection client")?;
    tracing::info!(endpoint = client.endpoint(), "using detection endpoint");

    let mut app = App::new(
        builtin_companies(),
        builtin_regions(),
        Arc::new(client),
        config.tui.debounce(),
    );
    run_tui(&mut app, &config.tui).context("Terminal UI failed")?;
    Ok(0)
}
