// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use linkscan::application::orchestrator::{Orchestrator, OrchestratorPorts};
use linkscan::config::settings::Settings;
use linkscan::engines::page_engine::HttpPageEngine;
use linkscan::engines::reqwest_engine::ReqwestLinkChecker;
use linkscan::engines::traits::{LinkChecker, TabProvider};
use linkscan::infrastructure::metrics;
use linkscan::infrastructure::repositories::history_repo_impl::HistoryRepositoryImpl;
use linkscan::infrastructure::repositories::settings_repo_impl::SettingsRepositoryImpl;
use linkscan::infrastructure::storage::{create_downloads_storage, create_state_storage};
use linkscan::presentation::cli::{Cli, Commands};
use linkscan::presentation::console::{ConsolePresenter, Panel};
use linkscan::utils::errors::OrchestratorError;
use linkscan::utils::telemetry;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    telemetry::init_telemetry();
    metrics::init_metrics();

    let cli = Cli::parse();
    let settings = Settings::new()?;
    info!(data_dir = %settings.storage.data_dir, "Starting linkscan");

    let state_storage = create_state_storage(&settings.storage);
    let downloads = create_downloads_storage(&settings.storage);

    let checker: Arc<dyn LinkChecker> = Arc::new(ReqwestLinkChecker::from_settings(&settings.http)?);
    let engine = Arc::new(HttpPageEngine::from_settings(&settings, checker)?);

    // The page must be open before start() looks up the active tab
    if let Commands::Scan { url, .. } = &cli.command {
        engine.open_tab(url).await;
    }

    let panel = match &cli.command {
        Commands::Scan { .. } => Panel::Links,
        Commands::History { open: Some(_), .. } => Panel::Links,
        Commands::History { .. } | Commands::ClearHistory => Panel::History,
        Commands::Settings { .. } => Panel::Settings,
    };

    let presenter = Arc::new(ConsolePresenter::new(panel));
    let ports = OrchestratorPorts {
        tabs: engine.clone(),
        content: engine,
        settings: Arc::new(SettingsRepositoryImpl::new(state_storage.clone())),
        history: Arc::new(HistoryRepositoryImpl::new(state_storage)),
        downloads,
        presenter: presenter.clone(),
    };
    let mut orchestrator = Orchestrator::start(ports).await;

    let outcome = run(&mut orchestrator, &presenter, &cli.command).await;
    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ OrchestratorError::HistoryIndexOutOfRange(_)) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            // Already surfaced through the presenter
            debug!("Command failed: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(
    orchestrator: &mut Orchestrator,
    presenter: &ConsolePresenter,
    command: &Commands,
) -> Result<(), OrchestratorError> {
    match command {
        Commands::Scan { report, .. } => scan(orchestrator, presenter, *report).await,
        Commands::History {
            open: Some(index),
            report,
        } => {
            orchestrator.open_history_entry(*index).await?;
            scan(orchestrator, presenter, *report).await
        }
        Commands::History { open: None, .. } => Ok(()),
        Commands::ClearHistory => orchestrator.clear_history().await,
        Commands::Settings { .. } => match command.settings_patch() {
            Some(patch) if !patch.is_empty() => orchestrator.update_settings(&patch).await,
            _ => Ok(()),
        },
    }
}

async fn scan(
    orchestrator: &mut Orchestrator,
    presenter: &ConsolePresenter,
    report: bool,
) -> Result<(), OrchestratorError> {
    orchestrator.scan_page().await?;
    // Same gate as the download button
    if report && presenter.download_enabled() {
        orchestrator.download_report().await?;
    }
    Ok(())
}
