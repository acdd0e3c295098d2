//! Application entry point and dispatch.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Context, Result};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::oneshot;
use tracing::info;

use gympi_cli::presenter::TextPresenter;
use gympi_cli::ui::fetch_spinner;
use gympi_client::HttpDashboardApi;
use gympi_core::api::DashboardApi;
use gympi_core::metrics::summarize_history;
use gympi_orchestration::{detail_channel, spawn_detail_listener, spawn_device_poller};
use gympi_tui::grid::CardGrid;
use gympi_tui::history::HistoryTable;
use gympi_tui::{DashboardApp, TuiBridge, TuiMessage};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        gympi_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    info!(version = %full_version(), url = %config.url, "starting");
    let api = HttpDashboardApi::new(&config.url, config.request_timeout()?)?;

    if config.once {
        return run_once(config, &api);
    }
    run_tui(config, api)
}

fn current_thread_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

fn run_once(config: &AppConfig, api: &HttpDashboardApi) -> Result<()> {
    let runtime = current_thread_runtime()?;
    let presenter = TextPresenter::for_stdout();
    let mut stdout = io::stdout().lock();

    match &config.device {
        Some(device_id) => {
            let spinner = fetch_spinner(format!("Fetching history for {device_id}"));
            let history = runtime.block_on(api.fetch_history(device_id));
            spinner.finish_and_clear();
            let history = history?;

            let mut table = HistoryTable::new();
            table.render_history_table(&history);
            presenter.write_history(&mut stdout, device_id, &summarize_history(&history), &table)?;
        }
        None => {
            let spinner = fetch_spinner("Fetching devices");
            let devices = runtime.block_on(api.fetch_devices());
            spinner.finish_and_clear();
            let devices = devices?;

            let mut grid = CardGrid::new();
            grid.render_device_grid(&devices);
            presenter.write_devices(&mut stdout, &grid)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn run_tui(config: &AppConfig, api: HttpDashboardApi) -> Result<()> {
    let interval = config.poll_interval()?;
    let base_url = api.base_url().to_string();
    let api: Arc<dyn DashboardApi> = Arc::new(api);

    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let bridge = Arc::new(TuiBridge::new(tx));
    bridge.log(format!("Polling {base_url} every {interval:?}"));
    let (requester, requests) = detail_channel();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    // Fetch flows live on their own thread with a current-thread runtime;
    // everything they produce reaches the UI through `rx`.
    let worker = thread::Builder::new()
        .name("gympi-fetch".into())
        .spawn(move || -> Result<()> {
            let runtime = match current_thread_runtime() {
                Ok(runtime) => runtime,
                Err(e) => {
                    bridge.quit();
                    return Err(e);
                }
            };
            runtime.block_on(async move {
                let poller =
                    spawn_device_poller(Arc::clone(&api), bridge.clone(), bridge.clone(), interval);
                let details = spawn_detail_listener(api, bridge.clone(), bridge, requests);
                let _ = stop_rx.await;
                poller.shutdown().await;
                details.shutdown().await;
            });
            info!("fetch thread stopped");
            Ok(())
        })
        .context("failed to spawn fetch thread")?;

    let mut app = DashboardApp::new(rx, base_url).with_requester(requester);
    let ui_result = app.run().map_err(|e| anyhow!("TUI error: {e}"));

    let _ = stop_tx.send(());
    let worker_result = worker
        .join()
        .map_err(|_| anyhow!("fetch thread panicked"))?;

    ui_result?;
    worker_result
}
