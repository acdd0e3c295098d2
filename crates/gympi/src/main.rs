//! GymPi dashboard.

use std::fs::OpenOptions;
use std::sync::Mutex;

use gympi_cli::ui::print_error;
use gympi_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &config::AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if config.logs_to_stderr() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    // The dashboard owns the terminal, so logs go to a file.
    let path = config.log_file_path();
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(err) => eprintln!("warning: cannot open log file {}: {err}", path.display()),
    }
}

fn main() {
    let config = config::AppConfig::parse();
    init_tracing(&config);

    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
