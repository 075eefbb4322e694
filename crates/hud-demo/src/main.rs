use std::process::ExitCode;

use hud_engine::logging::{init_logging, LoggingConfig};
use hud_engine::window::Runtime;

mod app;
mod config;
mod hud;

use app::HudApp;
use config::HudConfig;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run(HudConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: HudConfig) -> anyhow::Result<()> {
    let runtime = config.runtime();
    let gpu = config.gpu();
    Runtime::run(runtime, gpu, HudApp::new(config))
}
