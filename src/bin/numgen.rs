use std::process::ExitCode;
use std::time::Instant;

use numgen::logging::init_logging;
use numgen::{generate, GeneratorConfig};
use tracing::{error, info};

fn main() -> ExitCode {
    init_logging();

    let config = GeneratorConfig::default();
    let now = Instant::now();

    info!(tiers = config.tiers.len(), "gen integers..");
    match generate(&config) {
        Ok(written) => {
            info!(files = written.len(), "done. elapsed: {:.2?}", now.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
