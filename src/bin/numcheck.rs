use std::path::Path;
use std::process::ExitCode;

use numgen::logging::init_logging;
use numgen::{Fixture, Tier};
use tracing::{error, info};

fn check(tier: Tier) -> numgen::error::Result<()> {
    let fixture = Fixture::open(Path::new(".").join(tier.file_name()))?;
    let report = fixture.verify(tier)?;
    info!(
        path = %fixture.path().display(),
        tokens = report.tokens,
        min = report.min,
        max = report.max,
        "ok"
    );
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    for tier in Tier::all() {
        if let Err(e) = check(tier) {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
