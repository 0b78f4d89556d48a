use census_rh_perf::cli::run_cli;
use census_rh_perf::otel::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    let _guard = init_logging_with_config(&LogConfig::default_cli())?;
    run_cli()
}
