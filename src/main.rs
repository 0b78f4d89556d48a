use anyhow::Context;
use census_rh_perf::config::RunConfig;
use census_rh_perf::journeys::register_journeys;
use census_rh_perf::otel::{init_logging_with_config, LogConfig};
use census_rh_perf::startup;
use goose::prelude::*;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Held until exit so buffered log lines are flushed.
    let _guard = init_logging_with_config(&LogConfig::from_env())?;

    let config = RunConfig::from_env().context("invalid run configuration")?;
    info!(
        fixture_file = %config.fixture_file.display(),
        instance = ?config.instance,
        data_publish = config.data_publish,
        "starting respondent home load test"
    );

    let ctx = Arc::new(startup::prepare(&config).await?);

    let attack = register_journeys(GooseAttack::initialize()?, ctx)?;
    let metrics = attack.execute().await?;
    info!(
        duration_secs = metrics.duration,
        maximum_users = metrics.maximum_users,
        "load test finished"
    );
    Ok(())
}
