use crate::config::{InstanceConfig, RunConfig};
use crate::events::{seed_events, EventBuilder, JsonLinesSink};
use crate::fixtures::{compute_range, coverage_gaps, FixtureSet};
use crate::pages::{extract_diagnostic, identify};
use crate::startup::publish_seed_events;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Operator tooling for the respondent home load test
#[derive(Parser, Debug)]
#[command(name = "rh-perf")]
#[command(about = "Census respondent home load test tooling", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available operator commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every instance's fixture range and any unassigned rows
    Partition {
        /// Data rows in the fixture file (header excluded)
        #[arg(short, long)]
        records: usize,

        /// Number of load generator instances
        #[arg(short, long)]
        max_instances: usize,
    },
    /// Count a fixture file and load the rows one instance owns
    Fixtures {
        /// Fixture CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// 1-based instance number
        #[arg(long, requires = "max_instances")]
        instance_num: Option<usize>,

        /// Number of load generator instances
        #[arg(long, requires = "instance_num")]
        max_instances: Option<usize>,
    },
    /// Identify a saved page and print its diagnostic excerpt
    Classify {
        /// Saved HTML page
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Publish seed events for this instance's rows
    ///
    /// Broker, routing keys and partition come from the environment
    /// (`RABBITMQ_URL`, `EXCHANGE`, `INSTANCE_NUM`, ...).
    Seed {
        /// Fixture CSV file, overriding FILE_NAME
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the events instead of publishing them
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

/// Parse the process arguments and run the selected command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli, &mut std::io::stdout())
}

/// Run `cli`, writing the report to `out`.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Commands::Partition {
            records,
            max_instances,
        } => partition(*records, *max_instances, out),
        Commands::Fixtures {
            file,
            instance_num,
            max_instances,
        } => {
            let instance = match (instance_num, max_instances) {
                (Some(instance_num), Some(max_instances)) => InstanceConfig {
                    instance_num: *instance_num,
                    max_instances: *max_instances,
                },
                _ => InstanceConfig::SOLE,
            };
            let set = FixtureSet::load(file, instance)
                .with_context(|| format!("failed to load {}", file.display()))?;
            writeln!(out, "file: {}", file.display())?;
            writeln!(out, "total rows: {}", set.total_records())?;
            writeln!(
                out,
                "instance {} of {}: rows {}",
                instance.instance_num,
                instance.max_instances,
                set.range()
            )?;
            writeln!(out, "loaded: {}", set.len())?;
            Ok(())
        }
        Commands::Classify { file } => {
            let body = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let Ok(page) = identify(&body) else {
                bail!("{} does not match any known page", file.display());
            };
            writeln!(out, "page: {}", page)?;
            match extract_diagnostic(&body, page) {
                Ok(excerpt) => writeln!(out, "{}", excerpt)?,
                Err(err) => writeln!(out, "no excerpt: missing '{}'", err.missing)?,
            }
            Ok(())
        }
        Commands::Seed { file, dry_run } => {
            let mut config = RunConfig::from_env()?;
            if let Some(file) = file {
                config.fixture_file = file.clone();
            }
            let set = FixtureSet::load(&config.fixture_file, config.instance_or_sole())
                .with_context(|| format!("failed to load {}", config.fixture_file.display()))?;

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")?;
            let summary = if *dry_run {
                let mut sink = JsonLinesSink::new(&mut *out);
                runtime.block_on(seed_events(
                    &mut sink,
                    set.records(),
                    &config.broker,
                    &mut EventBuilder::default(),
                ))?
            } else {
                runtime.block_on(publish_seed_events(&config.broker, set.records()))?
            };
            if !*dry_run {
                writeln!(
                    out,
                    "published {} events for {} rows",
                    summary.events, summary.rows
                )?;
            }
            Ok(())
        }
    }
}

fn partition<W: Write>(records: usize, max_instances: usize, out: &mut W) -> Result<()> {
    let gaps = coverage_gaps(max_instances, records)?;
    for instance_num in 1..=max_instances {
        let range = compute_range(instance_num, max_instances, records)?;
        writeln!(
            out,
            "instance {}: rows {} ({} rows)",
            instance_num,
            range,
            range.row_count()
        )?;
    }

    if gaps.is_empty() {
        writeln!(out, "all {} rows assigned", records)?;
    } else {
        let rows: Vec<String> = gaps.iter().map(|row| row.to_string()).collect();
        writeln!(out, "unassigned rows: {}", rows.join(", "))?;
    }
    Ok(())
}
