//! # CLI Module
//!
//! Operator tooling for preparing and debugging a load test run, shipped as
//! the `rh-perf` binary. The load generator itself is `census-rh-perf`, which
//! takes goose's own flags.
//!
//! ## Commands
//!
//! ### `partition`
//!
//! Show how a fixture file of `--records` rows is split between
//! `--max-instances` instances, and which rows no instance owns:
//!
//! ```bash
//! rh-perf partition --records 10 --max-instances 5
//! ```
//!
//! ### `fixtures`
//!
//! Count the rows of a fixture file and load the slice one instance would own:
//!
//! ```bash
//! rh-perf fixtures --file test_data/event_data.txt --instance-num 3 --max-instances 5
//! ```
//!
//! ### `classify`
//!
//! Identify a saved page and print the excerpt a failure report would log:
//!
//! ```bash
//! rh-perf classify --file start.html
//! ```
//!
//! ### `seed`
//!
//! Publish seed events for the rows this instance owns, using the broker and
//! partition settings from the environment. `--dry-run` prints the events as
//! `<routing key> <json>` lines instead:
//!
//! ```bash
//! INSTANCE_NUM=1 MAX_INSTANCES=4 rh-perf seed --dry-run
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use census_rh_perf::cli::{execute, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! execute(&cli, &mut std::io::stdout())?;
//! ```

mod commands;


pub use commands::{execute, run_cli, Cli, Commands};
