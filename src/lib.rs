//! # census-rh-perf
//!
//! Load test harness for the census respondent home (RH) web front end, built
//! on [goose](https://github.com/tag1consulting/goose).
//!
//! Simulated respondents walk the real page flows (launching the
//! questionnaire, correcting an address, requesting a new access code by
//! text or post, joining web chat) using households from a CSV fixture file.
//! Every response is checked for the page it should render, and every
//! mismatch is logged with enough of the page to diagnose it.
//!
//! ## Architecture
//!
//! - **[`pages`]** - catalogue of recognisable pages, classification and diagnostic excerpts
//! - **[`verify`]** - per-response verification and goose failure reporting
//! - **[`fixtures`]** - fixture records, instance partitioning and selection
//! - **[`events`]** - seed events for the RH event store and their publishers
//! - **[`journeys`]** - the weighted goose scenarios
//! - **[`startup`]** - fixture loading and optional seeding before the run
//! - **[`config`]** - environment configuration
//! - **[`otel`]** - structured logging
//! - **[`cli`]** - operator tooling behind the `rh-perf` binary
//!
//! ### Run Flow
//!
//! ```text
//! RunConfig::from_env
//!   -> startup::prepare        load owned fixture rows, seed if DATA_PUBLISH=true
//!   -> register_journeys       five weighted scenarios sharing one RunContext
//!   -> GooseAttack::execute    goose flags pick host, users, hatch rate, run time
//! ```
//!
//! Several instances can run side by side against one fixture file; each
//! owns a disjoint slice chosen by `INSTANCE_NUM` / `MAX_INSTANCES`.

pub mod cli;
pub mod config;
pub mod events;
pub mod fixtures;
pub mod ids;
pub mod journeys;
pub mod otel;
pub mod pages;
pub mod startup;
pub mod verify;
