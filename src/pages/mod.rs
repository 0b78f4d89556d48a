//! # Pages Module
//!
//! Content-based identification of respondent home pages.
//!
//! A response is matched against a fixed catalog of page fingerprints by
//! plain substring search on a marker unique to each page (normally its
//! `<title>`). Redirects make the final URL an unreliable identity, and a
//! substring check survives unrelated markup churn.
//!
//! ```rust
//! use census_rh_perf::pages::{identify, Page};
//!
//! let body = "<title>Start census - Census 2021</title><h1>Start</h1>";
//! assert_eq!(identify(body).unwrap(), Page::Start);
//! ```
//!
//! When a check fails, [`extract_diagnostic`] cuts a short excerpt out of the
//! page so the log line shows the relevant markup rather than the full HTML.

mod catalog;
mod classify;

#[cfg(test)]
mod tests;

pub use catalog::{Page, PageDescriptor};
pub use classify::{
    classify, collapse_blank_lines, extract_diagnostic, identify, ClassificationError,
    ExtractionError,
};
