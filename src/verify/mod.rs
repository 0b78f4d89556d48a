//! # Verify Module
//!
//! Checks every page transition of a journey.
//!
//! [`check_response`] is the pure part: given a body, a status and an
//! [`Expectation`] it returns a [`Verification`] listing every problem found
//! (empty body, unknown or wrong page, wrong status, missing content, missing
//! excerpt markers). [`verify_page`] and [`verify_redirect`] wrap it for goose:
//! they mark the request as a success or a failure, log each error with the
//! journey id and access code, wait out the failure delay and return an error
//! so the rest of the journey is skipped.
//!
//! ```rust
//! use census_rh_perf::pages::Page;
//! use census_rh_perf::verify::{check_response, Expectation};
//!
//! let body = "<title>Start census - Census 2021</title>\
//!             ...Enter your 16-character access code...";
//! let verification = check_response(body, 200, &Expectation::page(Page::Start));
//! assert!(verification.is_success());
//! ```

mod check;
mod error;
mod report;


pub use check::{
    check_redirect, check_response, normalize_expected_content, Expectation, Verification,
};
pub use error::VerificationError;
pub use report::{verify_page, verify_redirect, FailureScope};
