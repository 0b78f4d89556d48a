//! # Journeys Module
//!
//! The simulated respondent journeys, registered with goose as weighted
//! scenarios.
//!
//! | Scenario | Weight | Ends on |
//! |---|---|---|
//! | `LaunchEQ` | 70 | redirect to the questionnaire launch |
//! | `LaunchEQWithAddressCorrection` | 10 | confirm address with the corrected line |
//! | `RequestCodeSms` | 10 | access code sent by text |
//! | `RequestCodePost` | 5 | letter sent |
//! | `WebChat` | 5 | queued for an adviser |
//!
//! Each journey is a single goose transaction: every page is a named request
//! (so metrics are reported per page) and a failed verification returns an
//! error, which aborts the rest of the journey for that iteration. Users wait
//! 2 to 10 seconds between iterations.
//!
//! Every user first runs [`configure_client`], which installs a cookie-keeping
//! client that stops at the first redirect leaving the site, so the
//! questionnaire launch can be checked without loading the questionnaire.
//!
//! Shared state reaches the closures through an explicit [`RunContext`].

mod launch;
mod request_code;
mod steps;
mod web_chat;

#[cfg(test)]
mod tests;

use crate::config::RunConfig;
use crate::fixtures::{FixtureRecord, FixtureSet, Selection};
use crate::ids::JourneyId;
use crate::verify::FailureScope;
use goose::prelude::*;
use reqwest::redirect::Policy;
use reqwest::Url;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub use steps::form_body;

/// Shortest pause between two iterations of a user.
pub const MIN_WAIT: Duration = Duration::from_secs(2);
/// Longest pause between two iterations of a user.
pub const MAX_WAIT: Duration = Duration::from_secs(10);
/// Same-site redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 10;
/// Per-request timeout for the journey client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// State shared by every goose user for the whole run.
#[derive(Debug)]
pub struct RunContext {
    pub fixtures: FixtureSet,
    pub selection: Selection,
    pub failure_delay: Duration,
}

impl RunContext {
    pub fn new(fixtures: FixtureSet, config: &RunConfig) -> Self {
        Self {
            fixtures,
            selection: config.selection,
            failure_delay: config.failure_delay,
        }
    }

    /// The fixture driving the next iteration.
    pub fn next_fixture(&self) -> FixtureRecord {
        self.fixtures.pick(self.selection).clone()
    }

    /// A fresh failure scope for one iteration of `journey`.
    pub fn scope<'a>(&self, journey: Journey, fixture: &'a FixtureRecord) -> FailureScope<'a> {
        let scope = FailureScope {
            journey: journey.name(),
            journey_id: JourneyId::new(),
            uac: &fixture.uac,
            failure_delay: self.failure_delay,
        };
        debug!(journey = scope.journey, journey_id = %scope.journey_id, "journey started");
        scope
    }
}

/// One of the simulated respondent journeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Journey {
    LaunchEq,
    LaunchEqWithAddressCorrection,
    RequestCodeSms,
    RequestCodePost,
    WebChat,
}

impl Journey {
    pub const ALL: [Journey; 5] = [
        Journey::LaunchEq,
        Journey::LaunchEqWithAddressCorrection,
        Journey::RequestCodeSms,
        Journey::RequestCodePost,
        Journey::WebChat,
    ];

    /// Scenario name as it appears in goose metrics.
    pub const fn name(self) -> &'static str {
        match self {
            Journey::LaunchEq => "LaunchEQ",
            Journey::LaunchEqWithAddressCorrection => "LaunchEQWithAddressCorrection",
            Journey::RequestCodeSms => "RequestCodeSms",
            Journey::RequestCodePost => "RequestCodePost",
            Journey::WebChat => "WebChat",
        }
    }

    /// Relative share of users, out of 100.
    pub const fn weight(self) -> usize {
        match self {
            Journey::LaunchEq => 70,
            Journey::LaunchEqWithAddressCorrection => 10,
            Journey::RequestCodeSms => 10,
            Journey::RequestCodePost => 5,
            Journey::WebChat => 5,
        }
    }

    /// Run one iteration of this journey for `user`.
    pub async fn run(self, user: &mut GooseUser, ctx: &RunContext) -> TransactionResult {
        match self {
            Journey::LaunchEq => launch::launch_eq(user, ctx).await,
            Journey::LaunchEqWithAddressCorrection => {
                launch::launch_eq_with_address_correction(user, ctx).await
            }
            Journey::RequestCodeSms => request_code::request_code_sms(user, ctx).await,
            Journey::RequestCodePost => request_code::request_code_post(user, ctx).await,
            Journey::WebChat => web_chat::web_chat(user, ctx).await,
        }
    }

    /// The journey as a named goose transaction bound to `ctx`.
    pub fn transaction(self, ctx: Arc<RunContext>) -> Transaction {
        let closure: TransactionFunction = Arc::new(move |user| {
            let ctx = Arc::clone(&ctx);
            Box::pin(async move { self.run(user, &ctx).await })
        });
        Transaction::new(closure).set_name(self.name())
    }

    /// The weighted goose scenario for this journey.
    pub fn scenario(self, ctx: Arc<RunContext>) -> Result<Scenario, GooseError> {
        Ok(Scenario::new(self.name())
            .set_weight(self.weight())?
            .set_wait_time(MIN_WAIT, MAX_WAIT)?
            .register_transaction(
                transaction!(configure_client)
                    .set_name("configure client")
                    .set_on_start(),
            )
            .register_transaction(self.transaction(ctx)))
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Register every journey on `attack`.
pub fn register_journeys(
    mut attack: GooseAttack,
    ctx: Arc<RunContext>,
) -> Result<GooseAttack, GooseError> {
    for journey in Journey::ALL {
        attack = attack.register_scenario(journey.scenario(Arc::clone(&ctx))?);
    }
    Ok(attack)
}

/// On-start transaction: give the user its own cookie jar and stop at the
/// first redirect that leaves the site.
pub async fn configure_client(user: &mut GooseUser) -> TransactionResult {
    let builder = reqwest::Client::builder()
        .user_agent(concat!("census-rh-perf/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .cookie_store(true)
        .redirect(Policy::custom(|attempt| {
            let crosses = attempt
                .previous()
                .last()
                .is_some_and(|from| leaves_host(from, attempt.url()));
            if crosses {
                attempt.stop()
            } else if attempt.previous().len() > MAX_REDIRECTS {
                attempt.error("too many redirects")
            } else {
                attempt.follow()
            }
        }));
    user.set_client_builder(builder).await?;
    Ok(())
}

/// Whether a redirect from `from` to `to` changes host or port.
pub fn leaves_host(from: &Url, to: &Url) -> bool {
    from.host_str() != to.host_str() || from.port_or_known_default() != to.port_or_known_default()
}
