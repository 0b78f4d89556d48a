use super::check::{check_redirect, check_response, Expectation, Verification};
use crate::ids::JourneyId;
use goose::goose::GooseResponse;
use goose::metrics::GooseRequestMetric;
use goose::prelude::*;
use reqwest::header::{HeaderMap, LOCATION};
use std::time::Duration;
use tracing::{debug, error};

/// Who a failure belongs to, and how long to hold the user after reporting it.
#[derive(Debug, Clone, Copy)]
pub struct FailureScope<'a> {
    /// Scenario name, e.g. `LaunchEQ`.
    pub journey: &'a str,
    pub journey_id: JourneyId,
    /// Access code of the fixture driving this iteration.
    pub uac: &'a str,
    pub failure_delay: Duration,
}

/// Verify the page rendered by `goose` and mark the request accordingly.
///
/// On any failure the errors are logged, the user sleeps for the scope's
/// failure delay and an `Err` is returned so `?` aborts the journey.
pub async fn verify_page(
    user: &mut GooseUser,
    mut goose: GooseResponse,
    scope: &FailureScope<'_>,
    step: &str,
    expected: &Expectation<'_>,
) -> TransactionResult {
    let response = match goose.response {
        Ok(response) => response,
        Err(err) => {
            let verification = Verification::transport(goose.request.status_code, err.to_string());
            return report_failure(user, &mut goose.request, scope, step, &verification, None)
                .await;
        }
    };

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            let verification = Verification::transport(status, err.to_string());
            return report_failure(
                user,
                &mut goose.request,
                scope,
                step,
                &verification,
                Some(&headers),
            )
            .await;
        }
    };

    let verification = check_response(&body, status, expected);
    if verification.is_success() {
        debug!(
            journey = scope.journey,
            journey_id = %scope.journey_id,
            step,
            page = %expected.page,
            status,
            "page verified"
        );
        return user.set_success(&mut goose.request);
    }

    report_failure(
        user,
        &mut goose.request,
        scope,
        step,
        &verification,
        Some(&headers),
    )
    .await
}

/// Verify that `goose` is a redirect whose `Location` contains `fragment`.
pub async fn verify_redirect(
    user: &mut GooseUser,
    mut goose: GooseResponse,
    scope: &FailureScope<'_>,
    step: &str,
    fragment: &str,
) -> TransactionResult {
    let response = match goose.response {
        Ok(response) => response,
        Err(err) => {
            let verification = Verification::transport(goose.request.status_code, err.to_string());
            return report_failure(user, &mut goose.request, scope, step, &verification, None)
                .await;
        }
    };

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let location = headers.get(LOCATION).and_then(|value| value.to_str().ok());

    let verification = check_redirect(status, location, fragment);
    if verification.is_success() {
        debug!(
            journey = scope.journey,
            journey_id = %scope.journey_id,
            step,
            status,
            location = location.unwrap_or_default(),
            "redirect verified"
        );
        return user.set_success(&mut goose.request);
    }

    report_failure(
        user,
        &mut goose.request,
        scope,
        step,
        &verification,
        Some(&headers),
    )
    .await
}

async fn report_failure(
    user: &mut GooseUser,
    request: &mut GooseRequestMetric,
    scope: &FailureScope<'_>,
    step: &str,
    verification: &Verification,
    headers: Option<&HeaderMap>,
) -> TransactionResult {
    for err in &verification.errors {
        error!(
            journey = scope.journey,
            journey_id = %scope.journey_id,
            uac = scope.uac,
            step,
            status = verification.status,
            kind = err.kind(),
            excerpt = err.excerpt().unwrap_or_default(),
            "{}",
            err
        );
    }

    // Hold only this user so a broken environment cannot flood the log.
    tokio::time::sleep(scope.failure_delay).await;

    let tag = format!("{}: {}", step, verification.summary());
    user.set_failure(&tag, request, headers, verification.first_excerpt())
}
