use crate::pages::Page;
use crate::verify::{verify_page, verify_redirect, Expectation, FailureScope};
use goose::goose::GooseResponse;
use goose::prelude::*;
use reqwest::header::CONTENT_TYPE;

pub(super) const START_PATH: &str = "/en/start/";

/// Encode `fields` as an `application/x-www-form-urlencoded` body.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Named GET of `path`.
pub(super) async fn get(
    user: &mut GooseUser,
    name: &str,
    path: &str,
) -> Result<GooseResponse, Box<TransactionError>> {
    let request_builder = user.get_request_builder(&GooseMethod::Get, path)?;
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Get)
        .path(path)
        .name(name)
        .set_request_builder(request_builder)
        .build();
    user.request(goose_request).await
}

/// Named form POST of `fields` to `path`.
pub(super) async fn post_form(
    user: &mut GooseUser,
    name: &str,
    path: &str,
    fields: &[(&str, &str)],
    expect_status: u16,
) -> Result<GooseResponse, Box<TransactionError>> {
    let request_builder = user
        .get_request_builder(&GooseMethod::Post, path)?
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(form_body(fields));
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path(path)
        .name(name)
        .expect_status_code(expect_status)
        .set_request_builder(request_builder)
        .build();
    user.request(goose_request).await
}

/// GET `path` and verify the page it renders.
pub(super) async fn get_page(
    user: &mut GooseUser,
    scope: &FailureScope<'_>,
    step: &str,
    path: &str,
    expected: Expectation<'_>,
) -> TransactionResult {
    let goose = get(user, step, path).await?;
    verify_page(user, goose, scope, step, &expected).await
}

/// POST `fields` to `path` and verify the page it renders.
pub(super) async fn post_page(
    user: &mut GooseUser,
    scope: &FailureScope<'_>,
    step: &str,
    path: &str,
    fields: &[(&str, &str)],
    expected: Expectation<'_>,
) -> TransactionResult {
    let goose = post_form(user, step, path, fields, expected.status).await?;
    verify_page(user, goose, scope, step, &expected).await
}

/// POST `fields` to `path` and verify it redirects to a location containing `fragment`.
pub(super) async fn post_redirect(
    user: &mut GooseUser,
    scope: &FailureScope<'_>,
    step: &str,
    path: &str,
    fields: &[(&str, &str)],
    fragment: &str,
) -> TransactionResult {
    let goose = post_form(user, step, path, fields, 302).await?;
    verify_redirect(user, goose, scope, step, fragment).await
}

/// Every journey begins on the start page.
pub(super) async fn start(user: &mut GooseUser, scope: &FailureScope<'_>) -> TransactionResult {
    get_page(user, scope, "start", START_PATH, Expectation::page(Page::Start)).await
}
