use super::steps::{get_page, post_page, start};
use super::{Journey, RunContext};
use crate::fixtures::FixtureRecord;
use crate::pages::Page;
use crate::verify::{Expectation, FailureScope};
use goose::prelude::*;

const ENTER_POSTCODE_PATH: &str = "/en/request-access-code/";
const SELECT_ADDRESS_PATH: &str = "/en/request-access-code/select-address/";
const CONFIRM_ADDRESS_PATH: &str = "/en/request-access-code/confirm-address/";
const SELECT_METHOD_PATH: &str = "/en/request-access-code/select-method/";
const ENTER_MOBILE_PATH: &str = "/en/request-access-code/enter-mobile/";
const CONFIRM_MOBILE_PATH: &str = "/en/request-access-code/confirm-mobile/";
const ENTER_NAME_PATH: &str = "/en/request-access-code/enter-name/";
const CONFIRM_NAME_ADDRESS_PATH: &str = "/en/request-access-code/confirm-name-address/";

/// Used when the fixture has no phone number.
pub(super) const DEFAULT_MOBILE: &str = "07714 330 933";

/// New access code delivered by text message.
pub(super) async fn request_code_sms(user: &mut GooseUser, ctx: &RunContext) -> TransactionResult {
    let fixture = ctx.next_fixture();
    let scope = ctx.scope(Journey::RequestCodeSms, &fixture);

    choose_method(user, &scope, &fixture).await?;
    post_page(
        user,
        &scope,
        "select sms",
        SELECT_METHOD_PATH,
        &[("request-method", "sms")],
        Expectation::page(Page::RequestEnterMobile),
    )
    .await?;
    post_page(
        user,
        &scope,
        "enter mobile",
        ENTER_MOBILE_PATH,
        &[("request-mobile-number", mobile_number(&fixture))],
        Expectation::page(Page::RequestConfirmMobile),
    )
    .await?;
    post_page(
        user,
        &scope,
        "confirm mobile",
        CONFIRM_MOBILE_PATH,
        &[("request-mobile-confirmation", "yes")],
        Expectation::page(Page::RequestCodeSent),
    )
    .await
}

/// New access code delivered by post.
pub(super) async fn request_code_post(
    user: &mut GooseUser,
    ctx: &RunContext,
) -> TransactionResult {
    let fixture = ctx.next_fixture();
    let scope = ctx.scope(Journey::RequestCodePost, &fixture);

    choose_method(user, &scope, &fixture).await?;
    post_page(
        user,
        &scope,
        "select post",
        SELECT_METHOD_PATH,
        &[("request-method", "post")],
        Expectation::page(Page::RequestEnterName),
    )
    .await?;

    let (first_name, last_name) = names(&fixture);
    post_page(
        user,
        &scope,
        "enter name",
        ENTER_NAME_PATH,
        &[
            ("request-name-first", first_name),
            ("request-name-last", last_name),
        ],
        Expectation::page(Page::RequestConfirmNameAddress).with_content(first_name),
    )
    .await?;
    post_page(
        user,
        &scope,
        "confirm name and address",
        CONFIRM_NAME_ADDRESS_PATH,
        &[("request-name-address-confirmation", "yes")],
        Expectation::page(Page::RequestLetterSent),
    )
    .await
}

/// Start page through to "how would you like to receive a new code".
async fn choose_method(
    user: &mut GooseUser,
    scope: &FailureScope<'_>,
    fixture: &FixtureRecord,
) -> TransactionResult {
    start(user, scope).await?;
    get_page(
        user,
        scope,
        "request code",
        ENTER_POSTCODE_PATH,
        Expectation::page(Page::RequestEnterPostcode),
    )
    .await?;
    post_page(
        user,
        scope,
        "enter postcode",
        ENTER_POSTCODE_PATH,
        &[("request-postcode", fixture.postcode.as_str())],
        Expectation::page(Page::RequestSelectAddress).with_content(fixture.address_line1.as_str()),
    )
    .await?;

    let selected = address_selection(fixture);
    post_page(
        user,
        scope,
        "select address",
        SELECT_ADDRESS_PATH,
        &[("request-address-select", selected.as_str())],
        Expectation::page(Page::RequestConfirmAddress),
    )
    .await?;
    post_page(
        user,
        scope,
        "confirm address",
        CONFIRM_ADDRESS_PATH,
        &[("request-address-confirmation", "yes")],
        Expectation::page(Page::RequestSelectMethod),
    )
    .await
}

/// Value of the chosen radio button on the address list.
pub(super) fn address_selection(fixture: &FixtureRecord) -> String {
    format!(
        "{{'uprn': '{}', 'address': '{}'}}",
        fixture.uprn, fixture.address_line1
    )
}

pub(super) fn mobile_number(fixture: &FixtureRecord) -> &str {
    match fixture.phone_number.trim() {
        "" => DEFAULT_MOBILE,
        number => number,
    }
}

/// First and last name, falling back to `Load` / `Test`.
pub(super) fn names(fixture: &FixtureRecord) -> (&str, &str) {
    let first = match fixture.first_name.trim() {
        "" => "Load",
        name => name,
    };
    let last = match fixture.last_name.trim() {
        "" => "Test",
        name => name,
    };
    (first, last)
}
