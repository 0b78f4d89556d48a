use super::steps::{post_page, post_redirect, start, START_PATH};
use super::{Journey, RunContext};
use crate::fixtures::FixtureRecord;
use crate::pages::Page;
use crate::verify::{Expectation, FailureScope};
use goose::prelude::*;

const CONFIRM_ADDRESS_PATH: &str = "/en/start/confirm-address/";
const ADDRESS_EDIT_PATH: &str = "/en/start/address-edit/";

/// Present in the `Location` of a successful questionnaire launch.
pub(super) const EQ_LAUNCH_FRAGMENT: &str = "/session?token=";

/// Start page, access code, "yes this is my address", questionnaire launch.
pub(super) async fn launch_eq(user: &mut GooseUser, ctx: &RunContext) -> TransactionResult {
    let fixture = ctx.next_fixture();
    let scope = ctx.scope(Journey::LaunchEq, &fixture);

    enter_uac(user, &scope, &fixture).await?;
    post_redirect(
        user,
        &scope,
        "confirm address",
        CONFIRM_ADDRESS_PATH,
        &[("address-check-answer", "Yes")],
        EQ_LAUNCH_FRAGMENT,
    )
    .await
}

/// As [`launch_eq`] but the respondent rejects the address and corrects it.
pub(super) async fn launch_eq_with_address_correction(
    user: &mut GooseUser,
    ctx: &RunContext,
) -> TransactionResult {
    let fixture = ctx.next_fixture();
    let scope = ctx.scope(Journey::LaunchEqWithAddressCorrection, &fixture);

    enter_uac(user, &scope, &fixture).await?;
    post_page(
        user,
        &scope,
        "reject address",
        CONFIRM_ADDRESS_PATH,
        &[("address-check-answer", "No")],
        Expectation::page(Page::AddressEdit),
    )
    .await?;

    let line1 = corrected_line1(&fixture);
    post_page(
        user,
        &scope,
        "correct address",
        ADDRESS_EDIT_PATH,
        &[
            ("address-line-1", line1.as_str()),
            ("address-line-2", fixture.address_line2.as_str()),
            ("address-line-3", fixture.address_line3.as_str()),
            ("address-town", fixture.town_name.as_str()),
            ("address-postcode", fixture.postcode.as_str()),
        ],
        Expectation::page(Page::ConfirmAddress).with_content(line1.as_str()),
    )
    .await
}

async fn enter_uac(
    user: &mut GooseUser,
    scope: &FailureScope<'_>,
    fixture: &FixtureRecord,
) -> TransactionResult {
    start(user, scope).await?;
    post_page(
        user,
        scope,
        "enter uac",
        START_PATH,
        &[("uac", fixture.uac.as_str())],
        Expectation::page(Page::ConfirmAddress).with_content(fixture.address_line1.as_str()),
    )
    .await
}

/// The first address line the respondent types in place of the stored one.
pub(super) fn corrected_line1(fixture: &FixtureRecord) -> String {
    format!("Flat 1, {}", fixture.address_line1.trim())
}
