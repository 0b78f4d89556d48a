use super::steps::{get_page, post_page, start};
use super::{Journey, RunContext};
use crate::pages::Page;
use crate::verify::Expectation;
use goose::prelude::*;

const WEB_CHAT_PATH: &str = "/en/web-chat/";

/// Start page, web chat form, joined the adviser queue.
pub(super) async fn web_chat(user: &mut GooseUser, ctx: &RunContext) -> TransactionResult {
    let fixture = ctx.next_fixture();
    let scope = ctx.scope(Journey::WebChat, &fixture);

    start(user, &scope).await?;
    get_page(
        user,
        &scope,
        "web chat",
        WEB_CHAT_PATH,
        Expectation::page(Page::WebChat),
    )
    .await?;

    let screen_name = fixture.full_name();
    post_page(
        user,
        &scope,
        "join chat",
        WEB_CHAT_PATH,
        &[
            ("screen_name", screen_name.as_str()),
            ("country", "England"),
            ("query", "technical"),
        ],
        Expectation::page(Page::WebChatQueued),
    )
    .await
}
