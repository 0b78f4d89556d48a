use std::fmt;

/// Fingerprint of one respondent home page.
///
/// `title_marker` must appear only in this page's markup. The optional
/// `extract_start`/`extract_end` pair bounds the excerpt that is logged when a
/// check against this page fails; when either is `None` the whole (collapsed)
/// body is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub title_marker: &'static str,
    pub extract_start: Option<&'static str>,
    pub extract_end: Option<&'static str>,
}

impl PageDescriptor {
    const fn titled(title_marker: &'static str) -> Self {
        Self {
            title_marker,
            extract_start: None,
            extract_end: None,
        }
    }

    const fn with_excerpt(
        title_marker: &'static str,
        extract_start: &'static str,
        extract_end: &'static str,
    ) -> Self {
        Self {
            title_marker,
            extract_start: Some(extract_start),
            extract_end: Some(extract_end),
        }
    }
}

/// Every page the journeys can land on.
///
/// Classification walks [`Page::ALL`] in declaration order and the first
/// matching marker wins, so keep more specific markers ahead of generic ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Start,
    StartInvalidUac,
    ConfirmAddress,
    AddressEdit,
    RequestEnterPostcode,
    RequestSelectAddress,
    RequestConfirmAddress,
    RequestSelectMethod,
    RequestEnterMobile,
    RequestConfirmMobile,
    RequestCodeSent,
    RequestEnterName,
    RequestConfirmNameAddress,
    RequestLetterSent,
    WebChat,
    WebChatQueued,
    WebChatClosed,
    SessionTimeout,
    Error,
}

const MAIN_START: &str = "<main";
const MAIN_END: &str = "</main>";

const START: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Start census - Census 2021</title>",
    "<h1",
    "</form>",
);
const START_INVALID_UAC: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Error: Start census - Census 2021</title>",
    "<div class=\"panel panel--error",
    "</div>",
);
const CONFIRM_ADDRESS: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Is this the correct address? - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const ADDRESS_EDIT: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Change your address - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_ENTER_POSTCODE: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>What is your postcode? - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_SELECT_ADDRESS: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Select your address - Census 2021</title>",
    "<fieldset",
    "</fieldset>",
);
const REQUEST_CONFIRM_ADDRESS: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Confirm your address - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_SELECT_METHOD: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>How would you like to receive a new household access code? - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_ENTER_MOBILE: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>What is your mobile phone number? - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_CONFIRM_MOBILE: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Is this mobile phone number correct? - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_CODE_SENT: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>We have sent an access code - Census 2021</title>",
    "<h1",
    "</h1>",
);
const REQUEST_ENTER_NAME: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>What is your name? - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_CONFIRM_NAME_ADDRESS: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Do you want to send a new access code to this address? - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const REQUEST_LETTER_SENT: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>A letter will be sent - Census 2021</title>",
    "<h1",
    "</h1>",
);
const WEB_CHAT: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Web chat - Census 2021</title>",
    MAIN_START,
    MAIN_END,
);
const WEB_CHAT_QUEUED: PageDescriptor =
    PageDescriptor::titled("<title>Chat with an adviser - Census 2021</title>");
const WEB_CHAT_CLOSED: PageDescriptor =
    PageDescriptor::titled("<title>Web chat is closed - Census 2021</title>");
const SESSION_TIMEOUT: PageDescriptor = PageDescriptor::with_excerpt(
    "<title>Your session has timed out - Census 2021</title>",
    "<h1",
    "</h1>",
);
const ERROR: PageDescriptor = PageDescriptor::with_excerpt(
    "Sorry, something went wrong",
    MAIN_START,
    MAIN_END,
);

impl Page {
    /// Classification order.
    pub const ALL: [Page; 19] = [
        Page::Start,
        Page::StartInvalidUac,
        Page::ConfirmAddress,
        Page::AddressEdit,
        Page::RequestEnterPostcode,
        Page::RequestSelectAddress,
        Page::RequestConfirmAddress,
        Page::RequestSelectMethod,
        Page::RequestEnterMobile,
        Page::RequestConfirmMobile,
        Page::RequestCodeSent,
        Page::RequestEnterName,
        Page::RequestConfirmNameAddress,
        Page::RequestLetterSent,
        Page::WebChat,
        Page::WebChatQueued,
        Page::WebChatClosed,
        Page::SessionTimeout,
        Page::Error,
    ];

    pub const fn descriptor(self) -> &'static PageDescriptor {
        match self {
            Page::Start => &START,
            Page::StartInvalidUac => &START_INVALID_UAC,
            Page::ConfirmAddress => &CONFIRM_ADDRESS,
            Page::AddressEdit => &ADDRESS_EDIT,
            Page::RequestEnterPostcode => &REQUEST_ENTER_POSTCODE,
            Page::RequestSelectAddress => &REQUEST_SELECT_ADDRESS,
            Page::RequestConfirmAddress => &REQUEST_CONFIRM_ADDRESS,
            Page::RequestSelectMethod => &REQUEST_SELECT_METHOD,
            Page::RequestEnterMobile => &REQUEST_ENTER_MOBILE,
            Page::RequestConfirmMobile => &REQUEST_CONFIRM_MOBILE,
            Page::RequestCodeSent => &REQUEST_CODE_SENT,
            Page::RequestEnterName => &REQUEST_ENTER_NAME,
            Page::RequestConfirmNameAddress => &REQUEST_CONFIRM_NAME_ADDRESS,
            Page::RequestLetterSent => &REQUEST_LETTER_SENT,
            Page::WebChat => &WEB_CHAT,
            Page::WebChatQueued => &WEB_CHAT_QUEUED,
            Page::WebChatClosed => &WEB_CHAT_CLOSED,
            Page::SessionTimeout => &SESSION_TIMEOUT,
            Page::Error => &ERROR,
        }
    }

    /// Stable snake_case name used in logs and failure tags.
    pub const fn name(self) -> &'static str {
        match self {
            Page::Start => "start",
            Page::StartInvalidUac => "start_invalid_uac",
            Page::ConfirmAddress => "confirm_address",
            Page::AddressEdit => "address_edit",
            Page::RequestEnterPostcode => "request_enter_postcode",
            Page::RequestSelectAddress => "request_select_address",
            Page::RequestConfirmAddress => "request_confirm_address",
            Page::RequestSelectMethod => "request_select_method",
            Page::RequestEnterMobile => "request_enter_mobile",
            Page::RequestConfirmMobile => "request_confirm_mobile",
            Page::RequestCodeSent => "request_code_sent",
            Page::RequestEnterName => "request_enter_name",
            Page::RequestConfirmNameAddress => "request_confirm_name_address",
            Page::RequestLetterSent => "request_letter_sent",
            Page::WebChat => "web_chat",
            Page::WebChatQueued => "web_chat_queued",
            Page::WebChatClosed => "web_chat_closed",
            Page::SessionTimeout => "session_timeout",
            Page::Error => "error",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
