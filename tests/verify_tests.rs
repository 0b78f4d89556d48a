//! Verifying rendered pages the way a journey step does.

use census_rh_perf::pages::Page;
use census_rh_perf::verify::{check_redirect, check_response, Expectation, VerificationError};

const START: &str = "<html><head><title>Start census - Census 2021</title></head><body>\
<main><h1>Start census</h1><form><label>Enter your 16-character access code</label>\
<input name=\"uac\"></form></main></body></html>";

const CONFIRM_ADDRESS: &str = "<html><head><title>Is this the correct address? - Census 2021</title>\
</head><body>\n<main>\n<h1>Is this the correct address?</h1>\n\n\n\n<p>1 Gate Reach</p>\n\
<p>O'Brien's Yard</p>\n</main></body></html>";

#[test]
fn test_start_page_verifies() {
    let body = "<title>Start census - Census 2021</title>...Enter your 16-character access code...";
    let verification = check_response(body, 200, &Expectation::page(Page::Start));
    assert!(verification.is_success(), "{}", verification.summary());
    assert_eq!(verification.page, Some(Page::Start));
}

#[test]
fn test_full_start_page_verifies() {
    let verification = check_response(START, 200, &Expectation::page(Page::Start));
    assert!(verification.is_success());
}

#[test]
fn test_wrong_page_records_exactly_one_error() {
    let verification = check_response(START, 200, &Expectation::page(Page::ConfirmAddress));
    assert_eq!(verification.errors.len(), 1);
    match &verification.errors[0] {
        VerificationError::WrongPage {
            expected,
            actual,
            excerpt,
        } => {
            assert_eq!(*expected, Page::ConfirmAddress);
            assert_eq!(*actual, Page::Start);
            assert!(excerpt.starts_with("<h1>Start census</h1>"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_empty_body_records_only_empty_response() {
    for page in [Page::Start, Page::WebChatQueued, Page::Error] {
        let verification = check_response("", 200, &Expectation::page(page));
        assert_eq!(verification.errors, vec![VerificationError::EmptyResponse]);
        assert_eq!(verification.first_excerpt(), None);
    }
}

#[test]
fn test_content_with_apostrophe_matches_escaped_html() {
    let body = CONFIRM_ADDRESS.replace("O'Brien's", "O&#39;Brien&#39;s");
    let expected = Expectation::page(Page::ConfirmAddress).with_content("O'Brien's Yard");
    assert!(check_response(&body, 200, &expected).is_success());

    let verification = check_response(CONFIRM_ADDRESS, 200, &expected);
    assert_eq!(verification.errors.len(), 1);
    assert_eq!(verification.errors[0].kind(), "content_missing");
}

#[test]
fn test_failures_are_collected_together() {
    let expected = Expectation::page(Page::ConfirmAddress).with_content("2 Gate Reach");
    let verification = check_response(CONFIRM_ADDRESS, 500, &expected);
    let kinds: Vec<_> = verification.errors.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["status_mismatch", "content_missing"]);
    let excerpt = verification.first_excerpt().unwrap();
    assert!(excerpt.contains("<h1>Is this the correct address?</h1>\n\n<p>1 Gate Reach</p>"));
}

#[test]
fn test_questionnaire_launch_redirect() {
    let launch = "https://eq.example/session?token=eyJhbGciOi";
    assert!(check_redirect(302, Some(launch), "/session?token=").is_success());

    let stayed = check_redirect(200, None, "/session?token=");
    let kinds: Vec<_> = stayed.errors.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["status_mismatch", "content_missing"]);
}
