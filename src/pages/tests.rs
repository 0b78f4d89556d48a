use super::*;
use std::collections::HashSet;

fn page_body(page: Page) -> String {
    format!(
        "<html><head>{}</head>\n<body>\n<main>\n<h1>heading</h1>\n<fieldset>x</fieldset>\n\
         <div class=\"panel panel--error\">bad code</div>\n<form></form>\n</main></body></html>",
        page.descriptor().title_marker
    )
}

#[test]
fn test_every_page_classifies_as_itself() {
    for page in Page::ALL {
        assert_eq!(identify(&page_body(page)).unwrap(), page, "page {}", page);
    }
}

#[test]
fn test_markers_are_unique() {
    let markers: HashSet<_> = Page::ALL
        .iter()
        .map(|p| p.descriptor().title_marker)
        .collect();
    assert_eq!(markers.len(), Page::ALL.len());
}

#[test]
fn test_no_marker_contains_another() {
    for a in Page::ALL {
        for b in Page::ALL {
            if a != b {
                assert!(
                    !a.descriptor().title_marker.contains(b.descriptor().title_marker),
                    "{} marker contains {} marker",
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_first_match_wins() {
    let body = format!(
        "{}{}",
        Page::WebChat.descriptor().title_marker,
        Page::Error.descriptor().title_marker
    );
    assert_eq!(classify(&body, &[Page::Error, Page::WebChat]).unwrap(), Page::Error);
    assert_eq!(classify(&body, &[Page::WebChat, Page::Error]).unwrap(), Page::WebChat);
}

#[test]
fn test_unknown_body_is_classification_error() {
    assert_eq!(identify("<html>nothing</html>"), Err(ClassificationError));
    assert_eq!(identify(""), Err(ClassificationError));
}

#[test]
fn test_invalid_uac_is_not_start() {
    let body = "<title>Error: Start census - Census 2021</title>";
    assert_eq!(identify(body).unwrap(), Page::StartInvalidUac);
}

#[test]
fn test_collapse_blank_lines() {
    assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
    assert_eq!(collapse_blank_lines("a\n  \n\t\nb"), "a\n\nb");
    assert_eq!(collapse_blank_lines("a\nb\n\nc"), "a\nb\n\nc");
    assert_eq!(collapse_blank_lines("a\r\n\r\n\r\nb"), "a\r\n\nb");
}

#[test]
fn test_collapse_is_idempotent() {
    let samples = [
        "a\n\n\n\nb\n \n \nc",
        "\n\n\nstart",
        "end\n\n\n",
        "no blank lines",
        "<main>\n\n  \n<h1>x</h1>\n\n\n</main>",
    ];
    for sample in samples {
        let once = collapse_blank_lines(sample);
        assert_eq!(collapse_blank_lines(&once), once);
    }
}

#[test]
fn test_extract_between_markers() {
    let body = "<title>Web chat - Census 2021</title><main>\n\n\n<p>hi</p></main><footer/>";
    let excerpt = extract_diagnostic(body, Page::WebChat).unwrap();
    assert_eq!(excerpt, "<main>\n\n<p>hi</p>");
}

#[test]
fn test_end_marker_searched_after_start() {
    let body = "</h1><title>We have sent an access code - Census 2021</title><h1>Sent</h1>";
    let excerpt = extract_diagnostic(body, Page::RequestCodeSent).unwrap();
    assert_eq!(excerpt, "<h1>Sent");
}

#[test]
fn test_page_without_markers_returns_whole_body() {
    let body = "<title>Web chat is closed - Census 2021</title>\n\n\n<p>closed</p>";
    let excerpt = extract_diagnostic(body, Page::WebChatClosed).unwrap();
    assert_eq!(excerpt, "<title>Web chat is closed - Census 2021</title>\n\n<p>closed</p>");
}

#[test]
fn test_missing_marker_reports_extraction_error() {
    let body = "<title>Web chat - Census 2021</title>\n\n\n<p>no main here</p>";
    let err = extract_diagnostic(body, Page::WebChat).unwrap_err();
    assert_eq!(err.page, Page::WebChat);
    assert_eq!(err.missing, "<main");
    assert_eq!(err.body, "<title>Web chat - Census 2021</title>\n\n<p>no main here</p>");

    let body = "<main>never closed";
    let err = extract_diagnostic(body, Page::WebChat).unwrap_err();
    assert_eq!(err.missing, "</main>");
}
