use super::error::VerificationError;
use crate::pages::{collapse_blank_lines, extract_diagnostic, identify, Page};

/// What a step expects to land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation<'a> {
    pub status: u16,
    pub page: Page,
    /// Substring that must appear in the body; empty disables the check.
    pub content: &'a str,
}

impl<'a> Expectation<'a> {
    /// A `200 OK` rendering of `page`.
    pub fn page(page: Page) -> Self {
        Self {
            status: 200,
            page,
            content: "",
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_content(mut self, content: &'a str) -> Self {
        self.content = content;
        self
    }
}

/// Outcome of checking one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub status: u16,
    /// Page the body was identified as, if any.
    pub page: Option<Page>,
    pub errors: Vec<VerificationError>,
}

impl Verification {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// A request that never produced a response.
    pub fn transport(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            page: None,
            errors: vec![VerificationError::Transport(message.into())],
        }
    }

    /// All error messages joined with `"; "`.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn first_excerpt(&self) -> Option<&str> {
        self.errors.iter().find_map(VerificationError::excerpt)
    }
}

/// Rendered HTML escapes apostrophes as a numeric entity.
pub fn normalize_expected_content(content: &str) -> String {
    content.replace('\'', "&#39;")
}

/// Lazily computed diagnostic excerpt of the page actually rendered.
struct Evidence<'a> {
    body: &'a str,
    page: Option<Page>,
    excerpt: Option<String>,
}

impl<'a> Evidence<'a> {
    fn excerpt(&mut self, errors: &mut Vec<VerificationError>) -> String {
        if let Some(excerpt) = &self.excerpt {
            return excerpt.clone();
        }
        let excerpt = match self.page {
            Some(page) => match extract_diagnostic(self.body, page) {
                Ok(excerpt) => excerpt,
                Err(err) => {
                    let body = err.body.clone();
                    errors.push(VerificationError::Extraction(err));
                    body
                }
            },
            None => collapse_blank_lines(self.body),
        };
        self.excerpt = Some(excerpt.clone());
        excerpt
    }
}

/// Check a response body and status against `expected`.
///
/// An empty body records only [`VerificationError::EmptyResponse`]. Otherwise
/// the page, status and content checks all run so a single report carries
/// every problem found.
pub fn check_response(body: &str, status: u16, expected: &Expectation<'_>) -> Verification {
    let mut errors = Vec::new();

    if body.is_empty() {
        errors.push(VerificationError::EmptyResponse);
        return Verification {
            status,
            page: None,
            errors,
        };
    }

    let page = identify(body).ok();
    let mut evidence = Evidence {
        body,
        page,
        excerpt: None,
    };

    match page {
        None => {
            let excerpt = evidence.excerpt(&mut errors);
            errors.push(VerificationError::Classification { excerpt });
        }
        Some(actual) if actual != expected.page => {
            let excerpt = evidence.excerpt(&mut errors);
            errors.push(VerificationError::WrongPage {
                expected: expected.page,
                actual,
                excerpt,
            });
        }
        Some(_) => {}
    }

    if status != expected.status {
        let excerpt = evidence.excerpt(&mut errors);
        errors.push(VerificationError::StatusMismatch {
            expected: expected.status.to_string(),
            actual: status,
            excerpt,
        });
    }

    if !expected.content.is_empty() {
        let needle = normalize_expected_content(expected.content);
        if !body.contains(&needle) {
            let excerpt = evidence.excerpt(&mut errors);
            errors.push(VerificationError::ContentMissing {
                expected: needle,
                excerpt,
            });
        }
    }

    Verification {
        status,
        page,
        errors,
    }
}

/// Check that a response is a redirect whose `Location` contains `fragment`.
pub fn check_redirect(status: u16, location: Option<&str>, fragment: &str) -> Verification {
    let mut errors = Vec::new();
    let location_text = location.unwrap_or_default().to_string();

    if !(300..400).contains(&status) {
        errors.push(VerificationError::StatusMismatch {
            expected: "3xx".to_string(),
            actual: status,
            excerpt: location_text.clone(),
        });
    }

    if !location_text.contains(fragment) {
        errors.push(VerificationError::ContentMissing {
            expected: fragment.to_string(),
            excerpt: location_text,
        });
    }

    Verification {
        status,
        page: None,
        errors,
    }
}
