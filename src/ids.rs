use std::fmt::{Display, Formatter};

/// Strongly typed journey identifier backed by ULID.
///
/// A new id is minted for every iteration of a journey so the log lines of
/// one simulated user's attempt can be grouped even when the same access code
/// is reused later in the run.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct JourneyId(pub ulid::Ulid);

impl JourneyId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for JourneyId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for JourneyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
