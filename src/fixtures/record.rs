use serde::Deserialize;

/// One household from the fixture file.
///
/// Only `uac` is mandatory. The file has gained columns over time (names and
/// phone numbers arrived late), so every other column falls back to a default
/// when absent and unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    pub uac: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub address_line3: String,
    #[serde(default)]
    pub town_name: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub uprn: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default = "default_active")]
    pub active: String,
    #[serde(default)]
    pub questionnaire_id: String,
    #[serde(default)]
    pub case_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(rename = "first_name", default)]
    pub first_name: String,
    #[serde(rename = "last_name", default)]
    pub last_name: String,
    #[serde(rename = "phone_number", default)]
    pub phone_number: String,
}

fn default_active() -> String {
    "true".to_string()
}

impl FixtureRecord {
    pub fn is_active(&self) -> bool {
        self.active.trim().eq_ignore_ascii_case("true")
    }

    /// `first last`, or `"Load Test"` when the fixture predates name columns.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            "Load Test".to_string()
        } else {
            name.to_string()
        }
    }
}
