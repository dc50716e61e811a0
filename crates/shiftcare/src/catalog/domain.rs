use serde::{Deserialize, Serialize};

/// Label shown on a listing's outbound link when the record carries none.
pub const DEFAULT_BUTTON_LABEL: &str = "Apply Now";

/// Identifier wrapper for listings, unique within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One example shift advertised on the landing page.
///
/// Display fields are opaque strings; only `application_link` is checked, at
/// load time, and it is rendered exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListingRecord {
    pub id: ListingId,
    pub title: String,
    pub specialty: String,
    pub clinic_name: String,
    pub dates: String,
    pub time: String,
    pub location: String,
    pub rate: String,
    pub description: String,
    pub application_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

impl ListingRecord {
    /// `button_text` when set to something non-empty, else [`DEFAULT_BUTTON_LABEL`].
    pub fn button_label(&self) -> &str {
        self.button_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_BUTTON_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(button_text: Option<&str>) -> ListingRecord {
        ListingRecord {
            id: ListingId(7),
            title: "Night Nurse".to_string(),
            specialty: "Critical Care".to_string(),
            clinic_name: "Harbor ICU".to_string(),
            dates: "Friday, July 19th".to_string(),
            time: "7:00 PM - 7:00 AM".to_string(),
            location: "Harborside, City".to_string(),
            rate: "$80/hour".to_string(),
            description: "ICU night coverage.".to_string(),
            application_link: "https://example.org/apply".to_string(),
            button_text: button_text.map(str::to_string),
        }
    }

    #[test]
    fn missing_button_text_uses_default_label() {
        assert_eq!(record(None).button_label(), "Apply Now");
    }

    #[test]
    fn custom_button_text_is_used_verbatim() {
        assert_eq!(
            record(Some("Apply via WhatsApp")).button_label(),
            "Apply via WhatsApp"
        );
    }

    #[test]
    fn empty_button_text_falls_back() {
        assert_eq!(record(Some("")).button_label(), DEFAULT_BUTTON_LABEL);
    }

    #[test]
    fn json_shape_uses_camel_case() {
        let json = serde_json::to_value(record(None)).expect("serializes");
        assert_eq!(json["clinicName"], "Harbor ICU");
        assert_eq!(json["applicationLink"], "https://example.org/apply");
        assert!(json.get("buttonText").is_none());
    }
}
