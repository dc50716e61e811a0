use serde::Serialize;

use super::domain::{ListingId, ListingRecord};

/// Browsing context every outbound listing link opens in.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// Display projection of a [`ListingRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingCard {
    pub id: ListingId,
    pub title: String,
    pub specialty: String,
    pub clinic_name: String,
    pub dates: String,
    pub time: String,
    pub location: String,
    pub rate: String,
    pub description: String,
    pub href: String,
    pub button_label: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<&ListingRecord> for ListingCard {
    fn from(record: &ListingRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            specialty: record.specialty.clone(),
            clinic_name: record.clinic_name.clone(),
            dates: record.dates.clone(),
            time: record.time.clone(),
            location: record.location.clone(),
            rate: record.rate.clone(),
            description: record.description.clone(),
            href: record.application_link.clone(),
            button_label: record.button_label().to_string(),
            target: LINK_TARGET,
            rel: LINK_REL,
        }
    }
}
