use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use url::Url;

use super::card::ListingCard;
use super::domain::{ListingId, ListingRecord};

/// Failure loading a catalog. Any one bad record rejects the whole catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("unable to read listings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed listings document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("listing id {id} appears more than once")]
    DuplicateId { id: ListingId },
    #[error("listing {id} has an invalid application link '{link}': {source}")]
    InvalidApplicationLink {
        id: ListingId,
        link: String,
        #[source]
        source: url::ParseError,
    },
}

/// Ordered, immutable set of listings shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingCatalog {
    records: Vec<ListingRecord>,
}

impl ListingCatalog {
    /// Validate records and keep them in declaration order.
    pub fn from_records(records: Vec<ListingRecord>) -> Result<Self, CatalogLoadError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogLoadError::DuplicateId { id: record.id });
            }
            // Url::parse only accepts absolute URIs.
            Url::parse(&record.application_link).map_err(|source| {
                CatalogLoadError::InvalidApplicationLink {
                    id: record.id,
                    link: record.application_link.clone(),
                    source,
                }
            })?;
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of listing records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let records: Vec<ListingRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load from `path` when given, otherwise use [`ListingCatalog::standard`].
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::standard()),
        }
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One card per record, in catalog order.
    pub fn cards(&self) -> Vec<ListingCard> {
        self.records.iter().map(ListingCard::from).collect()
    }

    /// The example shifts advertised during pre-launch.
    pub fn standard() -> Self {
        let records = vec![
            ListingRecord {
                id: ListingId(1),
                title: "Emergency Physician".to_string(),
                specialty: "Emergency Medicine".to_string(),
                clinic_name: "City General Hospital".to_string(),
                dates: "Sunday, July 14th".to_string(),
                time: "8:00 AM - 6:00 PM".to_string(),
                location: "Downtown, City".to_string(),
                rate: "$120/hour".to_string(),
                description: "Seeking an experienced Emergency Physician for a busy Sunday shift. Must be board-certified with valid ACLS/BLS.".to_string(),
                application_link: "https://wa.me/yournumber?text=I%27m%20interested%20in%20the%20Emergency%20Physician%20shift%20at%20City%20General%20Hospital".to_string(),
                button_text: Some("Apply via WhatsApp".to_string()),
            },
            ListingRecord {
                id: ListingId(2),
                title: "Pediatric Nurse".to_string(),
                specialty: "Pediatrics".to_string(),
                clinic_name: "Children's Care Clinic".to_string(),
                dates: "Monday, July 15th".to_string(),
                time: "9:00 AM - 5:00 PM".to_string(),
                location: "Northside, City".to_string(),
                rate: "$65/hour".to_string(),
                description: "Experienced Pediatric Nurse needed for a day shift. Strong communication skills required.".to_string(),
                application_link: "https://docs.google.com/forms/d/e/YOUR_GOOGLE_FORM_ID/viewform".to_string(),
                button_text: Some("Apply via Google Form".to_string()),
            },
            ListingRecord {
                id: ListingId(3),
                title: "Dermatologist".to_string(),
                specialty: "Dermatology".to_string(),
                clinic_name: "Skin Health Center".to_string(),
                dates: "Tuesday, July 16th".to_string(),
                time: "10:00 AM - 4:00 PM".to_string(),
                location: "Westside, City".to_string(),
                rate: "$150/hour".to_string(),
                description: "Board-certified Dermatologist for a specialized clinic. Must have experience with minor procedures.".to_string(),
                application_link: "https://www.skinhealthcenter.com/careers/dermatologist-opening".to_string(),
                button_text: Some("Apply on Clinic Site".to_string()),
            },
            ListingRecord {
                id: ListingId(4),
                title: "General Practitioner".to_string(),
                specialty: "Family Medicine".to_string(),
                clinic_name: "Community Health Clinic".to_string(),
                dates: "Wednesday, July 17th".to_string(),
                time: "9:00 AM - 5:00 PM".to_string(),
                location: "Eastside, City".to_string(),
                rate: "$90/hour".to_string(),
                description: "GP needed for general consultations. Experience in primary care essential.".to_string(),
                application_link: "https://wa.me/anothernumber?text=I%27m%20interested%20in%20the%20GP%20shift%20at%20Community%20Health%20Clinic".to_string(),
                button_text: None,
            },
        ];

        Self { records }
    }
}
