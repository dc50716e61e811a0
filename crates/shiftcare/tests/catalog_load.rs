use std::io::{Cursor, Write};

use shiftcare::catalog::{CatalogLoadError, ListingCatalog, ListingId, DEFAULT_BUTTON_LABEL};

fn listing_json(id: u32, link: &str, button_text: Option<&str>) -> String {
    let button = match button_text {
        Some(text) => format!(", \"buttonText\": \"{text}\""),
        None => String::new(),
    };
    format!(
        r#"{{
            "id": {id},
            "title": "Locum Anesthetist",
            "specialty": "Anesthesiology",
            "clinicName": "Lakeside Surgical",
            "dates": "Thursday, July 18th",
            "time": "7:00 AM - 3:00 PM",
            "location": "Lakeside, City",
            "rate": "$140/hour",
            "description": "Day list cover for elective surgery.",
            "applicationLink": "{link}"{button}
        }}"#
    )
}

fn document(listings: &[String]) -> Cursor<Vec<u8>> {
    Cursor::new(format!("[{}]", listings.join(",")).into_bytes())
}

#[test]
fn loads_records_in_declaration_order() {
    let reader = document(&[
        listing_json(9, "https://example.org/9", None),
        listing_json(3, "https://example.org/3", Some("Apply via WhatsApp")),
    ]);

    let catalog = ListingCatalog::from_reader(reader).expect("catalog loads");

    let ids: Vec<ListingId> = catalog.records().iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![ListingId(9), ListingId(3)]);

    let cards = catalog.cards();
    assert_eq!(cards.len(), catalog.len());
    assert_eq!(cards[0].button_label, DEFAULT_BUTTON_LABEL);
    assert_eq!(cards[1].button_label, "Apply via WhatsApp");
}

#[test]
fn empty_document_is_an_empty_catalog() {
    let catalog = ListingCatalog::from_reader(document(&[])).expect("empty loads");
    assert!(catalog.is_empty());
    assert!(catalog.cards().is_empty());
}

#[test]
fn duplicate_ids_fail_the_whole_load() {
    let reader = document(&[
        listing_json(1, "https://example.org/a", None),
        listing_json(2, "https://example.org/b", None),
        listing_json(1, "https://example.org/c", None),
    ]);

    let err = ListingCatalog::from_reader(reader).expect_err("duplicate rejected");
    assert!(matches!(err, CatalogLoadError::DuplicateId { id: ListingId(1) }));
}

#[test]
fn relative_application_link_is_rejected() {
    let reader = document(&[listing_json(5, "/careers/anesthetist", None)]);

    let err = ListingCatalog::from_reader(reader).expect_err("relative link rejected");
    match err {
        CatalogLoadError::InvalidApplicationLink { id, link, .. } => {
            assert_eq!(id, ListingId(5));
            assert_eq!(link, "/careers/anesthetist");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn record_missing_a_field_is_malformed() {
    let reader = Cursor::new(br#"[{"id": 1, "title": "No link"}]"#.to_vec());
    let err = ListingCatalog::from_reader(reader).expect_err("incomplete record rejected");
    assert!(matches!(err, CatalogLoadError::Malformed(_)));
}

#[test]
fn unknown_fields_are_malformed() {
    let mut listing = listing_json(1, "https://example.org/1", None);
    listing.insert_str(1, "\"whatsappLink\": \"https://wa.me/1\",");
    let err = ListingCatalog::from_reader(document(&[listing])).expect_err("unknown field");
    assert!(matches!(err, CatalogLoadError::Malformed(_)));
}

#[test]
fn links_are_kept_verbatim() {
    let link = "https://wa.me/yournumber?text=I%27m%20interested";
    let catalog =
        ListingCatalog::from_reader(document(&[listing_json(1, link, None)])).expect("loads");
    assert_eq!(catalog.cards()[0].href, link);
}

#[test]
fn from_path_reads_a_file() {
    let dir = std::env::temp_dir().join(format!("shiftcare-catalog-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("listings.json");
    let mut file = std::fs::File::create(&path).expect("create file");
    write!(
        file,
        "[{}]",
        listing_json(11, "https://example.org/11", Some("Apply on Clinic Site"))
    )
    .expect("write listings");
    drop(file);

    let catalog = ListingCatalog::load(Some(path.as_path())).expect("file loads");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.cards()[0].button_label, "Apply on Clinic Site");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ListingCatalog::from_path("/nonexistent/shiftcare/listings.json")
        .expect_err("missing file");
    assert!(matches!(err, CatalogLoadError::Io(_)));
}

#[test]
fn no_path_selects_the_built_in_catalog() {
    let catalog = ListingCatalog::load(None).expect("standard catalog");
    assert_eq!(catalog, ListingCatalog::standard());
}

#[test]
fn bundled_example_file_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/listings.example.json");
    let catalog = ListingCatalog::from_path(path).expect("example file is valid");
    let labels: Vec<String> = catalog
        .cards()
        .into_iter()
        .map(|card| card.button_label)
        .collect();
    assert_eq!(labels, vec!["Apply via WhatsApp", "Apply Now"]);
}
