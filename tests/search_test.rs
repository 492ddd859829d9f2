//! End-to-end search flow: load listings from disk, filter, and fall
//! back to similar-area suggestions on a zero-match location query.

use estatesearch::listing::{load_homes, HomeQuery};
use estatesearch::search::{filter_homes, similar_areas, MAX_SUGGESTIONS, MIN_SIMILARITY};
use std::io::Write;

const SAMPLE_LISTINGS: &str = r#"[
    {
        "id": 1,
        "title": "Charming 3-bedroom terrace",
        "location": "Brighton, BN1",
        "price": "£425,000",
        "beds": 3,
        "baths": 2,
        "amenities": ["Dishwasher", "Washer"],
        "description": "Lovely terrace house close to shops and transport."
    },
    {
        "id": 2,
        "title": "Modern apartment with balcony",
        "location": "London, SW1",
        "price": "£1,100,000",
        "beds": 2,
        "baths": 1,
        "amenities": ["Dryer", "Parking"],
        "description": "Bright apartment with great views."
    },
    {
        "id": 3,
        "title": "Family home with garden",
        "location": "Manchester, M1",
        "price": "£625,000",
        "beds": 4,
        "baths": 3,
        "amenities": ["Dishwasher", "Dryer", "Washer"]
    }
]"#;

fn write_sample_listings() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SAMPLE_LISTINGS.as_bytes())
        .expect("Failed to write sample listings");
    file
}

#[test]
fn test_load_and_filter_direct_match() {
    let file = write_sample_listings();
    let homes = load_homes(file.path()).expect("Failed to load listings");
    assert_eq!(homes.len(), 3);

    let query = HomeQuery {
        location: Some("Brighton".to_string()),
        beds: Some(3),
        ..Default::default()
    };
    let results = filter_homes(&homes, &query);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);
}

#[test]
fn test_zero_match_falls_back_to_similar_areas() {
    let file = write_sample_listings();
    let homes = load_homes(file.path()).expect("Failed to load listings");

    // "Hove BN3" matches no listing directly...
    let query = HomeQuery {
        location: Some("Hove BN3".to_string()),
        ..Default::default()
    };
    assert!(filter_homes(&homes, &query).is_empty());

    // ...but shares the "bn" postcode area with the Brighton listing
    let suggestions = similar_areas("Hove BN3", &homes, MIN_SIMILARITY, MAX_SUGGESTIONS);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].home.id, 1);
    assert_eq!(suggestions[0].score, 0.95);
}

#[test]
fn test_unrelated_location_yields_no_suggestions() {
    let file = write_sample_listings();
    let homes = load_homes(file.path()).expect("Failed to load listings");

    let suggestions = similar_areas("Cardiff", &homes, MIN_SIMILARITY, MAX_SUGGESTIONS);
    assert!(suggestions.is_empty());
}

#[test]
fn test_invalid_json_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"{ not a listings array")
        .expect("Failed to write");

    let result = load_homes(file.path());
    assert!(result.is_err());
}
