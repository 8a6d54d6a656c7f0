use bookadzone_shared::models::{sample_listings, Listing, ListingKind};

/// Local-storage slot holding the whole listing sequence as JSON. Read once
/// at load, overwritten wholesale on every append. No versioning.
pub const STORAGE_KEY: &str = "properties";

/// Image reference assigned to listings created through the form.
pub const MOCK_IMAGE: &str = "banner-mock.jpg";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn parse_listings(json: &str) -> Result<Vec<Listing>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

pub fn serialize_listings(listings: &[Listing]) -> Result<String, String> {
    serde_json::to_string(listings).map_err(|e| e.to_string())
}

/// Construct the record the add-listing form appends. The id is the current
/// sequence length + 1 — stable within a session, not coordinated across
/// editors. A rating that fails to parse is coerced to 0.0; submission never
/// rejects.
pub fn build_listing(
    listings: &[Listing],
    title: &str,
    kind: ListingKind,
    rating_text: &str,
    coords: [f64; 2],
) -> Listing {
    Listing {
        id: listings.len() as u32 + 1,
        title: title.to_string(),
        kind,
        rating: rating_text.parse().unwrap_or(0.0),
        coords,
        image: MOCK_IMAGE.to_string(),
    }
}

/// Build and append, without persisting. Split from [`append_listing`] so
/// the sequence semantics are testable off-browser.
pub fn push_listing(
    listings: &mut Vec<Listing>,
    title: &str,
    kind: ListingKind,
    rating_text: &str,
    coords: [f64; 2],
) -> Listing {
    let listing = build_listing(listings, title, kind, rating_text, coords);
    listings.push(listing.clone());
    listing
}

/// Read the persisted sequence. An absent slot falls back to the bundled
/// samples; a corrupt slot is an error for the caller to surface.
pub fn load_listings() -> Result<Vec<Listing>, String> {
    let Some(storage) = local_storage() else {
        return Ok(sample_listings());
    };
    match storage.get_item(STORAGE_KEY).ok().flatten() {
        Some(json) => parse_listings(&json),
        None => Ok(sample_listings()),
    }
}

pub fn save_listings(listings: &[Listing]) -> Result<(), String> {
    let Some(storage) = local_storage() else {
        return Err("local storage unavailable".to_string());
    };
    let json = serialize_listings(listings)?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| "local storage write failed".to_string())
}

/// Append a new listing and persist the updated sequence.
pub fn append_listing(
    listings: &mut Vec<Listing>,
    title: &str,
    kind: ListingKind,
    rating_text: &str,
    coords: [f64; 2],
) -> Result<Listing, String> {
    let listing = push_listing(listings, title, kind, rating_text, coords);
    save_listings(listings)?;
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serialize_roundtrip() {
        let listings = sample_listings();
        let json = serialize_listings(&listings).unwrap();
        let parsed = parse_listings(&json).unwrap();
        assert_eq!(parsed, listings);
    }

    #[test]
    fn test_parse_rejects_corrupt_payload() {
        assert!(parse_listings("{not json").is_err());
        assert!(parse_listings(r#"[{"id":"one"}]"#).is_err());
    }

    #[test]
    fn test_push_listing_appends_exactly_one() {
        let mut listings = sample_listings();
        let before = listings.len();
        let new = push_listing(
            &mut listings,
            "Test Site",
            ListingKind::Gantry,
            "7.5",
            [80.21, 12.92],
        );
        assert_eq!(listings.len(), before + 1);
        assert_eq!(new.id, before as u32 + 1);
        assert_eq!(new.title, "Test Site");
        assert_eq!(new.kind, ListingKind::Gantry);
        assert!((new.rating - 7.5).abs() < 1e-9);
        assert_eq!(new.coords, [80.21, 12.92]);
        assert_eq!(listings.last(), Some(&new));
    }

    #[test]
    fn test_build_listing_coords_are_last_click() {
        let listings = sample_listings();
        let click = [80.198765, 12.912345];
        let new = build_listing(&listings, "Clicked", ListingKind::Unipole, "5", click);
        assert_eq!(new.coords, click);
    }

    #[test]
    fn test_build_listing_coerces_bad_rating() {
        let new = build_listing(&[], "Bad Rating", ListingKind::Hoarding, "n/a", [80.2, 12.9]);
        assert!((new.rating - 0.0).abs() < 1e-9);
        // Coerced ratings still serialize
        assert!(serialize_listings(&[new]).is_ok());
    }

    #[test]
    fn test_appended_listing_survives_wire_format() {
        let mut listings = Vec::new();
        push_listing(&mut listings, "Only", ListingKind::DigitalBillboard, "8.1", [80.3, 13.0]);
        let json = serialize_listings(&listings).unwrap();
        let parsed = parse_listings(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 1);
        assert_eq!(parsed[0].kind, ListingKind::DigitalBillboard);
    }
}
