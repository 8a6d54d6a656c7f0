use serde::{Deserialize, Serialize};

/// The fixed set of advertising-space formats a listing can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingKind {
    Unipole,
    Gantry,
    #[serde(rename = "Digital Billboard")]
    DigitalBillboard,
    Hoarding,
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingKind::Unipole => write!(f, "Unipole"),
            ListingKind::Gantry => write!(f, "Gantry"),
            ListingKind::DigitalBillboard => write!(f, "Digital Billboard"),
            ListingKind::Hoarding => write!(f, "Hoarding"),
        }
    }
}

impl ListingKind {
    pub const ALL: [ListingKind; 4] = [
        ListingKind::Unipole,
        ListingKind::Gantry,
        ListingKind::DigitalBillboard,
        ListingKind::Hoarding,
    ];

    /// Parse the display string back into a kind (form select values).
    pub fn parse(s: &str) -> Option<ListingKind> {
        Self::ALL.iter().copied().find(|k| k.to_string() == s)
    }
}

/// One billboard/advertising-space record.
///
/// The serialized shape matches the persisted `properties` slot:
/// `{"id":1,"title":"...","type":"Unipole","rating":9.5,
///   "coords":[80.209,12.917],"image":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub rating: f64,
    /// Longitude, latitude.
    pub coords: [f64; 2],
    pub image: String,
}

/// Bundled sample listings, used when no persisted sequence exists.
///
/// Ids are sequential from 1, so load-order rank and id coincide for this
/// data set (the visibility policy keys off rank, not id).
pub fn sample_listings() -> Vec<Listing> {
    let raw: [(&str, ListingKind, f64, f64, f64); 8] = [
        ("Focus Media, Medavakkam Flyover", ListingKind::Unipole, 9.5, 80.209, 12.917),
        ("Skyline Gantry, OMR Toll Plaza", ListingKind::Gantry, 9.1, 80.229, 12.902),
        ("Velachery Junction LED Wall", ListingKind::DigitalBillboard, 8.8, 80.218, 12.979),
        ("Tambaram GST Road Hoarding", ListingKind::Hoarding, 8.2, 80.127, 12.925),
        ("Guindy Kathipara Unipole", ListingKind::Unipole, 7.9, 80.201, 13.007),
        ("Sholinganallur Signal Gantry", ListingKind::Gantry, 7.4, 80.227, 12.899),
        ("Adyar Depot Digital Screen", ListingKind::DigitalBillboard, 6.8, 80.257, 13.003),
        ("Pallavaram Market Hoarding", ListingKind::Hoarding, 6.1, 80.150, 12.968),
    ];

    raw.iter()
        .enumerate()
        .map(|(i, &(title, kind, rating, lng, lat))| Listing {
            id: i as u32 + 1,
            title: title.to_string(),
            kind,
            rating,
            coords: [lng, lat],
            image: "banner-mock.jpg".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_wire_format() {
        let listing = Listing {
            id: 1,
            title: "Focus Media".to_string(),
            kind: ListingKind::Unipole,
            rating: 9.5,
            coords: [80.209, 12.917],
            image: "banner-mock.jpg".to_string(),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["type"], "Unipole");
        assert_eq!(json["coords"][0], 80.209);
        assert_eq!(json["coords"][1], 12.917);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_listing_deserializes_persisted_shape() {
        let json = r#"{"id":3,"title":"LED Wall","type":"Digital Billboard","rating":8.8,"coords":[80.218,12.979],"image":"banner-mock.jpg"}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, 3);
        assert_eq!(listing.kind, ListingKind::DigitalBillboard);
        assert!((listing.rating - 8.8).abs() < 1e-9);
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in ListingKind::ALL {
            assert_eq!(ListingKind::parse(&kind.to_string()), Some(kind));
        }
    }

    #[test]
    fn test_kind_parse_unknown() {
        assert_eq!(ListingKind::parse("Skywriting"), None);
        assert_eq!(ListingKind::parse(""), None);
    }

    #[test]
    fn test_sample_listings_sequential_ids() {
        let listings = sample_listings();
        assert_eq!(listings.len(), 8);
        for (i, listing) in listings.iter().enumerate() {
            assert_eq!(listing.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_sample_listings_within_basemap() {
        for listing in sample_listings() {
            let [lng, lat] = listing.coords;
            assert!(lng > crate::geo::MAP_WEST && lng < crate::geo::MAP_EAST);
            assert!(lat > crate::geo::MAP_SOUTH && lat < crate::geo::MAP_NORTH);
        }
    }
}
