//! Records served by paged data sources.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Deserialize;

/// An item identified by a stable unique ID.
///
/// The selection model only ever looks at [`Record::id`]; every other field
/// belongs to the view.
pub trait Record {
    /// The identifier type. Must be unique across the whole dataset.
    type Id: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// The record's identifier.
    fn id(&self) -> Self::Id;
}

/// An artwork as served by the art-institute `artworks` endpoint.
///
/// Only the columns shown in the table are decoded; other fields in the
/// payload are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    /// Unique artwork identifier.
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest year associated with the work; negative for BCE.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Latest year associated with the work; negative for BCE.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Create an artwork with only an ID and title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

impl Record for Artwork {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_decodes_nulls_and_extra_fields() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886,
            "thumbnail": {"alt_text": "ignored"}
        }"#;

        let artwork: Artwork = serde_json::from_str(json).expect("valid artwork");
        assert_eq!(artwork.id(), 27992);
        assert_eq!(artwork.inscriptions, None);
        assert_eq!(artwork.date_end, Some(1886));
    }

    #[test]
    fn test_artwork_missing_optional_fields() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 7}"#).expect("valid artwork");
        assert_eq!(artwork, Artwork { id: 7, ..Default::default() });
    }
}
