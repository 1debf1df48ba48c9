//! Artwork - Record Type Returned by the Data Source

use serde::{Deserialize, Serialize};

/// Stable identifier of an artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A single artwork record
///
/// Text fields are `null` for many records upstream, so they are optional here
/// and rendered as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique ID
    pub id: ArtworkId,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Place of origin
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist attribution text (may span several lines)
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Free-text inscriptions
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Start year (negative for BCE)
    #[serde(default)]
    pub date_start: Option<i64>,
    /// End year (negative for BCE)
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Create a record with only an id and title set
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ArtworkId(id),
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn place_of_origin(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or("")
    }

    pub fn artist_display(&self) -> &str {
        self.artist_display.as_deref().unwrap_or("")
    }

    pub fn inscriptions(&self) -> &str {
        self.inscriptions.as_deref().unwrap_or("")
    }

    /// Title used in lists, falling back to the id for untitled works
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => format!("Untitled #{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nulls() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte — 1884",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886
        }"#;
        let artwork: Artwork = serde_json::from_str(json).expect("valid artwork");
        assert_eq!(artwork.id, ArtworkId(27992));
        assert_eq!(artwork.inscriptions(), "");
        assert_eq!(artwork.date_end, Some(1886));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 5}"#).expect("valid artwork");
        assert_eq!(artwork.title, None);
        assert_eq!(artwork.display_title(), "Untitled #5");
    }

    #[test]
    fn test_id_is_required() {
        assert!(serde_json::from_str::<Artwork>(r#"{"title": "x"}"#).is_err());
    }
}
