//! Optional foreign-key wrapper
//!
//! Nullable reference columns (`sex_id`, `title_id`, `band_id`,
//! `artist_id`, `album_id`) are carried as a [`Reference`] rather than a
//! bare `Option<i64>`, so an unset relationship can never be confused with
//! a row id of zero.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Present/absent reference to a row in another table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Reference {
    /// No relationship recorded (NULL column)
    #[default]
    Absent,
    /// Relationship to the row with this id
    Present(i64),
}

impl Reference {
    pub fn is_absent(&self) -> bool {
        matches!(self, Reference::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Id of the referenced row, if any
    pub fn id(&self) -> Option<i64> {
        match self {
            Reference::Absent => None,
            Reference::Present(id) => Some(*id),
        }
    }
}

impl From<Option<i64>> for Reference {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(id) => Reference::Present(id),
            None => Reference::Absent,
        }
    }
}

impl From<Reference> for Option<i64> {
    fn from(value: Reference) -> Self {
        value.id()
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<i64>::deserialize(deserializer).map(Reference::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Reference::is_absent")]
        band_id: Reference,
    }

    #[test]
    fn test_zero_id_is_present() {
        let reference = Reference::from(Some(0));
        assert!(reference.is_present());
        assert_eq!(reference.id(), Some(0));
    }

    #[test]
    fn test_absent_field_is_omitted() {
        let json = serde_json::to_value(Holder { band_id: Reference::Absent }).unwrap();
        assert!(json.get("band_id").is_none());

        let json = serde_json::to_value(Holder { band_id: Reference::Present(3) }).unwrap();
        assert_eq!(json["band_id"], 3);
    }

    #[test]
    fn test_missing_and_null_deserialize_to_absent() {
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.band_id, Reference::Absent);

        let null: Holder = serde_json::from_str(r#"{"band_id": null}"#).unwrap();
        assert_eq!(null.band_id, Reference::Absent);

        let present: Holder = serde_json::from_str(r#"{"band_id": 7}"#).unwrap();
        assert_eq!(present.band_id, Reference::Present(7));
    }
}
