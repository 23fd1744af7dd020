use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a record inside an entity store.
///
/// Seed records carry hand-written ids (`"1"`, `"ORD-003"`); records created
/// at runtime get one from [`RecordId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh id from a v4 UUID.
    ///
    /// Without a prefix the full hyphenated UUID is used. With a prefix the
    /// id is `{prefix}{first 8 hex digits}` (e.g. `ORD-3F2A9C01`), matching
    /// the look of the seeded ids; the store re-rolls on the rare clash.
    pub fn generate(prefix: &str) -> Self {
        let uuid = Uuid::new_v4();
        if prefix.is_empty() {
            return Self(uuid.to_string());
        }
        let short: String = uuid
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase();
        Self(format!("{prefix}{short}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_with_prefix() {
        let id = RecordId::generate("PROMO-");
        assert!(id.as_str().starts_with("PROMO-"));
        assert_eq!(id.as_str().len(), "PROMO-".len() + 8);
    }

    #[test]
    fn test_generate_without_prefix_is_uuid() {
        let id = RecordId::generate("");
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(RecordId::generate(""), RecordId::generate(""));
    }
}
