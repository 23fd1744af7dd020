//! Free-text and categorical filtering of entity lists.

use super::Entity;

/// Select value that stands for "no restriction".
pub const CHOICE_ALL: &str = "all";

/// Case-insensitive substring search over a set of fields.
///
/// The query is matched as typed, surrounding spaces included. Only an empty
/// query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Categorical filter over a finite domain: either everything or exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
        }
    }

    /// Parse a select value: `"all"` or anything unknown maps to [`Choice::All`].
    pub fn parse(raw: &str, from_code: impl Fn(&str) -> Option<T>) -> Self {
        if raw == CHOICE_ALL {
            return Choice::All;
        }
        from_code(raw).map(Choice::Only).unwrap_or(Choice::All)
    }
}

/// Predicate deciding which records of a store are shown.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Filter with a free-text query only (Products, Categories).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    pub query: String,
}

impl TextFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl<T: Entity> RecordFilter<T> for TextFilter {
    fn matches(&self, record: &T) -> bool {
        matches_query(&record.search_fields(), &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_query_case_insensitive() {
        assert!(matches_query(&["Canapé en tissu", "Meubles"], "CANAPÉ"));
        assert!(matches_query(&["Canapé en tissu", "Meubles"], "meub"));
        assert!(!matches_query(&["Canapé en tissu", "Meubles"], "lampe"));
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(matches_query(&["anything"], ""));
        assert!(matches_query(&[], ""));
    }

    #[test]
    fn test_spaces_are_part_of_the_query() {
        assert!(!matches_query(&["Lampe de chevet"], "   "));
        assert!(!matches_query(&["Lampe de chevet"], "chevet "));
        assert!(matches_query(&["Lampe de chevet"], " de "));
    }

    #[test]
    fn test_choice_parse_and_admit() {
        let parse = |s: &str| match s {
            "a" => Some(1),
            "b" => Some(2),
            _ => None,
        };
        assert_eq!(Choice::parse("all", parse), Choice::All);
        assert_eq!(Choice::parse("b", parse), Choice::Only(2));
        assert_eq!(Choice::parse("zzz", parse), Choice::All);

        assert!(Choice::All.admits(&7));
        assert!(Choice::Only(2).admits(&2));
        assert!(!Choice::Only(2).admits(&1));
    }
}
