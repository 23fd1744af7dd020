use super::RecordId;
use chrono::NaiveDate;

/// Trait for every record type kept in an [`super::EntityStore`].
///
/// Defines identity, the free-text search surface, the seed collection and
/// the hooks the store calls on create and delete.
pub trait Entity: Clone {
    /// Prefix of generated ids (`""` means a bare UUID).
    const ID_PREFIX: &'static str;

    fn id(&self) -> &RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Values the free-text search looks into.
    fn search_fields(&self) -> Vec<&str>;

    /// Fixed initial collection standing in for a data source.
    fn seed() -> Vec<Self>;

    /// Singular name used in logs and errors (e.g. "product").
    fn element_name() -> &'static str;

    /// Hook run when the record is appended as a new one.
    fn on_create(&mut self, _today: NaiveDate) {}

    /// Reason the record may not be removed, if any.
    fn delete_blocker(&self) -> Option<String> {
        None
    }
}
