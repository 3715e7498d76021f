/// Trait for entities that can be uniquely identified by a database surrogate key
///
/// Keys are `BIGSERIAL` values, so a larger id means a more recently inserted row.
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> i64;
}
