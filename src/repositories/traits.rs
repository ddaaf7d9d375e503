use crate::error::PersistenceResult;
use crate::models::Record;

/// Storage for the address book's record collection.
///
/// Implementations save and load the whole collection at once; the order of
/// records must survive a round trip.
pub trait BookRepository {
    /// Persist every record, replacing whatever was stored before.
    fn save(&self, records: &[Record]) -> PersistenceResult<()>;

    /// Load the stored records.
    ///
    /// Returns an empty collection when nothing has been saved yet.
    fn load(&self) -> PersistenceResult<Vec<Record>>;
}
