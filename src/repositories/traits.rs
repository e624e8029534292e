use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The whole book is loaded once at start-up and saved once on exit;
/// there is no partial or incremental persistence.
pub trait AddressBookRepository {
    /// Load the stored book, or an empty book if nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
