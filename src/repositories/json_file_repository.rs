use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Address book repository backed by a single JSON file.
///
/// Each save serializes the full book and overwrites the file in one write.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.is_file() {
            info!(
                path = %self.path.display(),
                "No database file, starting with an empty address book"
            );
            return Ok(AddressBook::new());
        }

        let bytes = fs::read(&self.path)?;
        let book: AddressBook = serde_json::from_slice(&bytes)?;

        info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(book)?;
        fs::write(&self.path, bytes)?;

        info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
