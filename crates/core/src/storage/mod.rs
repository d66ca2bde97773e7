//! JSON file storage layer for Lodging
//!
//! Every entity collection lives in its own `<name>.json` file under one data
//! directory. Reads are forgiving: a missing or damaged file loads as an empty
//! collection. Writes go to a temporary sibling first and are renamed into
//! place, so a reader never sees a half-written file.

mod collection;
mod traits;

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::error::{Error, Result};

pub use collection::Collection;
pub use traits::Record;

pub const HOTELS: &str = "hotels";
pub const CUSTOMERS: &str = "customers";
pub const RESERVATIONS: &str = "reservations";

/// Every collection the booking desk keeps on disk
pub const ALL_COLLECTIONS: [&str; 3] = [HOTELS, CUSTOMERS, RESERVATIONS];

/// Handle to a data directory holding named collections
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open (and create if needed) the data directory
    #[instrument(skip(root), fields(root = %root.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| Error::persistence(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing a collection
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }

    /// Write an empty collection file for every name that has none yet
    pub fn ensure_collections(&self, collections: &[&str]) -> Result<()> {
        for collection in collections {
            if !self.collection_path(collection).exists() {
                tracing::debug!(collection, "Creating empty collection file");
                self.save::<serde_json::Value>(collection, &[])?;
            }
        }
        Ok(())
    }

    /// Load a collection, substituting an empty one on any failure
    #[instrument(skip(self))]
    pub fn load<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        match self.try_load(collection) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(collection, error = %e, "Could not load collection, starting empty");
                Vec::new()
            }
        }
    }

    /// Load a collection, reporting unreadable or malformed files.
    ///
    /// A file that does not exist yet is an empty collection, not an error.
    pub fn try_load<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let path = self.collection_path(collection);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::persistence(&path, e)),
        };

        let records: Vec<T> =
            serde_json::from_str(&content).map_err(|e| Error::persistence(&path, e))?;
        tracing::debug!(collection, count = records.len(), "Loaded collection");
        Ok(records)
    }

    /// Replace the stored collection with `records`
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn save<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()> {
        let path = self.collection_path(collection);
        let tmp_path = self.root.join(format!(".{}.json.tmp", collection));

        let result = write_pretty(&tmp_path, records).and_then(|()| {
            fs::rename(&tmp_path, &path).map_err(|e| Error::persistence(&path, e))
        });

        if let Err(e) = &result {
            tracing::warn!(collection, error = %e, "Could not save collection");
            // Previous file is still in place; drop the stray temp file
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }
}

/// Serialize with a four-space indent and flush to disk
fn write_pretty<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|e| Error::persistence(path, e))?;
    buf.push(b'\n');

    let mut file = File::create(path).map_err(|e| Error::persistence(path, e))?;
    file.write_all(&buf)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::persistence(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Hotel, Reservation};
    use tempfile::tempdir;

    #[test]
    fn test_missing_collection_loads_empty() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        let hotels: Vec<Hotel> = storage.load(HOTELS);
        assert!(hotels.is_empty());
        assert!(storage.try_load::<Hotel>(HOTELS).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_collection_loads_empty() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        fs::write(storage.collection_path(CUSTOMERS), "{ not json").unwrap();

        let customers: Vec<Customer> = storage.load(CUSTOMERS);
        assert!(customers.is_empty());
        assert!(matches!(
            storage.try_load::<Customer>(CUSTOMERS),
            Err(Error::Persistence { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        fs::write(storage.collection_path(HOTELS), r#"[{"id": 3}]"#).unwrap();

        let hotels: Vec<Hotel> = storage.load(HOTELS);
        assert!(hotels.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        let mut hotel = Hotel::new("Plaza".into(), "NYC".into(), 2).unwrap();
        hotel.take_room().unwrap();
        let customer = Customer::new("Ana".into(), "a@x.com".into(), "555".into()).unwrap();
        let mut cancelled = Reservation::new(customer.id, hotel.id);
        cancelled.cancel().unwrap();
        let reservations = vec![Reservation::new(customer.id, hotel.id), cancelled];

        storage.save(HOTELS, std::slice::from_ref(&hotel)).unwrap();
        storage.save(CUSTOMERS, std::slice::from_ref(&customer)).unwrap();
        storage.save(RESERVATIONS, &reservations).unwrap();

        assert_eq!(storage.load::<Hotel>(HOTELS), vec![hotel]);
        assert_eq!(storage.load::<Customer>(CUSTOMERS), vec![customer]);
        assert_eq!(storage.load::<Reservation>(RESERVATIONS), reservations);
    }

    #[test]
    fn test_saved_file_uses_recommended_field_names() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let hotel = Hotel::new("Plaza".into(), "NYC".into(), 2).unwrap();
        storage.save(HOTELS, &[hotel]).unwrap();

        let raw = fs::read_to_string(storage.collection_path(HOTELS)).unwrap();
        for field in ["id", "name", "location", "total_rooms", "available_rooms"] {
            assert!(raw.contains(&format!("\"{}\"", field)), "missing {}", field);
        }
        assert!(raw.contains("\n        \"name\""));
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let hotel = Hotel::new("Plaza".into(), "NYC".into(), 2).unwrap();
        storage.save(HOTELS, std::slice::from_ref(&hotel)).unwrap();

        // A directory squatting on the temp path makes the write fail
        fs::create_dir(dir.path().join(".hotels.json.tmp")).unwrap();
        let other = Hotel::new("Ritz".into(), "Paris".into(), 9).unwrap();
        let result = storage.save(HOTELS, &[other]);

        assert!(matches!(result, Err(Error::Persistence { .. })));
        assert_eq!(storage.load::<Hotel>(HOTELS), vec![hotel]);
    }

    #[test]
    fn test_ensure_collections_creates_empty_files_once() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path().join("data")).unwrap();
        storage.ensure_collections(&ALL_COLLECTIONS).unwrap();

        for name in ALL_COLLECTIONS {
            let raw = fs::read_to_string(storage.collection_path(name)).unwrap();
            assert_eq!(raw.trim(), "[]");
        }

        let hotel = Hotel::new("Plaza".into(), "NYC".into(), 2).unwrap();
        storage.save(HOTELS, &[hotel]).unwrap();
        storage.ensure_collections(&ALL_COLLECTIONS).unwrap();
        assert_eq!(storage.load::<Hotel>(HOTELS).len(), 1);
    }
}
