//! In-memory copy of one stored collection

use uuid::Uuid;

use super::{Record, Storage};
use crate::error::{Error, Result};

/// Records of one type plus the storage they are persisted to.
///
/// Mutations happen in memory; [`Collection::persist`] writes the whole set.
/// The `*_persisted` helpers undo the in-memory change when the write fails,
/// keeping memory and disk in agreement.
#[derive(Debug)]
pub struct Collection<T> {
    storage: Storage,
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Load the collection from storage (empty if missing or unreadable)
    pub fn open(storage: Storage) -> Self {
        let records = storage.load(T::COLLECTION);
        Self { storage, records }
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Like [`Collection::get`] but unknown ids are an error
    pub fn require(&self, id: Uuid) -> Result<&T> {
        self.get(id).ok_or_else(|| Error::not_found(T::KIND, id))
    }

    pub(crate) fn require_mut(&mut self, id: Uuid) -> Result<&mut T> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the full collection to storage
    pub fn persist(&self) -> Result<()> {
        self.storage.save(T::COLLECTION, &self.records)
    }

    pub(crate) fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Keep records for which `f` returns true; `f` may fix records in place
    pub(crate) fn retain_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        self.records.retain_mut(f);
    }

    pub(crate) fn remove(&mut self, id: Uuid) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Append a record and persist; the record is dropped again if the write fails
    pub(crate) fn insert_persisted(&mut self, record: T) -> Result<()> {
        let id = record.id();
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.remove(id);
            return Err(e);
        }
        Ok(())
    }

    /// Remove a record and persist; the record is restored if the write fails
    pub(crate) fn remove_persisted(&mut self, id: Uuid) -> Result<T> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        let record = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, record);
            return Err(e);
        }
        Ok(record)
    }

    /// Change one record with `f` and persist.
    ///
    /// If `f` fails nothing is written. If the write fails the record is put
    /// back the way it was.
    pub(crate) fn modify_persisted<R, F>(&mut self, id: Uuid, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> Result<R>,
    {
        let record = self.require_mut(id)?;
        let before = record.clone();
        let out = f(record)?;

        if let Err(e) = self.persist() {
            *self.require_mut(id)? = before;
            return Err(e);
        }
        Ok(out)
    }
}
