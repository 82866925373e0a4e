use thiserror::Error;

use super::models::{Asset, Employee, Location, TimeEntry, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    #[error("{collection} record {id} not found")]
    NotFound { collection: &'static str, id: String },
    #[error("{collection} record {id} already exists")]
    AlreadyExists { collection: &'static str, id: String },
    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),
}

/// A record stored in a [`Repository`].
pub trait Record: Clone {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn assign_id(&mut self, id: String);

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Data access for one collection.
///
/// `list` and `get` hand out owned copies; nothing outside the repository
/// can reach its backing storage.
pub trait Repository<T: Record> {
    fn get(&self, id: &str) -> Result<T, RepositoryError>;

    fn list(&self) -> Vec<T>;

    /// Stores a new record. An empty id is replaced with the next free
    /// numeric id.
    fn create(&mut self, record: T) -> Result<T, RepositoryError>;

    fn update(&mut self, record: T) -> Result<T, RepositoryError>;

    fn delete(&mut self, id: &str) -> Result<T, RepositoryError>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `records` as-is; numeric ids continue after the highest one.
    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self { records, next_id }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        }
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn get(&self, id: &str) -> Result<T, RepositoryError> {
        self.position(id)
            .map(|i| self.records[i].clone())
            .ok_or_else(|| Self::not_found(id))
    }

    fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    fn create(&mut self, mut record: T) -> Result<T, RepositoryError> {
        record.validate()?;
        if record.id().is_empty() {
            // Skip ids that were taken explicitly
            while self.position(&self.next_id.to_string()).is_some() {
                self.next_id += 1;
            }
            record.assign_id(self.next_id.to_string());
            self.next_id += 1;
        } else if self.position(record.id()).is_some() {
            return Err(RepositoryError::AlreadyExists {
                collection: T::COLLECTION,
                id: record.id().to_string(),
            });
        }
        log::debug!("create {} {}", T::COLLECTION, record.id());
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, record: T) -> Result<T, RepositoryError> {
        record.validate()?;
        let index = self
            .position(record.id())
            .ok_or_else(|| Self::not_found(record.id()))?;
        log::debug!("update {} {}", T::COLLECTION, record.id());
        self.records[index] = record.clone();
        Ok(record)
    }

    fn delete(&mut self, id: &str) -> Result<T, RepositoryError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        log::debug!("delete {} {}", T::COLLECTION, id);
        Ok(self.records.remove(index))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

impl Record for Asset {
    const COLLECTION: &'static str = "assets";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Location {
    const COLLECTION: &'static str = "locations";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Employee {
    const COLLECTION: &'static str = "employees";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for TimeEntry {
    const COLLECTION: &'static str = "time_entries";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        TimeEntry::validate(self)
    }
}
