mod catalog;
pub mod envelope;
pub mod models;
pub mod query;
pub mod repository;
mod seed;

pub use catalog::Catalog;
pub use envelope::{ApiError, ApiResult, ErrorCode};
pub use models::{Asset, AssetStatus, Employee, EntryType, Location, TimeEntry, TimeEntryStatus};
pub use repository::{InMemoryRepository, Record, Repository, RepositoryError};
