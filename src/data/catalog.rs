use super::models::{Asset, Employee, Location, TimeEntry};
use super::repository::InMemoryRepository;
use super::seed;

/// Owns every collection the console works with.
///
/// Callers go through the repositories; no one else keeps the records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    assets: InMemoryRepository<Asset>,
    locations: InMemoryRepository<Location>,
    employees: InMemoryRepository<Employee>,
    time_entries: InMemoryRepository<TimeEntry>,
}

impl Catalog {
    pub fn seeded() -> Self {
        Self {
            assets: InMemoryRepository::with_records(seed::assets()),
            locations: InMemoryRepository::with_records(seed::locations()),
            employees: InMemoryRepository::with_records(seed::employees()),
            time_entries: InMemoryRepository::with_records(seed::time_entries()),
        }
    }

    pub fn assets(&self) -> &InMemoryRepository<Asset> {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut InMemoryRepository<Asset> {
        &mut self.assets
    }

    pub fn locations(&self) -> &InMemoryRepository<Location> {
        &self.locations
    }

    pub fn locations_mut(&mut self) -> &mut InMemoryRepository<Location> {
        &mut self.locations
    }

    pub fn employees(&self) -> &InMemoryRepository<Employee> {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut InMemoryRepository<Employee> {
        &mut self.employees
    }

    pub fn time_entries(&self) -> &InMemoryRepository<TimeEntry> {
        &self.time_entries
    }

    pub fn time_entries_mut(&mut self) -> &mut InMemoryRepository<TimeEntry> {
        &mut self.time_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::repository::Repository;

    #[test]
    fn test_seeded_catalog_counts() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.assets().len(), 8);
        assert_eq!(catalog.locations().len(), 7);
        assert_eq!(catalog.employees().len(), 6);
        assert_eq!(catalog.time_entries().len(), 5);
    }

    #[test]
    fn test_seeded_records_pass_validation() {
        let catalog = Catalog::seeded();

        for entry in catalog.time_entries().list() {
            assert!(entry.validate().is_ok(), "seed entry {} invalid", entry.id);
        }
    }

    #[test]
    fn test_default_catalog_is_empty() {
        let mut catalog = Catalog::default();
        assert!(catalog.assets().is_empty());

        let created = catalog
            .assets_mut()
            .create(seed::assets().remove(0))
            .unwrap();
        assert_eq!(created.id, "1");
        assert_eq!(catalog.assets().len(), 1);
    }
}
