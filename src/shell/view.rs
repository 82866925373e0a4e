use serde::Serialize;

/// Top-level screens a path can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Assets,
    Locations,
    Employees,
    TimeEntries,
    Reports,
    Settings,
    NotFound,
}

/// Views that show a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListView {
    Assets,
    Locations,
    Employees,
    TimeEntries,
}

impl View {
    /// Matches on the path component only; the query string is ignored and
    /// a trailing slash is tolerated.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => View::Dashboard,
            "/assets" => View::Assets,
            "/locations" => View::Locations,
            "/employees" => View::Employees,
            "/time-entries" => View::TimeEntries,
            "/reports" => View::Reports,
            "/settings" => View::Settings,
            _ => View::NotFound,
        }
    }

    pub fn list(self) -> Option<ListView> {
        match self {
            View::Assets => Some(ListView::Assets),
            View::Locations => Some(ListView::Locations),
            View::Employees => Some(ListView::Employees),
            View::TimeEntries => Some(ListView::TimeEntries),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(View::from_path("/"), View::Dashboard);
        assert_eq!(View::from_path(""), View::Dashboard);
        assert_eq!(View::from_path("/assets"), View::Assets);
        assert_eq!(View::from_path("/assets/"), View::Assets);
        assert_eq!(View::from_path("/assets?q=mac&sort=value"), View::Assets);
        assert_eq!(View::from_path("/time-entries"), View::TimeEntries);
        assert_eq!(View::from_path("/assets/7"), View::NotFound);
        assert_eq!(View::from_path("/payroll"), View::NotFound);
    }

    #[test]
    fn test_list_views() {
        assert_eq!(View::Locations.list(), Some(ListView::Locations));
        assert_eq!(View::Reports.list(), None);
        assert_eq!(View::Dashboard.list(), None);
    }
}
