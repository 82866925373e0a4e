// Sample records loaded by `Catalog::seeded`.

use super::models::{Asset, AssetStatus, Employee, EntryType, Location, TimeEntry, TimeEntryStatus};

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &str,
    name: &str,
    category: &str,
    location: &str,
    status: AssetStatus,
    assigned_to: Option<&str>,
    purchase_date: &str,
    value: u64,
    serial_number: &str,
    description: &str,
) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        status,
        assigned_to: assigned_to.map(str::to_string),
        purchase_date: purchase_date.to_string(),
        value,
        serial_number: serial_number.to_string(),
        description: description.to_string(),
    }
}

#[rustfmt::skip]
pub fn assets() -> Vec<Asset> {
    use AssetStatus::*;
    vec![
        asset("1", "MacBook Pro 16\"", "Laptops", "Seattle Office - Floor 3", InUse, Some("John Smith"),
            "2023-01-15", 2499, "MBP2023001", "MacBook Pro 16-inch with M2 Pro chip, 32GB RAM, 1TB SSD"),
        asset("2", "Dell OptiPlex 7090", "Desktops", "New York Office - Floor 2", Available, None,
            "2022-08-10", 1299, "DELL2022045", "Dell OptiPlex 7090 Desktop with Intel i7, 16GB RAM, 512GB SSD"),
        asset("3", "iPhone 14 Pro", "Mobile Devices", "Boston Office - Floor 1", InUse, Some("Sarah Johnson"),
            "2023-03-20", 999, "IPH2023078", "iPhone 14 Pro 256GB Space Black"),
        asset("4", "Canon Printer MX922", "Printers", "Seattle Office - Floor 2", Maintenance, None,
            "2021-11-05", 299, "CAN2021156", "Canon PIXMA MX922 All-in-One Printer"),
        asset("5", "Surface Studio 2+", "Desktops", "Design Lab - Floor 4", InUse, Some("Michael Chen"),
            "2023-02-14", 4299, "SUR2023012", "Microsoft Surface Studio 2+ with 32GB RAM, 1TB SSD"),
        asset("6", "Lenovo ThinkPad X1", "Laptops", "Chicago Office - Floor 1", Available, None,
            "2022-12-01", 1899, "LEN2022089", "Lenovo ThinkPad X1 Carbon with Intel i7, 16GB RAM"),
        asset("7", "iPad Pro 12.9\"", "Tablets", "Marketing Dept - Floor 3", InUse, Some("Emily Davis"),
            "2023-04-10", 1099, "IPD2023025", "iPad Pro 12.9-inch with M2 chip, 512GB, Space Gray"),
        asset("8", "HP LaserJet Pro", "Printers", "Austin Office - Floor 2", Retired, None,
            "2020-01-15", 199, "HP2020003", "HP LaserJet Pro M404n Monochrome Printer"),
    ]
}

fn location(id: &str, name: &str, building: &str, floor: &str, room: Option<&str>) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        building: building.to_string(),
        floor: floor.to_string(),
        room: room.map(str::to_string),
    }
}

pub fn locations() -> Vec<Location> {
    vec![
        location("1", "Seattle Office - Floor 3", "Seattle HQ", "3", None),
        location("2", "New York Office - Floor 2", "NY Branch", "2", None),
        location("3", "Boston Office - Floor 1", "Boston Office", "1", None),
        location("4", "Design Lab - Floor 4", "Seattle HQ", "4", Some("401")),
        location("5", "Chicago Office - Floor 1", "Chicago Branch", "1", None),
        location("6", "Marketing Dept - Floor 3", "Seattle HQ", "3", Some("305")),
        location("7", "Austin Office - Floor 2", "Austin Branch", "2", None),
    ]
}

fn employee(id: &str, name: &str, department: &str, email: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        email: email.to_string(),
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee("1", "John Smith", "Engineering", "john.smith@company.com"),
        employee("2", "Sarah Johnson", "Sales", "sarah.johnson@company.com"),
        employee("3", "Michael Chen", "Design", "michael.chen@company.com"),
        employee("4", "Emily Davis", "Marketing", "emily.davis@company.com"),
        employee("5", "David Wilson", "HR", "david.wilson@company.com"),
        employee("6", "Lisa Brown", "Finance", "lisa.brown@company.com"),
    ]
}

fn time_entry(
    id: &str,
    date: &str,
    project: (&str, &str),
    hours: f32,
    status: TimeEntryStatus,
    created_by: &str,
    entry_type: EntryType,
) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        date: date.to_string(),
        project_id: project.0.to_string(),
        project_name: project.1.to_string(),
        hours,
        notes: None,
        status,
        created_by: created_by.to_string(),
        created_on: date.to_string(),
        is_billable: entry_type == EntryType::Work,
        entry_type,
    }
}

pub fn time_entries() -> Vec<TimeEntry> {
    use EntryType::*;
    use TimeEntryStatus::*;
    let portal = ("p-1", "Customer Portal");
    let migration = ("p-2", "Data Migration");
    vec![
        time_entry("1", "2024-06-03", portal, 8.0, Approved, "John Smith", Work),
        time_entry("2", "2024-06-04", migration, 6.5, Submitted, "John Smith", Work),
        time_entry("3", "2024-06-04", portal, 4.0, Draft, "Sarah Johnson", Work),
        time_entry("4", "2024-06-05", ("p-0", "Leave"), 8.0, Submitted, "Emily Davis", Leave),
        time_entry("5", "2024-06-06", migration, 7.5, Rejected, "Michael Chen", Work),
    ]
}
