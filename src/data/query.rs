use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::models::{Asset, AssetStatus};

pub const ASSETS_PATH: &str = "/assets";

/// Search box plus the status and category dropdowns of the asset list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<AssetStatus>,
    #[serde(default)]
    pub category: Option<String>,
}

impl AssetFilter {
    pub fn matches(&self, asset: &Asset) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || [&asset.name, &asset.category, &asset.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        let matches_status = self.status.map_or(true, |s| asset.status == s);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| asset.category == c);

        matches_search && matches_status && matches_category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Category,
    Location,
    Status,
    PurchaseDate,
    Value,
}

impl SortKey {
    const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Category,
        SortKey::Location,
        SortKey::Status,
        SortKey::PurchaseDate,
        SortKey::Value,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Location => "location",
            SortKey::Status => "status",
            SortKey::PurchaseDate => "purchase_date",
            SortKey::Value => "value",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_param() == param)
    }

    fn compare(self, a: &Asset, b: &Asset) -> Ordering {
        match self {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Location => a.location.cmp(&b.location),
            SortKey::Status => a.status.label().cmp(b.status.label()),
            SortKey::PurchaseDate => a.purchase_date.cmp(&b.purchase_date),
            SortKey::Value => a.value.cmp(&b.value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSort {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl AssetSort {
    /// Stable sort, so equal keys keep their repository order.
    pub fn apply(&self, assets: &mut [Asset]) {
        assets.sort_by(|a, b| {
            let ord = self.key.compare(a, b);
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}

/// Everything that decides which assets the list shows, in which order.
///
/// Round-trips through the query string of an `/assets` view path so it
/// can live in the navigation history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetQuery {
    pub filter: AssetFilter,
    pub sort: Option<AssetSort>,
}

impl AssetQuery {
    pub fn run(&self, assets: Vec<Asset>) -> Vec<Asset> {
        let mut rows: Vec<Asset> = assets
            .into_iter()
            .filter(|a| self.filter.matches(a))
            .collect();
        if let Some(sort) = &self.sort {
            sort.apply(&mut rows);
        }
        rows
    }

    pub fn to_path(&self) -> String {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if !self.filter.search.is_empty() {
            params.push(("q", self.filter.search.as_str()));
        }
        if let Some(status) = self.filter.status {
            params.push(("status", status.label()));
        }
        if let Some(category) = &self.filter.category {
            params.push(("category", category.as_str()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.key.as_param()));
            if sort.direction == SortDirection::Desc {
                params.push(("dir", "desc"));
            }
        }

        if params.is_empty() {
            return ASSETS_PATH.to_string();
        }
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", ASSETS_PATH, query)
    }

    /// Builds a query from decoded key/value pairs. Unknown keys and
    /// values are ignored; "All" clears a dropdown.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut query = Self::default();
        let mut key = None;
        let mut direction = SortDirection::Asc;
        for (k, v) in pairs {
            match k.as_ref() {
                "q" => query.filter.search = v.into_owned(),
                "status" => query.filter.status = AssetStatus::from_label(&v),
                "category" if v != "All" && !v.is_empty() => {
                    query.filter.category = Some(v.into_owned())
                }
                "sort" => key = SortKey::from_param(&v),
                "dir" if v == "desc" => direction = SortDirection::Desc,
                _ => {}
            }
        }
        query.sort = key.map(|key| AssetSort { key, direction });
        query
    }
}

/// Distinct categories in first-seen order.
pub fn categories(assets: &[Asset]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for asset in assets {
        if !seen.contains(&asset.category) {
            seen.push(asset.category.clone());
        }
    }
    seen
}

pub fn count_assigned_to(assets: &[Asset], employee: &str) -> usize {
    assets
        .iter()
        .filter(|a| a.assigned_to.as_deref() == Some(employee))
        .count()
}

pub fn count_at_location(assets: &[Asset], location: &str) -> usize {
    assets.iter().filter(|a| a.location == location).count()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSummary {
    pub total_assets: usize,
    pub available: usize,
    pub in_use: usize,
    pub maintenance: usize,
    pub retired: usize,
    pub total_value: u64,
    pub average_value: f64,
    /// Share of assets in use, in percent.
    pub utilization_rate: f64,
}

impl AssetSummary {
    pub fn from_assets(assets: &[Asset]) -> Self {
        let count = |status: AssetStatus| assets.iter().filter(|a| a.status == status).count();
        let total_assets = assets.len();
        let in_use = count(AssetStatus::InUse);
        let total_value: u64 = assets.iter().map(|a| a.value).sum();
        let (average_value, utilization_rate) = if total_assets == 0 {
            (0.0, 0.0)
        } else {
            (
                total_value as f64 / total_assets as f64,
                in_use as f64 / total_assets as f64 * 100.0,
            )
        };

        Self {
            total_assets,
            available: count(AssetStatus::Available),
            in_use,
            maintenance: count(AssetStatus::Maintenance),
            retired: count(AssetStatus::Retired),
            total_value,
            average_value,
            utilization_rate,
        }
    }
}
