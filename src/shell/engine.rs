use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::config::Config;
use crate::data::query::{self, AssetFilter, AssetQuery, AssetSort, AssetSummary};
use crate::data::{ApiResult, Asset, Catalog, Employee, Location, Repository, TimeEntry};
use crate::error::ConsoleError;
use crate::shell::navigation::NavigationHistory;
use crate::shell::pagination::{PageState, Pager};
use crate::shell::router::RecordingRouter;
use crate::shell::view::{ListView, View};

pub const HOME_PATH: &str = "/";
const RECENT_ASSETS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Assets,
    Locations,
    Employees,
    TimeEntries,
}

/// A record together with the collection it belongs to.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "collection", content = "record", rename_all = "snake_case")]
pub enum RecordPayload {
    Assets(Asset),
    Locations(Location),
    Employees(Employee),
    TimeEntries(TimeEntry),
}

/// One line of console input: `{"op": "...", "payload": {...}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", content = "payload", rename_all = "snake_case")]
pub enum Command {
    Navigate { path: String },
    Back,
    Forward,
    Home,
    Page {
        #[serde(deserialize_with = "saturating_page")]
        page: i64,
    },
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    PageSize { size: usize },
    Filter(AssetFilter),
    Sort(AssetSort),
    Get { collection: Collection, id: String },
    Create(RecordPayload),
    Update(RecordPayload),
    Delete { collection: Collection, id: String },
    State,
}

#[derive(Serialize)]
struct ViewState<'a> {
    path: &'a str,
    view: View,
    can_go_back: bool,
    can_go_forward: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<PageState>,
    content: Value,
}

#[derive(Serialize)]
struct LocationRow<'a> {
    #[serde(flatten)]
    location: &'a Location,
    asset_count: usize,
}

#[derive(Serialize)]
struct EmployeeRow<'a> {
    #[serde(flatten)]
    employee: &'a Employee,
    asset_count: usize,
}

/// The embedded app shell: owns the navigation history, one pager per list
/// view and the catalog, and answers one command at a time.
pub struct Console {
    config: Config,
    catalog: Catalog,
    history: NavigationHistory<RecordingRouter>,
    pagers: HashMap<ListView, Pager>,
    query: AssetQuery,
}

impl Console {
    pub fn new(config: Config, catalog: Catalog) -> Result<Self, ConsoleError> {
        let start = resolve(&config.base_url, HOME_PATH, &config.start_path)?;
        let mut console = Self {
            history: NavigationHistory::new(start, RecordingRouter::new()),
            config,
            catalog,
            pagers: HashMap::new(),
            query: AssetQuery::default(),
        };
        console.sync();
        Ok(console)
    }

    pub fn history(&self) -> &NavigationHistory<RecordingRouter> {
        &self.history
    }

    pub fn pager(&self, list: ListView) -> Option<&Pager> {
        self.pagers.get(&list)
    }

    pub fn query(&self) -> &AssetQuery {
        &self.query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reads commands line by line until `input` closes, writing one
    /// response envelope per command.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut handled = 0usize;

        while let Some(line) = lines.next_line().await.context("Failed to read command")? {
            let line = line.trim();
            // Blank lines and comments are allowed in scripts
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let response = self.handle_line(line);
            let mut encoded =
                serde_json::to_string(&response).context("Failed to encode response")?;
            encoded.push('\n');
            output
                .write_all(encoded.as_bytes())
                .await
                .context("Failed to write response")?;
            output.flush().await.context("Failed to flush output")?;
            handled += 1;
        }

        info!("Input closed after {} commands", handled);
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> ApiResult<Value> {
        match serde_json::from_str::<Command>(line) {
            Ok(command) => self.handle(command),
            Err(err) => {
                warn!("Rejected command {:?}: {}", line, err);
                Err::<Value, _>(ConsoleError::from(err)).into()
            }
        }
    }

    pub fn handle(&mut self, command: Command) -> ApiResult<Value> {
        debug!("command {:?}", command);
        let outcome = self.dispatch(command);
        self.sync();

        let result = match outcome {
            Ok(Some(data)) => Ok(data),
            Ok(None) => self.view_state(),
            Err(err) => {
                warn!("Command failed: {}", err);
                Err(err)
            }
        };
        result.into()
    }

    /// Applies `command`. `None` means "answer with the view state".
    fn dispatch(&mut self, command: Command) -> Result<Option<Value>, ConsoleError> {
        match command {
            Command::Navigate { path } => {
                let path = resolve(&self.config.base_url, self.history.current(), &path)?;
                self.history.navigate_to(path);
            }
            Command::Back => {
                self.history.go_back();
            }
            Command::Forward => {
                self.history.go_forward();
            }
            Command::Home => {
                self.history.navigate_to(HOME_PATH);
            }
            Command::Page { page } => self.with_pager(|p| p.go_to_page(page)),
            Command::NextPage => self.with_pager(Pager::next_page),
            Command::PreviousPage => self.with_pager(Pager::previous_page),
            Command::FirstPage => self.with_pager(Pager::first_page),
            Command::LastPage => self.with_pager(Pager::last_page),
            Command::PageSize { size } => self.with_pager(|p| p.set_page_size(size)),
            Command::Filter(filter) => {
                let query = AssetQuery {
                    filter,
                    sort: self.query.sort,
                };
                self.history.navigate_to(query.to_path());
            }
            Command::Sort(sort) => {
                let query = AssetQuery {
                    filter: self.query.filter.clone(),
                    sort: Some(sort),
                };
                self.history.navigate_to(query.to_path());
            }
            Command::Get { collection, id } => {
                return match collection {
                    Collection::Assets => to_json(self.catalog.assets().get(&id)?),
                    Collection::Locations => to_json(self.catalog.locations().get(&id)?),
                    Collection::Employees => to_json(self.catalog.employees().get(&id)?),
                    Collection::TimeEntries => to_json(self.catalog.time_entries().get(&id)?),
                };
            }
            Command::Create(payload) => {
                return match payload {
                    RecordPayload::Assets(r) => to_json(self.catalog.assets_mut().create(r)?),
                    RecordPayload::Locations(r) => {
                        to_json(self.catalog.locations_mut().create(r)?)
                    }
                    RecordPayload::Employees(r) => {
                        to_json(self.catalog.employees_mut().create(r)?)
                    }
                    RecordPayload::TimeEntries(r) => {
                        to_json(self.catalog.time_entries_mut().create(r)?)
                    }
                };
            }
            Command::Update(payload) => {
                return match payload {
                    RecordPayload::Assets(r) => to_json(self.catalog.assets_mut().update(r)?),
                    RecordPayload::Locations(r) => {
                        to_json(self.catalog.locations_mut().update(r)?)
                    }
                    RecordPayload::Employees(r) => {
                        to_json(self.catalog.employees_mut().update(r)?)
                    }
                    RecordPayload::TimeEntries(r) => {
                        to_json(self.catalog.time_entries_mut().update(r)?)
                    }
                };
            }
            Command::Delete { collection, id } => {
                return match collection {
                    Collection::Assets => to_json(self.catalog.assets_mut().delete(&id)?),
                    Collection::Locations => to_json(self.catalog.locations_mut().delete(&id)?),
                    Collection::Employees => to_json(self.catalog.employees_mut().delete(&id)?),
                    Collection::TimeEntries => {
                        to_json(self.catalog.time_entries_mut().delete(&id)?)
                    }
                };
            }
            Command::State => {}
        }
        Ok(None)
    }

    /// Runs `f` on the current view's pager; a no-op outside list views.
    fn with_pager(&mut self, f: impl FnOnce(&mut Pager)) {
        match View::from_path(self.history.current()).list() {
            Some(list) => {
                if let Some(pager) = self.pagers.get_mut(&list) {
                    f(pager);
                }
            }
            None => debug!("no pager on {}", self.history.current()),
        }
    }

    /// Brings the asset query and the visible pager in line with the
    /// current history entry.
    fn sync(&mut self) {
        for path in self.history.router_mut().take() {
            info!("Showing {}", path);
        }

        let view = View::from_path(self.history.current());
        self.query = if view == View::Assets {
            query_from_path(self.history.current())
        } else {
            AssetQuery::default()
        };

        if let Some(list) = view.list() {
            let total = self.list_len(list);
            let page_size = self.config.page_size;
            self.pagers
                .entry(list)
                .or_insert_with(|| Pager::new(0, page_size))
                .set_total_items(total);
        }
    }

    fn list_len(&self, list: ListView) -> usize {
        match list {
            ListView::Assets => self.asset_rows().len(),
            ListView::Locations => self.catalog.locations().len(),
            ListView::Employees => self.catalog.employees().len(),
            ListView::TimeEntries => self.catalog.time_entries().len(),
        }
    }

    fn asset_rows(&self) -> Vec<Asset> {
        self.query.run(self.catalog.assets().list())
    }

    fn view_state(&self) -> Result<Value, ConsoleError> {
        let path = self.history.current();
        let view = View::from_path(path);
        let pager = view.list().and_then(|list| self.pagers.get(&list));

        let content = match view {
            View::Dashboard => {
                let assets = self.catalog.assets().list();
                json!({
                    "stats": AssetSummary::from_assets(&assets),
                    "total_locations": self.catalog.locations().len(),
                    "total_employees": self.catalog.employees().len(),
                    "recent_assets": &assets[..assets.len().min(RECENT_ASSETS)],
                })
            }
            View::Assets => {
                let rows = self.asset_rows();
                json!({
                    "filter": self.query.filter,
                    "sort": self.query.sort,
                    "total_assets": self.catalog.assets().len(),
                    "categories": query::categories(&self.catalog.assets().list()),
                    "rows": paged(pager, &rows),
                })
            }
            View::Locations => {
                let assets = self.catalog.assets().list();
                let locations = self.catalog.locations().list();
                let rows: Vec<LocationRow> = paged(pager, &locations)
                    .iter()
                    .map(|location| LocationRow {
                        location,
                        asset_count: query::count_at_location(&assets, &location.name),
                    })
                    .collect();
                json!({ "rows": rows })
            }
            View::Employees => {
                let assets = self.catalog.assets().list();
                let employees = self.catalog.employees().list();
                let rows: Vec<EmployeeRow> = paged(pager, &employees)
                    .iter()
                    .map(|employee| EmployeeRow {
                        employee,
                        asset_count: query::count_assigned_to(&assets, &employee.name),
                    })
                    .collect();
                json!({ "rows": rows })
            }
            View::TimeEntries => {
                let entries = self.catalog.time_entries().list();
                json!({ "rows": paged(pager, &entries) })
            }
            View::Reports => {
                serde_json::to_value(AssetSummary::from_assets(&self.catalog.assets().list()))
                    .map_err(ConsoleError::Encode)?
            }
            View::Settings => json!({
                "start_path": self.config.start_path,
                "page_size": self.config.page_size,
                "page_size_options": self.config.page_size_options,
                "base_url": self.config.base_url.as_str(),
            }),
            View::NotFound => json!({ "message": format!("Nothing to show at {}", path) }),
        };

        let state = ViewState {
            path,
            view,
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
            page: pager.map(Pager::state),
            content,
        };
        serde_json::to_value(state).map_err(ConsoleError::Encode)
    }
}

fn paged<'a, T>(pager: Option<&Pager>, rows: &'a [T]) -> &'a [T] {
    pager.map_or(rows, |p| p.paged_items(rows))
}

fn to_json<T: Serialize>(value: T) -> Result<Option<Value>, ConsoleError> {
    serde_json::to_value(value)
        .map(Some)
        .map_err(ConsoleError::Encode)
}

/// Accepts any JSON number as a page, so huge or fractional requests clamp
/// in the pager instead of failing to parse.
fn saturating_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    Ok(match (number.as_i64(), number.as_f64()) {
        (Some(page), _) => page,
        // `as` saturates at the i64 bounds and maps NaN to 0
        (None, Some(page)) => page as i64,
        (None, None) => 0,
    })
}

fn query_from_path(path: &str) -> AssetQuery {
    let raw = path.split_once('?').map_or("", |(_, q)| q);
    AssetQuery::from_pairs(url::form_urlencoded::parse(raw.as_bytes()))
}

/// Resolves `raw` (absolute or relative to `current`) into a view path with
/// its query string. View paths are rooted at the base URL's path, so with a
/// base of `https://host/desk/` the view `/assets` lives at
/// `https://host/desk/assets`. Anything outside that root is rejected.
fn resolve(base: &Url, current: &str, raw: &str) -> Result<String, ConsoleError> {
    let invalid = |source| ConsoleError::Path {
        path: raw.to_string(),
        source,
    };
    let foreign = || ConsoleError::ForeignPath(raw.to_string());

    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let dir = format!("{}/", root.path());
        root.set_path(&dir);
    }
    let url = root
        .join(in_app(current))
        .and_then(|here| here.join(in_app(raw)))
        .map_err(invalid)?;

    if url.scheme() != root.scheme()
        || url.host_str() != root.host_str()
        || url.port() != root.port()
    {
        return Err(foreign());
    }

    let rest = if url.path() == root.path().trim_end_matches('/') {
        ""
    } else {
        url.path().strip_prefix(root.path()).ok_or_else(foreign)?
    };
    let mut path = format!("/{}", rest);
    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        path.push('?');
        path.push_str(query);
    }
    Ok(path)
}

/// Turns a view path into a reference relative to the app root. Scheme
/// relative references (`//host/...`) are left alone.
fn in_app(path: &str) -> &str {
    if path.starts_with("//") {
        path
    } else {
        path.strip_prefix('/').unwrap_or(path)
    }
}
