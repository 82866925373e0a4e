use super::router::Router;

/// Back/forward stack of visited view paths, independent of the router.
///
/// `entries` is never empty and `cursor` always indexes into it.
#[derive(Debug)]
pub struct NavigationHistory<R> {
    entries: Vec<String>,
    cursor: usize,
    router: R,
}

impl<R: Router> NavigationHistory<R> {
    pub fn new(seed: impl Into<String>, router: R) -> Self {
        Self {
            entries: vec![seed.into()],
            cursor: 0,
            router,
        }
    }

    /// Records `path` and has the router display it.
    ///
    /// Returns `false` when `path` is already current, in which case the
    /// history is left alone (the router is still asked to display it).
    pub fn navigate_to(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        let pushed = self.add_to_history(path.clone());
        log::info!("navigate {} (pushed: {})", path, pushed);
        self.router.display(&path);
        pushed
    }

    /// Records `path` without notifying the router.
    pub fn add_to_history(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.entries[self.cursor] == path {
            return false;
        }
        // Remove any forward history when navigating to a new path
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor = self.entries.len() - 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor < self.entries.len() - 1
    }

    pub fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.router.display(&self.entries[self.cursor]);
        Some(self.entries[self.cursor].as_str())
    }

    pub fn go_forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.router.display(&self.entries[self.cursor]);
        Some(self.entries[self.cursor].as_str())
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }
}
