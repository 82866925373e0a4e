/// Display sink for the navigation history.
///
/// The history owns the notion of "current path"; a router only shows
/// whatever it is told to show and never reports back.
pub trait Router {
    fn display(&mut self, path: &str);
}

impl<R: Router + ?Sized> Router for &mut R {
    fn display(&mut self, path: &str) {
        (**self).display(path)
    }
}

impl<R: Router + ?Sized> Router for Box<R> {
    fn display(&mut self, path: &str) {
        (**self).display(path)
    }
}

/// Router that remembers every path it was asked to display.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    displayed: Vec<String>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }

    pub fn last(&self) -> Option<&str> {
        self.displayed.last().map(String::as_str)
    }

    /// Drains the pending displays, oldest first.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.displayed)
    }
}

impl Router for RecordingRouter {
    fn display(&mut self, path: &str) {
        log::debug!("display {}", path);
        self.displayed.push(path.to_string());
    }
}
