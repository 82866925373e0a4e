mod engine;
mod navigation;
mod pagination;
mod router;
mod view;

pub use engine::{Collection, Command, Console, RecordPayload};
pub use navigation::NavigationHistory;
pub use pagination::{PageState, Pager, DEFAULT_PAGE_SIZE};
pub use router::{RecordingRouter, Router};
pub use view::{ListView, View};
