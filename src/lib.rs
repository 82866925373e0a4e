//! Router-independent navigation history and list pagination for the
//! asset management console, plus the catalog and command loop around them.

pub mod config;
pub mod data;
pub mod error;
pub mod shell;

pub use config::Config;
pub use error::ConsoleError;
