pub mod browser;
pub mod categories;
pub mod command;
pub mod debounce;
pub mod error;
pub mod orchestrator;
pub mod render;
pub mod source;

pub use browser::CatalogBrowser;
pub use categories::CategoryList;
pub use command::{Command, CommandError};
pub use debounce::Debouncer;
pub use error::BrowserError;
pub use orchestrator::{FetchOrchestrator, FetchOutcome, FetchStatus, FetchTicket};
pub use source::CatalogSource;
