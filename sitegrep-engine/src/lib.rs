pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod frontier;
pub mod matcher;
pub mod progress;
pub mod result;
pub mod scope;
pub mod search;

pub use crawler::{Crawler, crawl};
pub use error::{EngineError, FetchError};
pub use frontier::{CrawlTask, Frontier};
pub use progress::{ProgressHandle, ProgressSnapshot, progress_handle};
pub use result::ResultEntry;
pub use scope::ScopeContext;
pub use search::search;
