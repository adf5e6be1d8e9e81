use serde::{Deserialize, Serialize};

/// One successfully fetched, in-scope page that passed the keyword
/// filter. Emitted at most once per URL, in BFS dequeue order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    pub url: String,
    pub title: String,
    pub depth: usize,
    pub width_index: usize,
    pub parent: Option<String>,
    /// Normalized visible text the keyword was matched against.
    pub text: String,
}
