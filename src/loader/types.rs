use std::path::PathBuf;

/// Where the visitor list is read from
#[derive(Debug, Clone)]
pub struct LoadParams {
    /// Path to the JSON file with the visitor array
    pub path: PathBuf,
}

impl Default for LoadParams {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/books.json"),
        }
    }
}
