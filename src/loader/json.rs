use crate::loader::{LoadError, LoadParams, VisitorSource};
use crate::models::Visitor;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads visitors from a JSON file holding a single array
pub struct JsonFileSource {
    params: LoadParams,
}

impl JsonFileSource {
    /// Create a source reading from the default location
    pub fn new() -> Self {
        Self::with_params(LoadParams::default())
    }

    /// Create a source with custom load parameters
    pub fn with_params(params: LoadParams) -> Self {
        Self { params }
    }

    pub fn path(&self) -> &PathBuf {
        &self.params.path
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitorSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Visitor>, LoadError> {
        let path = &self.params.path;
        debug!("Opening visitor file: {}", path.display());

        // The handle is dropped when this scope ends, on success or error.
        let file = File::open(path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;

        let visitors: Vec<Visitor> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                // serde_json reports I/O failures mid-read through its own error type
                if source.is_io() {
                    LoadError::Read {
                        path: path.clone(),
                        source: source.into(),
                    }
                } else {
                    LoadError::Parse {
                        path: path.clone(),
                        source,
                    }
                }
            })?;

        info!("Loaded {} visitors from {}", visitors.len(), path.display());
        Ok(visitors)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_VISITORS: &str = r#"[
        {
            "name": "Anna",
            "surname": "Ivanova",
            "phone": "+7 900 111 22 33",
            "subscribed": true,
            "favoriteBooks": [
                {"name": "Emma", "author": "Jane Austen", "publishingYear": 1815, "isbn": "978-0141439587", "publisher": "Penguin"}
            ]
        },
        {
            "name": "Boris",
            "surname": "Smirnov",
            "phone": "+7 900 444 55 66",
            "subscribed": false,
            "favoriteBooks": []
        }
    ]"#;

    fn source_for(contents: &str) -> (NamedTempFile, JsonFileSource) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let source = JsonFileSource::with_params(LoadParams {
            path: file.path().to_path_buf(),
        });
        (file, source)
    }

    #[test]
    fn test_load_preserves_order() {
        let (_file, source) = source_for(TWO_VISITORS);
        let visitors = source.load().unwrap();
        assert_eq!(visitors.len(), 2);
        assert_eq!(visitors[0].full_name(), "Anna Ivanova");
        assert_eq!(visitors[1].full_name(), "Boris Smirnov");
        assert_eq!(visitors[0].favorite_books[0].publishing_year, 1815);
    }

    #[test]
    fn test_load_empty_array() {
        let (_file, source) = source_for("[]");
        assert!(source.load().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::with_params(LoadParams {
            path: dir.path().join("absent.json"),
        });
        let err = source.load().unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let (_file, source) = source_for("[{\"name\": \"Anna\"");
        assert!(matches!(source.load(), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let (_file, source) = source_for(r#"{"name": "not an array"}"#);
        assert!(matches!(source.load(), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_default_params_point_at_bundled_data() {
        let source = JsonFileSource::default();
        assert_eq!(source.path(), &PathBuf::from("data/books.json"));
        assert_eq!(source.source_name(), "JSON file");
    }

    #[test]
    fn test_bundled_data_loads() {
        let visitors = JsonFileSource::new().load().unwrap();
        assert!(!visitors.is_empty());
    }
}
