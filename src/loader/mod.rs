pub mod error;
pub mod json;
pub mod traits;
pub mod types;

pub use error::LoadError;
pub use json::JsonFileSource;
pub use traits::VisitorSource;
pub use types::LoadParams;
