use crate::loader::LoadError;
use crate::models::Visitor;

/// Common trait for anything that can supply the visitor list
pub trait VisitorSource {
    /// Load all visitors, in source order
    fn load(&self) -> Result<Vec<Visitor>, LoadError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
