//! Class-File Port

use crate::error::BoxError;

/// Makes the declarations in a class file available, once
///
/// Loading the same path again must succeed without repeating the work.
pub trait ClassFileLoader: Send + Sync {
    /// Ensure `path` has been included
    fn load(&self, path: &str) -> Result<(), BoxError>;
}
