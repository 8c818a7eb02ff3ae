//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Not-found is an expected outcome of addressing an unknown id,
/// not a fault in the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id
    #[error("Product {0} not found")]
    NotFound(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(StoreError::NotFound(7).to_string(), "Product 7 not found");
    }
}
