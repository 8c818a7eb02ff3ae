//! In-memory product store
//!
//! The store is the single authority for product records and id assignment.
//!
//! # Design Principles
//!
//! - Explicitly constructed, shared by `Arc` (no process globals)
//! - Shared lock for reads, exclusive lock for writes
//! - Insertion order preserved, including across deletes
//! - Ids start at 1 and are never reused
//!
//! Locks are held only for the in-memory scan or mutation. Callers receive
//! owned copies of records and never hold references into the collection.

mod errors;
mod product;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use product::{Product, ProductInput};
pub use memory::ProductStore;
