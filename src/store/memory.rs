//! Product store backed by a reader-writer lock

use chrono::Utc;
use parking_lot::RwLock;

use super::errors::{StoreError, StoreResult};
use super::product::{Product, ProductInput};

/// Records and id counter, always locked together
#[derive(Debug)]
struct StoreInner {
    products: Vec<Product>,
    next_id: i64,
}

/// In-memory product store
///
/// Reads (`list`, `get`) take the shared lock; writes (`create`, `update`,
/// `delete`) take the exclusive lock for the whole mutation, including id
/// assignment.
#[derive(Debug)]
pub struct ProductStore {
    inner: RwLock<StoreInner>,
}

impl ProductStore {
    /// Create an empty store whose first id will be 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }

    /// Fetch a record by id
    pub fn get(&self, id: i64) -> Option<Product> {
        self.inner
            .read()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Store a new record, assigning the next id and both timestamps
    pub fn create(&self, input: ProductInput) -> Product {
        let mut inner = self.inner.write();

        let id = inner.next_id;
        inner.next_id += 1;

        let product = Product::from_input(id, input, Utc::now());
        inner.products.push(product.clone());

        tracing::debug!(id, "product created");
        product
    }

    /// Replace the client-owned fields of an existing record.
    ///
    /// Never creates a record when `id` is unknown.
    pub fn update(&self, id: i64, input: ProductInput) -> StoreResult<Product> {
        let mut inner = self.inner.write();

        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        product.replace_with(input, Utc::now());

        tracing::debug!(id, "product updated");
        Ok(product.clone())
    }

    /// Remove a record, keeping the relative order of the rest
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write();

        let index = inner
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.products.remove(index);

        tracing::debug!(id, "product deleted");
        Ok(())
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.inner.read().products.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = ProductStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = ProductStore::new();
        let a = store.create(ProductInput::named("a"));
        let b = store.create(ProductInput::named("b"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_returns_stored_copy() {
        let store = ProductStore::new();
        let created = store.create(ProductInput::named("Widget").with_price(9.99).with_stock(4));

        assert_eq!(store.get(created.id), Some(created));
    }

    #[test]
    fn test_update_missing_does_not_upsert() {
        let store = ProductStore::new();
        store.create(ProductInput::named("a"));

        let result = store.update(99, ProductInput::named("ghost"));

        assert_eq!(result, Err(StoreError::NotFound(99)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "a");
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let store = ProductStore::new();
        let original = store.create(ProductInput::named("old").with_description("x"));

        let updated = store
            .update(original.id, ProductInput::named("new").with_price(2.5))
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.name, "new");
        assert_eq!(updated.description, "");
        assert_eq!(store.get(original.id), Some(updated));
    }

    #[test]
    fn test_delete_preserves_order() {
        let store = ProductStore::new();
        for name in ["a", "b", "c"] {
            store.create(ProductInput::named(name));
        }

        store.delete(2).unwrap();

        let names: Vec<_> = store.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(store.delete(2), Err(StoreError::NotFound(2)));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = ProductStore::new();
        let first = store.create(ProductInput::named("a"));
        store.delete(first.id).unwrap();

        let second = store.create(ProductInput::named("b"));
        assert_eq!(second.id, first.id + 1);
    }
}
