//! Product catalog persistence seam.
//!
//! Scoring only needs exact-name resolution and category listings, so the
//! trait stays small. [`MemoryStore`] backs the CLI and tests; a
//! database-backed implementation can slot in behind the same trait.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::product::ProductRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Read/write access to enriched product records.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All records whose product name matches exactly, in insertion order.
    async fn find_by_name(&self, product_name: &str) -> Result<Vec<ProductRecord>, StoreError>;

    /// Stores the record unless one with the same product name already
    /// exists; returns whichever record the store ends up holding.
    async fn insert(&self, record: ProductRecord) -> Result<ProductRecord, StoreError>;

    async fn list_all(&self) -> Result<Vec<ProductRecord>, StoreError>;

    /// Records whose resolved category equals `category`.
    async fn list_by_category(&self, category: &str) -> Result<Vec<ProductRecord>, StoreError>;
}

/// In-memory catalog, insertion-ordered.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ProductRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_name(&self, product_name: &str) -> Result<Vec<ProductRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.product_name == product_name)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: ProductRecord) -> Result<ProductRecord, StoreError> {
        let mut records = self.records.write().await;
        if let Some(existing) = records
            .iter()
            .find(|r| r.product_name == record.product_name)
        {
            return Ok(existing.clone());
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<ProductRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(name: &str, category: &str) -> ProductRecord {
        let mut record: ProductRecord =
            serde_json::from_str(&format!(r#"{{"product_name": "{name}"}}"#)).unwrap();
        record.category = Some(category.to_string());
        record
    }

    #[tokio::test]
    async fn test_insert_skips_existing_name() {
        let store = MemoryStore::new();
        let first = store
            .insert(sample_record("Beef Recipe", "Raw Food"))
            .await
            .unwrap();
        let second = store
            .insert(sample_record("Beef Recipe", "Fresh Food"))
            .await
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.category.as_deref(), Some("Raw Food"));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_name_returns_all_matches() {
        let store = MemoryStore::new();
        store
            .insert(sample_record("Chicken Recipe", "Raw Food"))
            .await
            .unwrap();
        let found = store.find_by_name("Chicken Recipe").await.unwrap();
        assert_eq!(found.len(), 1);
        assert!(store.find_by_name("Missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_category_filters() {
        let store = MemoryStore::new();
        store
            .insert(sample_record("Raw One", "Raw Food"))
            .await
            .unwrap();
        store
            .insert(sample_record("Fresh One", "Fresh Food"))
            .await
            .unwrap();
        let raw = store.list_by_category("Raw Food").await.unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].product_name, "Raw One");
    }
}
