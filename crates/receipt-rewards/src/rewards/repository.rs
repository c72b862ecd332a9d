use super::domain::{ReceiptId, ScoredReceipt};
use super::store::{Keyed, KeyedStore, StoreError};

impl Keyed for ScoredReceipt {
    fn key(&self) -> String {
        self.id().to_string()
    }
}

/// Storage abstraction so the service can be exercised against failing stores in tests.
pub trait ReceiptRepository: Send + Sync {
    fn save(&self, receipt: ScoredReceipt) -> Result<ScoredReceipt, StoreError>;
    fn find_by_id(&self, id: &ReceiptId) -> Result<ScoredReceipt, StoreError>;
    fn delete_by_id(&self, id: &ReceiptId) -> Result<(), StoreError>;
}

impl ReceiptRepository for KeyedStore<ScoredReceipt> {
    fn save(&self, receipt: ScoredReceipt) -> Result<ScoredReceipt, StoreError> {
        KeyedStore::save(self, receipt)
    }

    fn find_by_id(&self, id: &ReceiptId) -> Result<ScoredReceipt, StoreError> {
        KeyedStore::find_by_id(self, &id.to_string())
    }

    fn delete_by_id(&self, id: &ReceiptId) -> Result<(), StoreError> {
        KeyedStore::delete_by_id(self, &id.to_string())
    }
}
