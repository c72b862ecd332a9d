use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::rewards::domain::{Receipt, ReceiptId, ReceiptItem, ScoredReceipt};
use crate::rewards::repository::ReceiptRepository;
use crate::rewards::store::{KeyedStore, StoreError};
use crate::rewards::{receipt_router, ReceiptService};

pub(super) type MemoryStore = KeyedStore<ScoredReceipt>;

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer_name: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total_amount: "35.35".to_string(),
        items: vec![
            ReceiptItem::new("Mountain Dew 12PK", "6.49"),
            ReceiptItem::new("Emils Cheese Pizza", "12.25"),
            ReceiptItem::new("Knorr Creamy Chicken", "1.26"),
            ReceiptItem::new("Doritos Nacho Cheese", "3.35"),
            ReceiptItem::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer_name: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total_amount: "9.00".to_string(),
        items: vec![ReceiptItem::new("Gatorade", "2.25"); 4],
    }
}

/// Minimal valid receipt that earns no points from any rule.
pub(super) fn zero_point_receipt() -> Receipt {
    Receipt {
        retailer_name: "_".to_string(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "13:33".to_string(),
        total_amount: "0.01".to_string(),
        items: vec![ReceiptItem::new("item", "0.01")],
    }
}

pub(super) fn scored(points: u32) -> ScoredReceipt {
    ScoredReceipt::new(ReceiptId::generate(), zero_point_receipt(), points)
}

pub(super) fn build_service() -> (ReceiptService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = ReceiptService::new(store.clone());
    (service, store)
}

pub(super) struct ConflictRepository;

impl ReceiptRepository for ConflictRepository {
    fn save(&self, receipt: ScoredReceipt) -> Result<ScoredReceipt, StoreError> {
        Err(StoreError::AlreadyExists {
            id: receipt.id().to_string(),
        })
    }

    fn find_by_id(&self, id: &ReceiptId) -> Result<ScoredReceipt, StoreError> {
        Err(StoreError::NotFound { id: id.to_string() })
    }

    fn delete_by_id(&self, id: &ReceiptId) -> Result<(), StoreError> {
        Err(StoreError::NotFound { id: id.to_string() })
    }
}

pub(super) fn router_with_store(store: Arc<MemoryStore>) -> axum::Router {
    receipt_router(Arc::new(ReceiptService::new(store)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
