use metrics_exporter_prometheus::PrometheusHandle;
use receipt_rewards::rewards::{KeyedStore, ReceiptService, ScoredReceipt};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type ReceiptStore = KeyedStore<ScoredReceipt>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service backed by a fresh, empty in-memory store.
pub(crate) fn in_memory_service() -> (Arc<ReceiptService<ReceiptStore>>, Arc<ReceiptStore>) {
    let store = Arc::new(ReceiptStore::new());
    let service = Arc::new(ReceiptService::new(store.clone()));
    (service, store)
}
