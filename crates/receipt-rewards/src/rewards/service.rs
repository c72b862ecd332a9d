use std::sync::Arc;

use super::domain::{InvalidReceiptId, Receipt, ReceiptId, ScoredReceipt};
use super::repository::ReceiptRepository;
use super::scoring::ScoringEngine;
use super::store::StoreError;
use super::validation::{self, ValidationFailed};

/// Service composing the scoring rules with the scored receipt repository.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: ScoringEngine,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: ScoringEngine::new(),
        }
    }

    /// Validate, then score and store. Entry point for untrusted input.
    pub fn submit(&self, receipt: Receipt) -> Result<ScoredReceipt, ReceiptServiceError> {
        validation::validate(&receipt)?;
        self.process_receipt(receipt)
    }

    /// Score a receipt the caller has already validated, assign it a fresh id, and store it.
    pub fn process_receipt(&self, receipt: Receipt) -> Result<ScoredReceipt, ReceiptServiceError> {
        let points = self.engine.score(&receipt);
        let scored = ScoredReceipt::new(ReceiptId::generate(), receipt, points);
        let stored = self.repository.save(scored)?;
        Ok(stored)
    }

    pub fn find_receipt_by_id(&self, raw_id: &str) -> Result<ScoredReceipt, ReceiptServiceError> {
        let id = ReceiptId::parse(raw_id)?;
        let receipt = self.repository.find_by_id(&id)?;
        Ok(receipt)
    }

    pub fn delete_receipt_by_id(&self, raw_id: &str) -> Result<(), ReceiptServiceError> {
        let id = ReceiptId::parse(raw_id)?;
        self.repository.delete_by_id(&id)?;
        Ok(())
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    ValidationFailed(#[from] ValidationFailed),
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidReceiptId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
