//! Receipt intake, loyalty-points scoring, and scored receipt lookup.
//!
//! Validation and scoring are pure functions over a decoded [`Receipt`]. Scored receipts live
//! in a [`KeyedStore`] shared by every request; the [`ReceiptService`] ties the pieces together
//! and [`receipt_router`] exposes them over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Cents, InvalidReceiptId, ParseCentsError, Receipt, ReceiptId, ReceiptItem, ScoredReceipt,
};
pub use repository::ReceiptRepository;
pub use router::receipt_router;
pub use scoring::{RuleContribution, ScoreBreakdown, ScoringEngine, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
pub use store::{Keyed, KeyedStore, StoreError};
pub use validation::{is_valid, validate, ValidationFailed};
