use crate::infra::in_memory_service;
use clap::Args;
use receipt_rewards::error::AppError;
use receipt_rewards::rewards::{is_valid, Receipt, ReceiptItem, ScoreBreakdown, ScoringEngine};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) file: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.file)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;

    println!("Receipt from {}", receipt.retailer_name);
    if !is_valid(&receipt) {
        println!("Validation: failed (the receipt would be rejected)");
        return Ok(());
    }
    println!("Validation: passed");

    let breakdown = ScoringEngine::new().breakdown(&receipt);
    render_breakdown(&breakdown);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let (service, store) = in_memory_service();
    let engine = ScoringEngine::new();

    println!("Receipt rewards demo");
    for receipt in reference_receipts() {
        let breakdown = engine.breakdown(&receipt);
        let retailer = receipt.retailer_name.clone();
        match service.submit(receipt) {
            Ok(scored) => {
                let looked_up = service
                    .find_receipt_by_id(&scored.id().to_string())
                    .map(|found| found.points())
                    .unwrap_or_default();
                println!("\n{retailer}: id {} -> {looked_up} points", scored.id());
                render_breakdown(&breakdown);
            }
            Err(err) => println!("\n{retailer}: rejected ({err})"),
        }
    }

    println!("\nStored receipts: {}", store.len());
    Ok(())
}

fn render_breakdown(breakdown: &ScoreBreakdown) {
    for contribution in &breakdown.contributions {
        println!(
            "- {:<32} {:>4}  {}",
            contribution.rule.label(),
            contribution.points,
            contribution.notes
        );
    }
    println!("Total points: {}", breakdown.total);
}

fn reference_receipts() -> Vec<Receipt> {
    vec![
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
        },
        Receipt {
            retailer_name: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            total_amount: "9.00".to_string(),
            items: vec![ReceiptItem::new("Gatorade", "2.25"); 4],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_receipts_score_as_documented() {
        let engine = ScoringEngine::new();
        let totals: Vec<u32> = reference_receipts()
            .iter()
            .map(|receipt| engine.score(receipt))
            .collect();
        assert_eq!(totals, vec![28, 109]);
    }

    #[test]
    fn score_command_reports_missing_files() {
        let result = run_score(ScoreArgs {
            file: PathBuf::from("does/not/exist.json"),
        });
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
