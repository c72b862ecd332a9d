use super::common::*;
use crate::rewards::domain::ReceiptItem;
use crate::rewards::scoring::{ScoringEngine, ScoringRule};

fn points_for(rule: ScoringRule, receipt: &crate::rewards::Receipt) -> u32 {
    ScoringEngine::new()
        .breakdown(receipt)
        .contributions
        .into_iter()
        .find(|contribution| contribution.rule == rule)
        .map(|contribution| contribution.points)
        .expect("every rule contributes")
}

#[test]
fn target_receipt_scores_28() {
    let breakdown = ScoringEngine::new().breakdown(&target_receipt());
    assert_eq!(breakdown.total, 28);
    assert_eq!(breakdown.contributions.len(), 7);
    assert_eq!(points_for(ScoringRule::RetailerName, &target_receipt()), 6);
    assert_eq!(points_for(ScoringRule::ItemPairs, &target_receipt()), 10);
    assert_eq!(points_for(ScoringRule::DescriptionLength, &target_receipt()), 6);
    assert_eq!(points_for(ScoringRule::OddPurchaseDay, &target_receipt()), 6);
}

#[test]
fn corner_market_receipt_scores_109() {
    let engine = ScoringEngine::new();
    assert_eq!(engine.score(&corner_market_receipt()), 109);
}

#[test]
fn zero_point_receipt_scores_nothing() {
    assert_eq!(ScoringEngine::new().score(&zero_point_receipt()), 0);
}

#[test]
fn round_dollar_total_also_earns_quarter_bonus() {
    let mut receipt = zero_point_receipt();
    receipt.total_amount = "100.00".to_string();
    assert_eq!(points_for(ScoringRule::RoundDollarTotal, &receipt), 50);
    assert_eq!(points_for(ScoringRule::QuarterMultipleTotal, &receipt), 25);

    receipt.total_amount = "100.75".to_string();
    assert_eq!(points_for(ScoringRule::RoundDollarTotal, &receipt), 0);
    assert_eq!(points_for(ScoringRule::QuarterMultipleTotal, &receipt), 25);
}

#[test]
fn item_pairs_round_down() {
    let mut receipt = zero_point_receipt();
    receipt.items = vec![ReceiptItem::new("item", "0.01"); 3];
    assert_eq!(points_for(ScoringRule::ItemPairs, &receipt), 5);
}

#[test]
fn description_bonus_rounds_up_a_fifth_of_the_price() {
    let mut receipt = zero_point_receipt();
    receipt.items = vec![ReceiptItem::new("abc", "0.01")];
    assert_eq!(points_for(ScoringRule::DescriptionLength, &receipt), 1);

    receipt.items = vec![ReceiptItem::new("abc", "5.00")];
    assert_eq!(points_for(ScoringRule::DescriptionLength, &receipt), 1);

    receipt.items = vec![ReceiptItem::new("abc", "5.01")];
    assert_eq!(points_for(ScoringRule::DescriptionLength, &receipt), 2);
}

#[test]
fn blank_description_counts_as_length_zero() {
    let mut receipt = zero_point_receipt();
    receipt.items = vec![ReceiptItem::new("   ", "10.00")];
    assert_eq!(points_for(ScoringRule::DescriptionLength, &receipt), 2);
}

#[test]
fn unreadable_inputs_contribute_nothing() {
    let mut receipt = target_receipt();
    receipt.purchase_date = "2022-13-45".to_string();
    receipt.purchase_time = "noon".to_string();
    receipt.items = vec![
        ReceiptItem::new("abc", "free"),
        ReceiptItem::new("def", "3.00"),
    ];

    assert_eq!(points_for(ScoringRule::OddPurchaseDay, &receipt), 0);
    assert_eq!(points_for(ScoringRule::AfternoonPurchase, &receipt), 0);
    assert_eq!(points_for(ScoringRule::DescriptionLength, &receipt), 1);
}

#[test]
fn afternoon_window_is_half_open() {
    let mut receipt = zero_point_receipt();
    for (time, expected) in [("13:59", 0), ("14:00", 10), ("15:59", 10), ("16:00", 0)] {
        receipt.purchase_time = time.to_string();
        assert_eq!(
            points_for(ScoringRule::AfternoonPurchase, &receipt),
            expected,
            "purchase at {time}"
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let engine = ScoringEngine::new();
    let receipt = target_receipt();
    let first = engine.breakdown(&receipt);
    for _ in 0..10 {
        assert_eq!(engine.breakdown(&receipt), first);
    }
}
