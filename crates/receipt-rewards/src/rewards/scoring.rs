//! Loyalty-points rules.
//!
//! Each rule looks at one aspect of a validated receipt and contributes independently. A rule
//! that cannot read its input (an unparseable date, a bad item price) contributes nothing
//! instead of failing the whole score.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use super::domain::{Cents, Receipt, ReceiptItem};

const ROUND_DOLLAR_POINTS: u32 = 50;
const QUARTER_MULTIPLE_POINTS: u32 = 25;
const QUARTER_CENTS: u64 = 25;
const ITEM_PAIR_POINTS: u32 = 5;
const ODD_DAY_POINTS: u32 = 6;
const AFTERNOON_POINTS: u32 = 10;
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;
// ceil(price * 0.2) == ceil(cents / 500)
const DESCRIPTION_BONUS_DIVISOR: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl ScoringRule {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::RetailerName,
            Self::RoundDollarTotal,
            Self::QuarterMultipleTotal,
            Self::ItemPairs,
            Self::DescriptionLength,
            Self::OddPurchaseDay,
            Self::AfternoonPurchase,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RetailerName => "Retailer name",
            Self::RoundDollarTotal => "Round dollar total",
            Self::QuarterMultipleTotal => "Total is a multiple of 0.25",
            Self::ItemPairs => "Item pairs",
            Self::DescriptionLength => "Description length bonus",
            Self::OddPurchaseDay => "Odd purchase day",
            Self::AfternoonPurchase => "Purchased between 2pm and 4pm",
        }
    }

    fn evaluate(self, receipt: &Receipt) -> RuleContribution {
        let (points, notes) = match self {
            Self::RetailerName => retailer_name(&receipt.retailer_name),
            Self::RoundDollarTotal => round_dollar(&receipt.total_amount),
            Self::QuarterMultipleTotal => quarter_multiple(&receipt.total_amount),
            Self::ItemPairs => item_pairs(&receipt.items),
            Self::DescriptionLength => description_length(&receipt.items),
            Self::OddPurchaseDay => odd_day(&receipt.purchase_date),
            Self::AfternoonPurchase => afternoon(&receipt.purchase_time),
        };

        RuleContribution {
            rule: self,
            points,
            notes,
        }
    }
}

/// Points awarded by one rule, kept so a score can be explained after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: ScoringRule,
    pub points: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub contributions: Vec<RuleContribution>,
}

/// Stateless evaluator applying every rule to a receipt.
///
/// Only defined for receipts that passed [`super::validation::validate`]; callers validate
/// first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn breakdown(&self, receipt: &Receipt) -> ScoreBreakdown {
        let contributions: Vec<RuleContribution> = ScoringRule::ordered()
            .into_iter()
            .map(|rule| rule.evaluate(receipt))
            .collect();
        let total = contributions
            .iter()
            .fold(0u32, |total, contribution| total.saturating_add(contribution.points));

        ScoreBreakdown {
            total,
            contributions,
        }
    }

    pub fn score(&self, receipt: &Receipt) -> u32 {
        self.breakdown(receipt).total
    }
}

fn saturating_u32(value: impl TryInto<u32>) -> u32 {
    value.try_into().unwrap_or(u32::MAX)
}

fn retailer_name(name: &str) -> (u32, String) {
    let count = name.chars().filter(char::is_ascii_alphanumeric).count();
    (
        saturating_u32(count),
        format!("{count} alphanumeric character(s) in '{name}'"),
    )
}

fn round_dollar(total: &str) -> (u32, String) {
    match total.parse::<Cents>() {
        Ok(cents) if cents.is_whole_dollar() => {
            (ROUND_DOLLAR_POINTS, format!("total {cents} has no cents"))
        }
        Ok(cents) => (0, format!("total {cents} has cents")),
        Err(_) => (0, format!("total '{total}' could not be read")),
    }
}

fn quarter_multiple(total: &str) -> (u32, String) {
    match total.parse::<Cents>() {
        Ok(cents) if cents.is_multiple_of(QUARTER_CENTS) => (
            QUARTER_MULTIPLE_POINTS,
            format!("total {cents} is a multiple of 0.25"),
        ),
        Ok(cents) => (0, format!("total {cents} is not a multiple of 0.25")),
        Err(_) => (0, format!("total '{total}' could not be read")),
    }
}

fn item_pairs(items: &[ReceiptItem]) -> (u32, String) {
    let pairs = items.len() / 2;
    (
        saturating_u32(pairs).saturating_mul(ITEM_PAIR_POINTS),
        format!("{pairs} pair(s) across {} item(s)", items.len()),
    )
}

// A blank description trims to length 0, which counts as a multiple of three.
fn description_length(items: &[ReceiptItem]) -> (u32, String) {
    let mut points = 0u32;
    let mut qualifying = 0usize;

    for item in items {
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }
        let Ok(price) = item.price.parse::<Cents>() else {
            continue;
        };
        qualifying += 1;
        points = points.saturating_add(saturating_u32(
            price.get().div_ceil(DESCRIPTION_BONUS_DIVISOR),
        ));
    }

    (
        points,
        format!("{qualifying} item(s) with a description length divisible by 3"),
    )
}

fn odd_day(date: &str) -> (u32, String) {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) if parsed.day() % 2 == 1 => {
            (ODD_DAY_POINTS, format!("day {} is odd", parsed.day()))
        }
        Ok(parsed) => (0, format!("day {} is even", parsed.day())),
        Err(_) => (0, format!("purchase date '{date}' could not be read")),
    }
}

fn afternoon(time: &str) -> (u32, String) {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(parsed) if AFTERNOON_HOURS.contains(&parsed.hour()) => (
            AFTERNOON_POINTS,
            format!("purchased at {time}, inside 14:00-16:00"),
        ),
        Ok(_) => (0, format!("purchased at {time}, outside 14:00-16:00")),
        Err(_) => (0, format!("purchase time '{time}' could not be read")),
    }
}
