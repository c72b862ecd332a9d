//! Structural checks a receipt must pass before it is scored.
//!
//! A receipt is either valid or not; no field-level detail is reported, so callers can only
//! surface a generic "invalid receipt" signal.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::domain::{Cents, Receipt, ReceiptItem};

const DATE_LEN: usize = 10;
const TIME_LEN: usize = 5;

/// Raised when any validation rule fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("receipt failed validation")]
pub struct ValidationFailed;

pub fn is_valid(receipt: &Receipt) -> bool {
    valid_retailer(&receipt.retailer_name)
        && valid_date(&receipt.purchase_date)
        && valid_time(&receipt.purchase_time)
        && valid_amount(&receipt.total_amount)
        && valid_items(&receipt.items)
        && total_matches_items(&receipt.total_amount, &receipt.items)
}

pub fn validate(receipt: &Receipt) -> Result<(), ValidationFailed> {
    if is_valid(receipt) {
        Ok(())
    } else {
        Err(ValidationFailed)
    }
}

// `\w` and `\s` are ASCII-only here; unicode letters are not accepted in names.
fn retailer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?-u)^[\w\s&-]+$").expect("retailer pattern is valid"))
}

fn description_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?-u)^[\w\s-]+$").expect("description pattern is valid"))
}

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern is valid"))
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
    })
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(2[0-3]|[01][0-9]):([0-5][0-9])$").expect("time pattern is valid")
    })
}

fn valid_retailer(name: &str) -> bool {
    !name.is_empty() && retailer_pattern().is_match(name)
}

fn valid_date(raw: &str) -> bool {
    raw.len() == DATE_LEN
        && date_pattern().is_match(raw)
        && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

fn valid_time(raw: &str) -> bool {
    raw.len() == TIME_LEN && time_pattern().is_match(raw)
}

fn valid_amount(raw: &str) -> bool {
    !raw.is_empty() && amount_pattern().is_match(raw) && raw.parse::<Cents>().is_ok()
}

fn valid_description(description: &str) -> bool {
    !description.is_empty() && description_pattern().is_match(description)
}

fn valid_items(items: &[ReceiptItem]) -> bool {
    !items.is_empty()
        && items
            .iter()
            .all(|item| valid_description(&item.short_description) && valid_amount(&item.price))
}

/// Compares whole cents, which is exactly `floor(x * 100) / 100` on two-decimal amounts.
fn total_matches_items(total: &str, items: &[ReceiptItem]) -> bool {
    let Ok(total) = total.parse::<Cents>() else {
        return false;
    };

    let sum = items.iter().try_fold(Cents::default(), |sum, item| {
        item.price
            .parse::<Cents>()
            .ok()
            .and_then(|price| sum.checked_add(price))
    });

    !items.is_empty() && sum == Some(total)
}
