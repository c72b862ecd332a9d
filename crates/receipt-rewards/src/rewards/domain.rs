use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purchase record as submitted by a client. Field values are kept verbatim; the validator
/// decides whether they are well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(rename = "retailer")]
    pub retailer_name: String,
    pub purchase_date: String,
    pub purchase_time: String,
    #[serde(rename = "total")]
    pub total_amount: String,
    pub items: Vec<ReceiptItem>,
}

/// Single purchased line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub short_description: String,
    pub price: String,
}

impl ReceiptItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

const HYPHENATED_LEN: usize = 36;

/// Identifier assigned to a receipt when it is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accepts only the hyphenated 8-4-4-4-12 rendering; `Uuid::try_parse` alone would also
    /// take the simple, braced and urn forms.
    pub fn parse(raw: &str) -> Result<Self, InvalidReceiptId> {
        if raw.len() != HYPHENATED_LEN {
            return Err(InvalidReceiptId(raw.to_string()));
        }
        Uuid::try_parse(raw)
            .map(Self)
            .map_err(|_| InvalidReceiptId(raw.to_string()))
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.as_hyphenated(), f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a receipt identifier")]
pub struct InvalidReceiptId(pub String);

/// Whole number of cents. Money strings are converted once so that sums and divisibility
/// checks never touch floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(u64);

impl Cents {
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub const fn is_whole_dollar(self) -> bool {
        self.0 % 100 == 0
    }

    pub const fn is_multiple_of(self, cents: u64) -> bool {
        self.0 % cents == 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a dollar amount")]
pub struct ParseCentsError(pub String);

impl FromStr for Cents {
    type Err = ParseCentsError;

    /// Parses `123`, `123.4` or `123.45`. Anything else, including a third fractional digit,
    /// is rejected rather than rounded.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let error = || ParseCentsError(raw.to_string());
        let (dollars, fraction) = match raw.split_once('.') {
            Some((dollars, fraction)) => (dollars, fraction),
            None => (raw, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if dollars.is_empty() || !all_digits(dollars) || !all_digits(fraction) {
            return Err(error());
        }
        if fraction.len() > 2 || (raw.contains('.') && fraction.is_empty()) {
            return Err(error());
        }

        let dollars: u64 = dollars.parse().map_err(|_| error())?;
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| error())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| error())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Self)
            .ok_or_else(error)
    }
}

/// A receipt together with its assigned identifier and the points it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    id: ReceiptId,
    receipt: Receipt,
    points: u32,
}

impl ScoredReceipt {
    pub fn new(id: ReceiptId, receipt: Receipt, points: u32) -> Self {
        Self {
            id,
            receipt,
            points,
        }
    }

    pub fn id(&self) -> ReceiptId {
        self.id
    }

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}
