//! Dish records and their identifiers.

use super::course::Course;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Largest price a dish may carry. Keeps course totals finite.
pub const MAX_PRICE: f64 = 1_000_000_000.0;

/// Artwork shown for dishes added through the admin form.
pub const PLACEHOLDER_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/3075/3075715.png";

/// Opaque, immutable dish identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(String);

impl DishId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id for a user-added dish.
    ///
    /// Random v4 uuids stay unique even when several dishes are added
    /// within the same clock tick.
    pub fn generate() -> Self {
        Self(format!("custom-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DishRecord {
    pub id: DishId,
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    /// Price exactly as entered (trimmed), e.g. `"129"` or `"49.50"`.
    pub price: String,
    pub image: String,
}

impl DishRecord {
    /// Numeric price, if the stored string is a finite number.
    pub fn price_value(&self) -> Option<f64> {
        parse_price(&self.price)
    }
}

/// Parse a price string into a finite number.
///
/// Reads the leading number and ignores whatever follows it, so `"12abc"`
/// is 12 and `"49.50 each"` is 49.5. Surrounding whitespace is ignored.
/// Strings that don't start with a number, and `NaN`/infinities, give `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    raw[..numeric_prefix_len(raw)]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Byte length of the decimal number at the start of `s`:
/// optional sign, digits with an optional fraction, optional exponent.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    end
}
