/// Position of an entry in the order the page rendered it.
pub type EntryId = usize;

/// A rendered catalog item as seen by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: String,
    pub price: u64,
}

impl CatalogEntry {
    pub fn new(category: impl Into<String>, price: u64) -> Self {
        Self {
            category: category.into(),
            price,
        }
    }

    /// Build an entry from the raw `data-category` / `data-price` attributes.
    pub fn from_attributes(category: Option<&str>, price: Option<&str>) -> Self {
        Self {
            category: parse_category(category),
            price: parse_price(price),
        }
    }
}

/// Parse the leading base-10 integer of `raw`.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit. `"1500.99"` yields 1500 and `"12abc"` yields 12. Returns
/// `None` when no digit follows the optional sign. Values beyond `i64`
/// saturate.
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.chars().next() {
        Some('-') => (true, &trimmed[1..]),
        Some('+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }

    Some(if negative { -value } else { value })
}

/// Entry price from its raw attribute. Missing, unparseable and negative
/// prices count as 0.
pub fn parse_price(raw: Option<&str>) -> u64 {
    raw.and_then(parse_leading_integer)
        .map(|value| value.max(0) as u64)
        .unwrap_or(0)
}

/// Entry category from its raw attribute. Missing categories become `""`.
pub fn parse_category(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}
