//! # Pricing Module
//!
//! The single pricing rule of the system and the numeric fallbacks that
//! keep it total.
//!
//! ## The Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  derived total = price per base unit × base units per package           │
//! │                                                                         │
//! │  Rice: 6 per kg × 40 kg per sack = 240 per sack                         │
//! │                                                                         │
//! │  Applied in exactly two places:                                         │
//! │    CatalogEntry::sub_price()   (always recomputed, never stored)        │
//! │    LineItem::recompute()       (after every capacity / price edit)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64?
//! Prices here are typed by hand per kilogram and conversion factors may be
//! fractional (12.5 kg cartons). The sheet shows exactly `price × factor`,
//! so no rounding policy is applied inside the core; [`format_amount`]
//! rounds for display only.

/// Coerces an amount into the domain of the pricing rule.
///
/// NaN, infinities and negative values all become `0.0`.
///
/// ## Example
/// ```rust
/// use pricelist_core::pricing::coerce_amount;
///
/// assert_eq!(coerce_amount(6.0), 6.0);
/// assert_eq!(coerce_amount(-3.0), 0.0);
/// assert_eq!(coerce_amount(f64::NAN), 0.0);
/// ```
#[inline]
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Computes the package price from a base-unit price and a conversion factor.
///
/// Both operands are coerced first, so the result is always a finite,
/// non-negative number. A zero factor is allowed and yields zero.
///
/// ## Example
/// ```rust
/// use pricelist_core::pricing::derived_total;
///
/// assert_eq!(derived_total(6.0, 40.0), 240.0);
/// assert_eq!(derived_total(6.0, 0.0), 0.0);
/// ```
#[inline]
pub fn derived_total(base_price: f64, conversion_factor: f64) -> f64 {
    coerce_amount(base_price) * coerce_amount(conversion_factor)
}

/// Parses a numeric form field.
///
/// Reads the leading decimal number of the trimmed input, exponent included,
/// the way a browser number field hands text to the editor: `"40kg"` reads
/// as `40` and `"1e3"` as `1000`. Anything
/// without a leading number, and any negative result, reads as `0`.
///
/// ## Example
/// ```rust
/// use pricelist_core::pricing::parse_amount;
///
/// assert_eq!(parse_amount(" 12.5 "), 12.5);
/// assert_eq!(parse_amount("40kg"), 40.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// assert_eq!(parse_amount(""), 0.0);
/// ```
pub fn parse_amount(input: &str) -> f64 {
    let text = input.trim();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it ("1e3", not "1e").
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits = bytes[exp_end..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp_end + digits;
        }
    }

    // A trailing dot ("12.") is accepted by f64's parser.
    text[..end].parse::<f64>().map(coerce_amount).unwrap_or(0.0)
}

/// Formats an amount for print: thousands grouping, at most two decimals,
/// trailing zeros dropped.
///
/// ## Example
/// ```rust
/// use pricelist_core::pricing::format_amount;
///
/// assert_eq!(format_amount(1240.0), "1,240");
/// assert_eq!(format_amount(12.5), "12.5");
/// assert_eq!(format_amount(1234567.891), "1,234,567.89");
/// ```
pub fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let negative = value < 0.0;

    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && (whole != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
