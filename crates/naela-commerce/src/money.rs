//! Rupiah amounts, price-text parsing and display formatting.
//!
//! Prices on the catalog are free text ("Rp 45K", "Rp 120.000"). Parsing is a
//! lossy normalization, not a locale-aware money parser: anything that is not a
//! digit or the thousand shorthand `K` is dropped.
//!
//! Formatting is not an exact inverse of parsing. Round thousands below one
//! million render in shorthand (`45K`); everything else renders with `.`
//! digit grouping (`1.500.000`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Multiplier applied by the `K` shorthand suffix.
pub const SHORTHAND_MULTIPLIER: u64 = 1_000;

/// Amounts at or above this value never render in shorthand.
pub const SHORTHAND_CEILING: u64 = 1_000_000;

/// A non-negative amount of Rupiah.
///
/// Arithmetic saturates at `u64::MAX` instead of overflowing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Rupiah(u64);

impl Rupiah {
    pub const ZERO: Rupiah = Rupiah(0);

    /// Create an amount from whole Rupiah.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Whole Rupiah.
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl From<u64> for Rupiah {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Add for Rupiah {
    type Output = Rupiah;

    fn add(self, other: Rupiah) -> Rupiah {
        Rupiah(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Rupiah {
    type Output = Rupiah;

    fn mul(self, quantity: u32) -> Rupiah {
        self.times(quantity)
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Rupiah {
        iter.fold(Rupiah::ZERO, |acc, amount| acc + amount)
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(*self))
    }
}

/// Parse a human-readable price into whole Rupiah.
///
/// The text is uppercased and reduced to ASCII digits and `K`. When the reduced
/// text ends in `K`, the leading digits are the coefficient and the result is
/// `coefficient * 1000`. Otherwise every `K` is discarded and the digits are
/// read as-is. Empty or digit-free input yields zero.
///
/// ```
/// use naela_commerce::money::{parse_price, Rupiah};
/// assert_eq!(parse_price("Rp 45K"), Rupiah::new(45_000));
/// assert_eq!(parse_price("Rp 120.000"), Rupiah::new(120_000));
/// assert_eq!(parse_price(""), Rupiah::ZERO);
/// ```
pub fn parse_price(text: &str) -> Rupiah {
    let reduced: String = text
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_digit() || *c == 'K')
        .collect();

    if reduced.ends_with('K') {
        let coefficient = read_digits(reduced.chars().take_while(char::is_ascii_digit));
        return Rupiah(coefficient.saturating_mul(SHORTHAND_MULTIPLIER));
    }

    Rupiah(read_digits(reduced.chars().filter(char::is_ascii_digit)))
}

/// Format an amount for display.
///
/// ```
/// use naela_commerce::money::{format_currency, Rupiah};
/// assert_eq!(format_currency(Rupiah::new(45_000)), "45K");
/// assert_eq!(format_currency(Rupiah::new(1_500_000)), "1.500.000");
/// assert_eq!(format_currency(Rupiah::ZERO), "0");
/// ```
pub fn format_currency(amount: Rupiah) -> String {
    let n = amount.0;
    if n == 0 {
        return "0".to_string();
    }
    if n % SHORTHAND_MULTIPLIER == 0 && n < SHORTHAND_CEILING {
        return format!("{}K", n / SHORTHAND_MULTIPLIER);
    }
    group_digits(n)
}

/// Render with `.` every three digits (Indonesian grouping).
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

fn read_digits(chars: impl Iterator<Item = char>) -> u64 {
    chars
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse_price("45K").amount(), 45_000);
        assert_eq!(parse_price("Rp 45k").amount(), 45_000);
        assert_eq!(parse_price("  Rp 250 K ").amount(), 250_000);
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(parse_price("Rp 120.000").amount(), 120_000);
        assert_eq!(parse_price("Rp 1.250.000,-").amount(), 1_250_000);
        assert_eq!(parse_price("IDR 75,000").amount(), 75_000);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_price(""), Rupiah::ZERO);
        assert_eq!(parse_price("gratis"), Rupiah::ZERO);
        assert_eq!(parse_price("K"), Rupiah::ZERO);
    }

    #[test]
    fn test_parse_shorthand_only_at_end() {
        // A K in the middle is discarded, not treated as a multiplier.
        assert_eq!(parse_price("45K0").amount(), 450);
        // Only the leading digits count as coefficient.
        assert_eq!(parse_price("1K2K").amount(), 1_000);
    }

    #[test]
    fn test_parse_saturates() {
        let huge = "9".repeat(40);
        assert_eq!(parse_price(&huge).amount(), u64::MAX);
        assert_eq!(parse_price(&format!("{}K", huge)).amount(), u64::MAX);
    }

    #[test]
    fn test_format_shorthand() {
        assert_eq!(format_currency(Rupiah::new(45_000)), "45K");
        assert_eq!(format_currency(Rupiah::new(1_000)), "1K");
        assert_eq!(format_currency(Rupiah::new(999_000)), "999K");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_currency(Rupiah::new(1_000_000)), "1.000.000");
        assert_eq!(format_currency(Rupiah::new(1_500_000)), "1.500.000");
        assert_eq!(format_currency(Rupiah::new(45_500)), "45.500");
        assert_eq!(format_currency(Rupiah::new(999)), "999");
        assert_eq!(format_currency(Rupiah::new(12_345_678)), "12.345.678");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_currency(Rupiah::ZERO), "0");
        assert_eq!(Rupiah::ZERO.to_string(), "0");
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Rupiah::new(u64::MAX);
        assert_eq!((max + Rupiah::new(1)).amount(), u64::MAX);
        assert_eq!((max * 2).amount(), u64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Rupiah = [Rupiah::new(20_000), Rupiah::new(5_000)].into_iter().sum();
        assert_eq!(total, Rupiah::new(25_000));
    }
}
