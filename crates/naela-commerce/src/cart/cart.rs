//! Cart and line item types.

use crate::money::{parse_price, Rupiah};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Read and write access to the shopping cart.
///
/// UI bindings and the checkout composer depend on this contract rather than
/// on [`Cart`] directly. Totals are provided here once so every consumer
/// computes them the same way.
pub trait CartStore {
    /// Add an item from raw catalog text.
    ///
    /// The price is parsed with [`parse_price`] and the quantity normalized with
    /// [`normalize_quantity`]. An existing entry with the same title and parsed
    /// price absorbs the quantity; otherwise a new entry is appended.
    /// Returns the position of the affected entry.
    fn add_item(&mut self, image_ref: &str, title: &str, raw_price: &str, raw_qty: &str) -> usize;

    /// Remove the entry at a 0-based position. Out of range is a no-op.
    fn remove_item(&mut self, position: usize) -> Option<LineItem>;

    /// Empty the cart.
    fn clear(&mut self);

    /// Entries in display order.
    fn items(&self) -> &[LineItem];

    /// Remove using a raw position attribute (e.g. `data-id="2"`).
    ///
    /// Non-numeric or negative positions are a no-op.
    fn remove_raw(&mut self, raw_position: &str) -> Option<LineItem> {
        let position = parse_position(raw_position)?;
        self.remove_item(position)
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Number of distinct entries.
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Sum of quantities across entries (cart badge count).
    fn total_quantity(&self) -> u64 {
        self.items().iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` across entries.
    fn total_value(&self) -> Rupiah {
        self.items().iter().map(LineItem::line_total).sum()
    }
}

/// The in-memory shopping cart for one page session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry by its identity key.
    pub fn find(&self, title: &str, unit_price: Rupiah) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(title, unit_price))
    }

    /// Debug dump of the cart contents.
    pub fn debug_summary(&self) -> String {
        format!(
            "{} entries, {} units, total {}",
            self.len(),
            self.total_quantity(),
            self.total_value()
        )
    }
}

impl CartStore for Cart {
    fn add_item(&mut self, image_ref: &str, title: &str, raw_price: &str, raw_qty: &str) -> usize {
        let unit_price = parse_price(raw_price);
        let quantity = normalize_quantity(raw_qty);

        if let Some(position) = self.items.iter().position(|i| i.matches(title, unit_price)) {
            let existing = &mut self.items[position];
            existing.quantity = existing.quantity.saturating_add(quantity);
            debug!(
                title,
                unit_price = unit_price.amount(),
                quantity = existing.quantity,
                "merged into existing line item"
            );
            return position;
        }

        self.items.push(LineItem {
            image_ref: image_ref.to_string(),
            title: title.to_string(),
            unit_price,
            quantity,
        });
        debug!(title, unit_price = unit_price.amount(), quantity, "appended line item");
        self.items.len() - 1
    }

    fn remove_item(&mut self, position: usize) -> Option<LineItem> {
        if position >= self.items.len() {
            debug!(position, len = self.items.len(), "remove ignored, position out of range");
            return None;
        }
        let removed = self.items.remove(position);
        debug!(position, title = %removed.title, "removed line item");
        Some(removed)
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn items(&self) -> &[LineItem] {
        &self.items
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product image reference (URL or path).
    pub image_ref: String,
    /// Product title as shown on the catalog card.
    pub title: String,
    /// Parsed unit price.
    pub unit_price: Rupiah,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// `unit_price * quantity`.
    pub fn line_total(&self) -> Rupiah {
        self.unit_price * self.quantity
    }

    /// Whether this entry has the identity key `(title, unit_price)`.
    pub fn matches(&self, title: &str, unit_price: Rupiah) -> bool {
        self.title == title && self.unit_price == unit_price
    }
}

/// Normalize raw quantity input to an integer of at least 1.
///
/// Reads the leading integer (optional whitespace and sign, then digits) and
/// ignores the rest, so `"2.7"` is 2. Missing, non-numeric, zero or negative
/// input becomes 1. Values past `u32::MAX` saturate.
pub fn normalize_quantity(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Parse a raw 0-based position. Non-numeric or negative input is `None`.
pub fn parse_position(raw: &str) -> Option<usize> {
    let n = parse_leading_int(raw)?;
    usize::try_from(n).ok()
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let run: &str = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    if run.is_empty() {
        return None;
    }
    let magnitude = run
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}
