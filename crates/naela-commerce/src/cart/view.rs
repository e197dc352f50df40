//! Display projections of the cart.

use crate::cart::CartStore;
use crate::money::format_currency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown in place of rows when the cart has no entries.
pub const EMPTY_CART_TEXT: &str = "Keranjang kosong.";

/// Display-ready state of the cart panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartView {
    /// Total quantity, shown on the cart button badge.
    pub badge_count: u64,
    /// Panel contents.
    pub body: CartBody,
}

/// Cart panel contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartBody {
    /// Nothing in the cart.
    Empty,
    /// One row per line item plus the formatted grand total.
    Filled { rows: Vec<CartRow>, total: String },
}

/// One rendered line item. Amounts are already formatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartRow {
    /// Position in the cart, used as the remove handle.
    pub position: usize,
    pub title: String,
    pub image_ref: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, CartBody::Empty)
    }

    /// Rendered rows; empty for the empty marker.
    pub fn rows(&self) -> &[CartRow] {
        match &self.body {
            CartBody::Empty => &[],
            CartBody::Filled { rows, .. } => rows,
        }
    }

    /// Formatted grand total, `"0"` when empty.
    pub fn total(&self) -> &str {
        match &self.body {
            CartBody::Empty => "0",
            CartBody::Filled { total, .. } => total,
        }
    }
}

/// Project cart state into a [`CartView`].
///
/// Pure: reads the store and nothing else. Callers re-render after every
/// mutation.
pub fn render<S: CartStore + ?Sized>(store: &S) -> CartView {
    let badge_count = store.total_quantity();

    if store.is_empty() {
        return CartView {
            badge_count,
            body: CartBody::Empty,
        };
    }

    let rows = store
        .items()
        .iter()
        .enumerate()
        .map(|(position, item)| CartRow {
            position,
            title: item.title.clone(),
            image_ref: item.image_ref.clone(),
            unit_price: format_currency(item.unit_price),
            quantity: item.quantity,
            line_total: format_currency(item.line_total()),
        })
        .collect();

    CartView {
        badge_count,
        body: CartBody::Filled {
            rows,
            total: format_currency(store.total_value()),
        },
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            CartBody::Empty => writeln!(f, "{}", EMPTY_CART_TEXT),
            CartBody::Filled { rows, total } => {
                for row in rows {
                    writeln!(f, "[{}] {}", row.position, row.title)?;
                    writeln!(
                        f,
                        "    {} × {} = {}",
                        row.unit_price, row.quantity, row.line_total
                    )?;
                }
                writeln!(f, "Total  {}", total)
            }
        }
    }
}

/// Order summary shown when the checkout form opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub rows: Vec<CartRow>,
    pub total: String,
}

impl CheckoutSummary {
    /// Build from a rendered, non-empty cart view. Returns `None` for the
    /// empty marker.
    pub fn from_view(view: &CartView) -> Option<Self> {
        match &view.body {
            CartBody::Empty => None,
            CartBody::Filled { rows, total } => Some(Self {
                rows: rows.clone(),
                total: total.clone(),
            }),
        }
    }
}

impl fmt::Display for CheckoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.title)?;
            writeln!(
                f,
                "    {} × {}    {}",
                row.quantity, row.unit_price, row.line_total
            )?;
        }
        writeln!(f, "Total  {}", self.total)
    }
}
