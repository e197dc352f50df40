//! Shopping cart module.
//!
//! Contains the cart store, line items and display projections.

mod cart;
mod view;

pub use cart::{normalize_quantity, parse_position, Cart, CartStore, LineItem};
pub use view::{render, CartBody, CartRow, CartView, CheckoutSummary, EMPTY_CART_TEXT};
