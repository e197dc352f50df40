//! Cart, pricing and checkout handoff logic for the Naela storefront.
//!
//! This crate is the core behind the catalog page:
//!
//! - **Money**: price-text parsing and Rupiah display formatting
//! - **Cart**: the in-memory cart store and its display projection
//! - **Checkout**: form validation, order message composition, messaging handoff
//! - **Storefront**: the command dispatcher that page bindings feed UI events into
//!
//! # Example
//!
//! ```rust
//! use naela_commerce::prelude::*;
//!
//! let mut store = Storefront::new(
//!     StorefrontConfig::default(),
//!     RecordingSink::new(),
//!     RecordingChannel::new(),
//! );
//!
//! store.dispatch(CatalogCard::new("Batik Tulis", "Rp 45K").with_quantity("2").into_command());
//! assert_eq!(store.view().total(), "90K");
//!
//! for (field, value) in [
//!     (FormField::Name, "Siti"),
//!     (FormField::Phone, "081234567890"),
//!     (FormField::Address, "Jl. Malioboro 12"),
//!     (FormField::City, "Yogyakarta"),
//! ] {
//!     store.dispatch(Command::FillForm { field, value: value.to_string() });
//! }
//!
//! let outcome = store.dispatch(Command::SubmitCheckout);
//! assert!(matches!(outcome, Outcome::Submitted { .. }));
//! assert!(store.cart().is_empty());
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod notify;
pub mod storefront;

pub use error::{CommerceError, RequiredField};
pub use money::{format_currency, parse_price, Rupiah};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, RequiredField};
    pub use crate::money::{format_currency, parse_price, Rupiah};

    // Cart
    pub use crate::cart::{render, Cart, CartBody, CartRow, CartStore, CartView, LineItem};

    // Checkout
    pub use crate::checkout::{
        compose, CheckoutForm, CheckoutMessage, CustomerInfo, FormField, HandoffLink,
        MessagingChannel, PaymentMethod, RecordingChannel,
    };

    // Storefront
    pub use crate::catalog::CatalogCard;
    pub use crate::config::StorefrontConfig;
    pub use crate::notify::{Notification, NotificationSink, RecordingSink};
    pub use crate::storefront::{Command, Outcome, RejectReason, Storefront};
}
