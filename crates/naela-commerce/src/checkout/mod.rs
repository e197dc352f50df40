//! Checkout module.
//!
//! Contains the checkout form, order message composition and the messaging
//! handoff.

mod customer;
mod handoff;
mod message;

pub use customer::{CheckoutForm, CustomerInfo, FormField, PaymentMethod};
pub use handoff::{HandoffLink, MessagingChannel, RecordingChannel};
pub use message::{compose, CheckoutMessage};
