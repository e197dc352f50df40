//! Transient shopper notifications.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RequiredField;

/// A short message shown to the shopper after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    ItemAdded { title: String },
    ItemRemoved { title: String },
    /// Checkout opened or submitted with nothing in the cart.
    CartEmpty,
    /// Checkout submitted with required fields left blank.
    MissingFields { fields: Vec<RequiredField> },
    OrderSent,
    NewsletterSubscribed,
}

impl Notification {
    /// Whether this reports a rejected action.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Notification::CartEmpty | Notification::MissingFields { .. })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::ItemAdded { title } => write!(f, "✓ {} ditambahkan!", title),
            Notification::ItemRemoved { title } => write!(f, "🗑️ {} dihapus", title),
            Notification::CartEmpty => f.write_str("❌ Keranjang masih kosong!"),
            Notification::MissingFields { .. } => {
                f.write_str("❌ Mohon lengkapi data yang wajib diisi!")
            }
            Notification::OrderSent => f.write_str("✓ Pesanan dikirim ke WhatsApp!"),
            Notification::NewsletterSubscribed => {
                f.write_str("✓ Terima kasih! Email Anda telah terdaftar.")
            }
        }
    }
}

/// Destination for notifications. One-way: sinks display and forget.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Sink that keeps every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Drain recorded notifications.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl<N: NotificationSink + ?Sized> NotificationSink for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}
