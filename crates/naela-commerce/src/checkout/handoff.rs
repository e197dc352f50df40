//! Handing the order message off to the messaging service.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::checkout::CheckoutMessage;
use crate::config::MessagingConfig;

/// A deep link that opens a chat with the shop, pre-filled with the order.
///
/// Shape: `<base_url>/<recipient>?text=<percent-encoded message>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandoffLink(String);

impl HandoffLink {
    /// Build the link for a composed message.
    pub fn new(messaging: &MessagingConfig, message: &CheckoutMessage) -> Self {
        Self(format!(
            "{}/{}?text={}",
            messaging.base_url.trim_end_matches('/'),
            messaging.recipient,
            urlencoding::encode(message.as_str())
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The percent-encoded `text` parameter.
    pub fn encoded_text(&self) -> &str {
        self.0
            .split_once("?text=")
            .map(|(_, text)| text)
            .unwrap_or_default()
    }
}

impl fmt::Display for HandoffLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HandoffLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outbound channel that receives handoff links.
///
/// Fire-and-forget: implementations open or forward the link and return.
/// Delivery is not confirmed.
pub trait MessagingChannel {
    fn hand_off(&mut self, link: &HandoffLink);
}

/// Channel that keeps every link it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingChannel {
    links: Vec<HandoffLink>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links in handoff order.
    pub fn links(&self) -> &[HandoffLink] {
        &self.links
    }

    pub fn last(&self) -> Option<&HandoffLink> {
        self.links.last()
    }
}

impl MessagingChannel for RecordingChannel {
    fn hand_off(&mut self, link: &HandoffLink) {
        self.links.push(link.clone());
    }
}

impl<M: MessagingChannel + ?Sized> MessagingChannel for &mut M {
    fn hand_off(&mut self, link: &HandoffLink) {
        (**self).hand_off(link);
    }
}
