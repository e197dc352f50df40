//! Catalog card input.
//!
//! The page binding reads these fields from a product or menu card and turns
//! them into an add-to-cart command. Every field is optional because the
//! card markup is not guaranteed.

use serde::{Deserialize, Serialize};

use crate::storefront::Command;

const DEFAULT_TITLE: &str = "Produk";
const DEFAULT_PRICE: &str = "0";
const DEFAULT_QUANTITY: &str = "1";

/// Values scraped from one catalog card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogCard {
    /// Image source.
    #[serde(default)]
    pub image_ref: Option<String>,
    /// Title text node.
    #[serde(default)]
    pub title: Option<String>,
    /// Price text node, which may include a struck-through old price.
    #[serde(default)]
    pub price_text: Option<String>,
    /// Struck-through old price nested inside the price node.
    #[serde(default)]
    pub old_price_text: Option<String>,
    /// Quantity input value.
    #[serde(default)]
    pub quantity: Option<String>,
}

impl CatalogCard {
    /// Card with title and price only.
    pub fn new(title: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            price_text: Some(price_text.into()),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn with_old_price(mut self, old_price_text: impl Into<String>) -> Self {
        self.old_price_text = Some(old_price_text.into());
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Title with surrounding whitespace removed, or the generic fallback.
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    /// Current price text with the old price removed.
    ///
    /// The price node's text contains both prices when a discount is shown
    /// (`"Rp 45K Rp 60K"`); parsing it whole would merge the digits.
    pub fn current_price_text(&self) -> String {
        let price = self.price_text.as_deref().unwrap_or(DEFAULT_PRICE);
        match self.old_price_text.as_deref().map(str::trim) {
            Some(old) if !old.is_empty() => price.replacen(old, "", 1).trim().to_string(),
            _ => price.to_string(),
        }
    }

    /// Convert into an add-to-cart command.
    pub fn into_command(self) -> Command {
        Command::AddItem {
            title: self.title().to_string(),
            price_text: self.current_price_text(),
            image_ref: self.image_ref.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_else(|| DEFAULT_QUANTITY.to_string()),
        }
    }
}
