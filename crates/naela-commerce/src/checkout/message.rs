//! Order message composition.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::cart::CartStore;
use crate::checkout::CustomerInfo;
use crate::config::ShopConfig;
use crate::error::CommerceError;
use crate::money::format_currency;

/// The formatted order text sent to the shop.
///
/// Built once at submission time and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckoutMessage {
    text: String,
}

impl CheckoutMessage {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl fmt::Display for CheckoutMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CheckoutMessage {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Compose the order message for a cart and a validated customer.
///
/// Fails with [`CommerceError::EmptyCart`] before composing anything when the
/// cart has no entries. Bold markers (`*...*`) follow WhatsApp formatting.
pub fn compose<S: CartStore + ?Sized>(
    store: &S,
    customer: &CustomerInfo,
    shop: &ShopConfig,
) -> Result<CheckoutMessage, CommerceError> {
    if store.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let text = OrderLayout {
        store,
        customer,
        shop,
    }
    .to_string();

    debug!(
        lines = store.len(),
        bytes = text.len(),
        "composed checkout message"
    );
    Ok(CheckoutMessage { text })
}

/// Borrowed view of everything the order text is laid out from.
struct OrderLayout<'a, S: ?Sized> {
    store: &'a S,
    customer: &'a CustomerInfo,
    shop: &'a ShopConfig,
}

impl<S: CartStore + ?Sized> fmt::Display for OrderLayout<'_, S> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let OrderLayout {
            store,
            customer,
            shop,
        } = self;

        writeln!(out, "*PESANAN BARU - {}*", shop.name.to_uppercase())?;
        writeln!(out)?;

        writeln!(out, "*Data Pembeli:*")?;
        writeln!(out, "Nama: {}", customer.name)?;
        writeln!(out, "WhatsApp: {}", customer.phone)?;
        if let Some(ref email) = customer.email {
            writeln!(out, "Email: {}", email)?;
        }
        writeln!(out, "Alamat: {}", customer.address)?;
        writeln!(out, "Kota: {}", customer.city)?;
        if let Some(ref postal) = customer.postal_code {
            writeln!(out, "Kode Pos: {}", postal)?;
        }

        writeln!(out)?;
        writeln!(out, "*Detail Pesanan:*")?;
        for (idx, item) in store.items().iter().enumerate() {
            writeln!(out, "{}. {}", idx + 1, item.title)?;
            writeln!(
                out,
                "   {} × {} = {}",
                item.quantity,
                format_currency(item.unit_price),
                format_currency(item.line_total())
            )?;
        }

        writeln!(out)?;
        writeln!(out, "*Total: {}*", format_currency(store.total_value()))?;
        writeln!(out)?;
        writeln!(out, "*Metode: {}*", customer.payment.label())?;

        if let Some(ref notes) = customer.notes {
            writeln!(out)?;
            writeln!(out, "*Catatan:*")?;
            write!(out, "{}", notes)?;
        }

        Ok(())
    }
}
