//! Compose command: replay an order file through the storefront.

use anyhow::{bail, Context as _, Result};
use naela_commerce::prelude::*;
use serde::{Deserialize, Serialize};

use super::ComposeArgs;
use crate::context::Context;

/// Order file contents.
#[derive(Debug, Default, Deserialize)]
pub struct OrderFile {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub customer: CheckoutForm,
}

/// One `[[items]]` entry, read like a catalog card.
#[derive(Debug, Deserialize)]
pub struct OrderItem {
    pub title: Option<String>,
    pub price: Option<Scalar>,
    pub old_price: Option<Scalar>,
    pub quantity: Option<Scalar>,
    pub image: Option<String>,
}

/// Numbers and strings are both accepted where the card holds text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

impl OrderItem {
    fn into_card(self) -> CatalogCard {
        CatalogCard {
            image_ref: self.image,
            title: self.title,
            price_text: self.price.map(Scalar::into_text),
            old_price_text: self.old_price.map(Scalar::into_text),
            quantity: self.quantity.map(Scalar::into_text),
        }
    }
}

impl OrderFile {
    /// Parse an order file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse order file")
    }

    /// Commands that add every item, fill the form and submit.
    pub fn commands(self) -> Vec<Command> {
        let mut commands: Vec<Command> = self
            .items
            .into_iter()
            .map(|item| item.into_card().into_command())
            .collect();

        for field in FormField::ALL {
            let value = self.customer.get(field);
            if !value.is_empty() {
                commands.push(Command::FillForm {
                    field,
                    value: value.to_string(),
                });
            }
        }
        if let Some(method) = self.customer.payment {
            commands.push(Command::SelectPayment { method });
        }
        commands.push(Command::SubmitCheckout);
        commands
    }
}

#[derive(Serialize)]
struct ComposeReport<'a> {
    message: &'a str,
    link: &'a str,
    notifications: &'a [Notification],
}

/// Run the compose command.
pub fn run(args: ComposeArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.order);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read order file: {}", path.display()))?;
    let order = OrderFile::from_toml_str(&content)?;
    ctx.output.debug(&format!(
        "loaded {} item(s) from {}",
        order.items.len(),
        path.display()
    ));

    let mut config = ctx.config.storefront.clone();
    if let Some(recipient) = args.recipient {
        config.messaging.recipient = recipient;
    }

    let mut store = Storefront::new(config, RecordingSink::new(), RecordingChannel::new());
    let outcome = store
        .dispatch_all(order.commands())
        .pop()
        .unwrap_or(Outcome::Ignored);

    let (message, link) = match outcome {
        Outcome::Submitted { message, link } => (message, link),
        Outcome::Rejected(_) => {
            let reason = store
                .notifier()
                .last()
                .map(ToString::to_string)
                .unwrap_or_else(|| "checkout rejected".to_string());
            bail!("{}", reason);
        }
        other => bail!("checkout did not complete: {:?}", other),
    };

    if ctx.output.is_json() {
        ctx.output.json(&ComposeReport {
            message: message.as_str(),
            link: link.as_str(),
            notifications: store.notifier().notifications(),
        });
        return Ok(());
    }

    ctx.output.header("Order message");
    ctx.output.block(message.as_str());
    ctx.output.header("Link");
    ctx.output.kv("open", link.as_str());
    ctx.output.success("Order composed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: &str = r#"
        [[items]]
        title = "Batik Tulis"
        price = "Rp 45K"
        quantity = 2

        [[items]]
        title = "Batik Cap"
        price = 35000
        old_price = "Rp 50K"

        [customer]
        name = "Siti Aminah"
        phone = "081234567890"
        address = "Jl. Malioboro 12"
        city = "Yogyakarta"
        payment = "cod"
    "#;

    #[test]
    fn test_parse_order() {
        let order = OrderFile::from_toml_str(ORDER).unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.customer.city, "Yogyakarta");
        assert_eq!(order.customer.payment, Some(PaymentMethod::CashOnDelivery));
    }

    #[test]
    fn test_order_commands() {
        let commands = OrderFile::from_toml_str(ORDER).unwrap().commands();

        assert_eq!(
            commands[0],
            Command::AddItem {
                image_ref: String::new(),
                title: "Batik Tulis".to_string(),
                price_text: "Rp 45K".to_string(),
                quantity: "2".to_string(),
            }
        );
        assert!(matches!(
            &commands[1],
            Command::AddItem { price_text, quantity, .. } if price_text == "35000" && quantity == "1"
        ));
        assert_eq!(commands.last(), Some(&Command::SubmitCheckout));
        assert!(commands.contains(&Command::SelectPayment {
            method: PaymentMethod::CashOnDelivery
        }));
    }

    #[test]
    fn test_order_submits() {
        let commands = OrderFile::from_toml_str(ORDER).unwrap().commands();
        let mut store = Storefront::new(
            StorefrontConfig::default(),
            RecordingSink::new(),
            RecordingChannel::new(),
        );

        let outcome = store.dispatch_all(commands).pop().unwrap();
        let Outcome::Submitted { message, .. } = outcome else {
            panic!("expected submit, got {:?}", outcome);
        };
        assert!(message.as_str().contains("*Total: 125K*"));
        assert!(message.as_str().contains("*Metode: COD*"));
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let commands = OrderFile::from_toml_str("").unwrap().commands();
        let mut store = Storefront::new(
            StorefrontConfig::default(),
            RecordingSink::new(),
            RecordingChannel::new(),
        );

        let outcome = store.dispatch_all(commands).pop().unwrap();
        assert_eq!(outcome, Outcome::Rejected(RejectReason::EmptyCart));
    }
}
