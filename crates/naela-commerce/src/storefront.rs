//! Command dispatcher for storefront UI events.
//!
//! Page bindings translate clicks and submits into [`Command`] values and feed
//! them to [`Storefront::dispatch`]. Each command runs to completion, including
//! the re-render and the notification, before `dispatch` returns. The cart is
//! only ever mutated here.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cart::{render, Cart, CartStore, CartView, CheckoutSummary, LineItem};
use crate::checkout::{
    compose, CheckoutForm, CheckoutMessage, FormField, HandoffLink, MessagingChannel,
    PaymentMethod,
};
use crate::config::StorefrontConfig;
use crate::error::{CommerceError, RequiredField};
use crate::notify::{Notification, NotificationSink};

/// A discrete UI event.
///
/// Text payloads are raw input; the store normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// "Add to cart" on a catalog card.
    AddItem {
        #[serde(default)]
        image_ref: String,
        title: String,
        price_text: String,
        #[serde(default)]
        quantity: String,
    },
    /// Trash icon on a cart row; `position` is the row's raw position attribute.
    RemoveItem { position: String },
    /// Checkout button on the cart panel.
    OpenCheckout,
    /// Typing into a checkout form field.
    FillForm { field: FormField, value: String },
    /// Picking a payment method.
    SelectPayment { method: PaymentMethod },
    /// Submitting the checkout form.
    SubmitCheckout,
    /// Newsletter sign-up form.
    SubscribeNewsletter { email: String },
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { position: usize },
    Removed(LineItem),
    /// Nothing changed.
    Ignored,
    CheckoutOpened(CheckoutSummary),
    FormUpdated,
    /// Order handed off; cart and form have been reset.
    Submitted {
        message: CheckoutMessage,
        link: HandoffLink,
    },
    Subscribed,
    /// Checkout refused. The shopper has been notified.
    Rejected(RejectReason),
}

/// Why a checkout was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyCart,
    MissingFields(Vec<RequiredField>),
}

impl RejectReason {
    fn notification(&self) -> Notification {
        match self {
            RejectReason::EmptyCart => Notification::CartEmpty,
            RejectReason::MissingFields(fields) => Notification::MissingFields {
                fields: fields.clone(),
            },
        }
    }
}

impl TryFrom<CommerceError> for RejectReason {
    type Error = CommerceError;

    fn try_from(err: CommerceError) -> Result<Self, Self::Error> {
        match err {
            CommerceError::EmptyCart => Ok(RejectReason::EmptyCart),
            CommerceError::MissingFields(fields) => Ok(RejectReason::MissingFields(fields)),
            other => Err(other),
        }
    }
}

/// Owns the cart and checkout form for one page session.
pub struct Storefront<N, M, S = Cart> {
    cart: S,
    form: CheckoutForm,
    view: CartView,
    config: StorefrontConfig,
    notifier: N,
    channel: M,
}

impl<N, M> Storefront<N, M, Cart>
where
    N: NotificationSink,
    M: MessagingChannel,
{
    /// Create a storefront with an empty cart.
    pub fn new(config: StorefrontConfig, notifier: N, channel: M) -> Self {
        Self::with_store(Cart::new(), config, notifier, channel)
    }
}

impl<N, M, S> Storefront<N, M, S>
where
    N: NotificationSink,
    M: MessagingChannel,
    S: CartStore,
{
    /// Create a storefront around an existing store.
    pub fn with_store(cart: S, config: StorefrontConfig, notifier: N, channel: M) -> Self {
        let view = render(&cart);
        Self {
            cart,
            form: CheckoutForm::default(),
            view,
            config,
            notifier,
            channel,
        }
    }

    /// Apply one command to completion.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::AddItem {
                image_ref,
                title,
                price_text,
                quantity,
            } => {
                let position = self.cart.add_item(&image_ref, &title, &price_text, &quantity);
                self.refresh();
                self.notifier.notify(Notification::ItemAdded { title });
                Outcome::Added { position }
            }
            Command::RemoveItem { position } => match self.cart.remove_raw(&position) {
                Some(removed) => {
                    self.refresh();
                    self.notifier.notify(Notification::ItemRemoved {
                        title: removed.title.clone(),
                    });
                    Outcome::Removed(removed)
                }
                None => Outcome::Ignored,
            },
            Command::OpenCheckout => match CheckoutSummary::from_view(&self.view) {
                Some(summary) => Outcome::CheckoutOpened(summary),
                None => self.reject(RejectReason::EmptyCart),
            },
            Command::FillForm { field, value } => {
                self.form.set(field, value);
                Outcome::FormUpdated
            }
            Command::SelectPayment { method } => {
                self.form.payment = Some(method);
                Outcome::FormUpdated
            }
            Command::SubmitCheckout => self.submit_checkout(),
            Command::SubscribeNewsletter { email } => {
                if email.is_empty() {
                    return Outcome::Ignored;
                }
                debug!("newsletter sign-up");
                self.notifier.notify(Notification::NewsletterSubscribed);
                Outcome::Subscribed
            }
        }
    }

    /// Apply commands in order, returning each outcome.
    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = Command>) -> Vec<Outcome> {
        commands.into_iter().map(|c| self.dispatch(c)).collect()
    }

    fn submit_checkout(&mut self) -> Outcome {
        if self.cart.is_empty() {
            return self.reject(RejectReason::EmptyCart);
        }

        let message = self
            .form
            .validate()
            .and_then(|customer| compose(&self.cart, &customer, &self.config.shop));
        let message = match message {
            Ok(message) => message,
            Err(err) => {
                return match RejectReason::try_from(err) {
                    Ok(reason) => self.reject(reason),
                    // compose and validate only produce rejections
                    Err(other) => {
                        warn!(error = %other, "unexpected checkout error");
                        Outcome::Ignored
                    }
                }
            }
        };

        let link = HandoffLink::new(&self.config.messaging, &message);
        info!(
            recipient = %self.config.messaging.recipient,
            lines = self.cart.len(),
            total = self.cart.total_value().amount(),
            "handing off order"
        );
        self.channel.hand_off(&link);

        self.cart.clear();
        self.refresh();
        self.form.reset();
        self.notifier.notify(Notification::OrderSent);
        Outcome::Submitted { message, link }
    }

    fn reject(&mut self, reason: RejectReason) -> Outcome {
        warn!(reason = ?reason, "checkout rejected");
        self.notifier.notify(reason.notification());
        Outcome::Rejected(reason)
    }

    fn refresh(&mut self) {
        self.view = render(&self.cart);
        debug!(badge = self.view.badge_count, total = self.view.total(), "cart rendered");
    }

    pub fn cart(&self) -> &S {
        &self.cart
    }

    /// The view produced by the last re-render.
    pub fn view(&self) -> &CartView {
        &self.view
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn channel(&self) -> &M {
        &self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::RecordingChannel;
    use crate::notify::RecordingSink;

    type TestStorefront = Storefront<RecordingSink, RecordingChannel>;

    fn storefront() -> TestStorefront {
        Storefront::new(
            StorefrontConfig::default(),
            RecordingSink::new(),
            RecordingChannel::new(),
        )
    }

    fn add(title: &str, price: &str, qty: &str) -> Command {
        Command::AddItem {
            image_ref: String::new(),
            title: title.to_string(),
            price_text: price.to_string(),
            quantity: qty.to_string(),
        }
    }

    fn fill_required(store: &mut TestStorefront) {
        store.dispatch_all([
            Command::FillForm {
                field: FormField::Name,
                value: "Siti".to_string(),
            },
            Command::FillForm {
                field: FormField::Phone,
                value: "0812".to_string(),
            },
            Command::FillForm {
                field: FormField::Address,
                value: "Jl. Kaliurang 5".to_string(),
            },
            Command::FillForm {
                field: FormField::City,
                value: "Sleman".to_string(),
            },
        ]);
    }

    #[test]
    fn test_add_rerenders_and_notifies() {
        let mut store = storefront();
        let outcome = store.dispatch(add("Batik Tulis", "45K", "2"));

        assert_eq!(outcome, Outcome::Added { position: 0 });
        assert_eq!(store.view().badge_count, 2);
        assert_eq!(store.view().total(), "90K");
        assert_eq!(
            store.notifier().last(),
            Some(&Notification::ItemAdded {
                title: "Batik Tulis".to_string()
            })
        );
    }

    #[test]
    fn test_remove_invalid_position_is_silent() {
        let mut store = storefront();
        store.dispatch(add("Batik Tulis", "45K", "1"));
        store.notifier_mut().take();

        assert_eq!(
            store.dispatch(Command::RemoveItem {
                position: "7".to_string()
            }),
            Outcome::Ignored
        );
        assert_eq!(
            store.dispatch(Command::RemoveItem {
                position: "x".to_string()
            }),
            Outcome::Ignored
        );
        assert!(store.notifier().notifications().is_empty());
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn test_remove_valid_position() {
        let mut store = storefront();
        store.dispatch(add("Batik Tulis", "45K", "1"));

        let outcome = store.dispatch(Command::RemoveItem {
            position: "0".to_string(),
        });
        assert!(matches!(outcome, Outcome::Removed(ref item) if item.title == "Batik Tulis"));
        assert!(store.view().is_empty());
        assert_eq!(store.view().badge_count, 0);
        assert_eq!(
            store.notifier().last(),
            Some(&Notification::ItemRemoved {
                title: "Batik Tulis".to_string()
            })
        );
    }

    #[test]
    fn test_open_checkout_on_empty_cart() {
        let mut store = storefront();
        assert_eq!(
            store.dispatch(Command::OpenCheckout),
            Outcome::Rejected(RejectReason::EmptyCart)
        );
        assert_eq!(store.notifier().last(), Some(&Notification::CartEmpty));
    }

    #[test]
    fn test_open_checkout_shows_summary() {
        let mut store = storefront();
        store.dispatch(add("Batik Tulis", "45K", "2"));

        match store.dispatch(Command::OpenCheckout) {
            Outcome::CheckoutOpened(summary) => {
                assert_eq!(summary.rows.len(), 1);
                assert_eq!(summary.total, "90K");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_submit_empty_cart() {
        let mut store = storefront();
        fill_required(&mut store);

        assert_eq!(
            store.dispatch(Command::SubmitCheckout),
            Outcome::Rejected(RejectReason::EmptyCart)
        );
        assert!(store.channel().links().is_empty());
        // Form is kept for another attempt.
        assert_eq!(store.form().name, "Siti");
    }

    #[test]
    fn test_submit_missing_fields() {
        let mut store = storefront();
        store.dispatch(add("Batik Tulis", "45K", "1"));
        store.dispatch(Command::FillForm {
            field: FormField::Name,
            value: "Siti".to_string(),
        });

        let outcome = store.dispatch(Command::SubmitCheckout);
        assert_eq!(
            outcome,
            Outcome::Rejected(RejectReason::MissingFields(vec![
                RequiredField::Phone,
                RequiredField::Address,
                RequiredField::City,
            ]))
        );
        assert!(store.channel().links().is_empty());
        assert_eq!(store.cart().len(), 1);
        assert!(store.notifier().last().unwrap().is_rejection());
    }

    #[test]
    fn test_submit_success_resets_state() {
        let mut store = storefront();
        store.dispatch(add("Batik Tulis", "45K", "1"));
        fill_required(&mut store);
        store.dispatch(Command::SelectPayment {
            method: PaymentMethod::CashOnDelivery,
        });

        let link = match store.dispatch(Command::SubmitCheckout) {
            Outcome::Submitted { link, .. } => link,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert_eq!(store.channel().links(), &[link.clone()]);
        assert!(link.as_str().starts_with("https://wa.me/087845178824?text="));
        assert!(store.cart().is_empty());
        assert!(store.view().is_empty());
        assert_eq!(store.form(), &CheckoutForm::default());
        assert_eq!(store.notifier().last(), Some(&Notification::OrderSent));
    }

    #[test]
    fn test_newsletter() {
        let mut store = storefront();
        assert_eq!(
            store.dispatch(Command::SubscribeNewsletter {
                email: String::new()
            }),
            Outcome::Ignored
        );
        assert_eq!(
            store.dispatch(Command::SubscribeNewsletter {
                email: "a@b.id".to_string()
            }),
            Outcome::Subscribed
        );
        assert_eq!(
            store.notifier().notifications(),
            &[Notification::NewsletterSubscribed]
        );
    }

    #[test]
    fn test_reject_reason_from_error() {
        assert_eq!(
            RejectReason::try_from(CommerceError::EmptyCart).unwrap(),
            RejectReason::EmptyCart
        );
        let err = RejectReason::try_from(CommerceError::UnknownPaymentMethod("qris".to_string()))
            .unwrap_err();
        assert!(matches!(err, CommerceError::UnknownPaymentMethod(ref code) if code == "qris"));
    }

    #[test]
    fn test_command_deserializes_from_json() {
        let command: Command = serde_json::from_str(
            r#"{"command": "add_item", "title": "Batik Tulis", "price_text": "45K"}"#,
        )
        .unwrap();
        assert_eq!(command, add("Batik Tulis", "45K", ""));
    }
}
