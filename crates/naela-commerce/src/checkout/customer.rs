//! Checkout form and customer information.

use crate::error::{CommerceError, RequiredField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Settle over the messaging channel.
    #[default]
    #[serde(rename = "whatsapp")]
    Messaging,
    #[serde(rename = "transfer")]
    BankTransfer,
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Messaging,
        PaymentMethod::BankTransfer,
        PaymentMethod::CashOnDelivery,
    ];

    /// Form value code.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Messaging => "whatsapp",
            PaymentMethod::BankTransfer => "transfer",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    /// Label used in the order message.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Messaging => "WhatsApp",
            PaymentMethod::BankTransfer => "Transfer Bank",
            PaymentMethod::CashOnDelivery => "COD",
        }
    }

    /// Parse a form value code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "whatsapp" => Some(PaymentMethod::Messaging),
            "transfer" => Some(PaymentMethod::BankTransfer),
            "cod" => Some(PaymentMethod::CashOnDelivery),
            _ => None,
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CommerceError::UnknownPaymentMethod(s.to_string()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields of the checkout form that hold text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Phone,
    Email,
    Address,
    City,
    PostalCode,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Address,
        FormField::City,
        FormField::PostalCode,
        FormField::Notes,
    ];

    /// Whether the field must be non-empty to submit.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Phone | FormField::Address | FormField::City
        )
    }

    /// Machine key, matching the serialized name.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::PostalCode => "postal_code",
            FormField::Notes => "notes",
        }
    }

    /// Look up a field by key. `postal` is accepted for `postal_code`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "postal" => Some(FormField::PostalCode),
            other => FormField::ALL.into_iter().find(|f| f.key() == other),
        }
    }

    /// Prompt label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nama",
            FormField::Phone => "WhatsApp",
            FormField::Email => "Email",
            FormField::Address => "Alamat",
            FormField::City => "Kota",
            FormField::PostalCode => "Kode Pos",
            FormField::Notes => "Catatan",
        }
    }
}

/// Raw checkout form state, as typed by the customer.
///
/// Lives for one checkout attempt and is reset after a successful submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub notes: String,
    /// Selected payment method, `None` if nothing was picked.
    #[serde(default)]
    pub payment: Option<PaymentMethod>,
}

impl CheckoutForm {
    /// Set a text field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Read a text field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Address => &self.address,
            FormField::City => &self.city,
            FormField::PostalCode => &self.postal_code,
            FormField::Notes => &self.notes,
        }
    }

    /// Clear every field and the payment selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.phone.is_empty() {
            missing.push(RequiredField::Phone);
        }
        if self.address.is_empty() {
            missing.push(RequiredField::Address);
        }
        if self.city.is_empty() {
            missing.push(RequiredField::City);
        }
        missing
    }

    /// Validate into [`CustomerInfo`].
    ///
    /// Required fields only need to be non-empty; values are not trimmed.
    /// Empty optional fields become `None`.
    pub fn validate(&self) -> Result<CustomerInfo, CommerceError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::MissingFields(missing));
        }

        Ok(CustomerInfo {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: non_empty(&self.email),
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: non_empty(&self.postal_code),
            notes: non_empty(&self.notes),
            payment: self.payment.unwrap_or_default(),
        })
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Address => &mut self.address,
            FormField::City => &mut self.city,
            FormField::PostalCode => &mut self.postal_code,
            FormField::Notes => &mut self.notes,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Validated customer contact and shipping information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    /// WhatsApp number.
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub payment: PaymentMethod,
}
