//! Commerce error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never fail; these cover checkout rejection and setup.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout form is missing required fields.
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),

    /// Payment method code not recognized.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Config file is not valid TOML for the storefront schema.
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Checkout form fields that must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Phone,
    Address,
    City,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Phone => "phone",
            RequiredField::Address => "address",
            RequiredField::City => "city",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
