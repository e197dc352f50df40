//! CLI command implementations.

pub mod compose;
pub mod price;
pub mod session;

use clap::Args;

/// Arguments for the parse-price command.
#[derive(Args)]
pub struct ParsePriceArgs {
    /// Price text as printed on a catalog card, e.g. "Rp 45K".
    pub text: String,
}

/// Arguments for the format command.
#[derive(Args)]
pub struct FormatArgs {
    /// Amount in whole Rupiah.
    pub amount: u64,
}

/// Arguments for the compose command.
#[derive(Args)]
pub struct ComposeArgs {
    /// Order file with `[[items]]` and `[customer]` tables.
    pub order: String,

    /// Override the messaging recipient.
    #[arg(long)]
    pub recipient: Option<String>,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Never prompt; `checkout` submits the form as filled with `fill`.
    #[arg(long)]
    pub no_prompt: bool,
}
