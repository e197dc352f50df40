//! Price parsing and formatting commands.

use anyhow::Result;
use naela_commerce::{format_currency, parse_price, Rupiah};
use serde::Serialize;

use super::{FormatArgs, ParsePriceArgs};
use crate::context::Context;

#[derive(Serialize)]
struct PriceReport<'a> {
    text: &'a str,
    amount: u64,
    display: String,
}

/// Run the parse-price command.
pub fn parse(args: ParsePriceArgs, ctx: &Context) -> Result<()> {
    let amount = parse_price(&args.text);
    ctx.output
        .debug(&format!("parsed {:?} as {}", args.text, amount.amount()));

    if ctx.output.is_json() {
        ctx.output.json(&PriceReport {
            text: &args.text,
            amount: amount.amount(),
            display: format_currency(amount),
        });
    } else {
        println!("{}", amount.amount());
    }

    Ok(())
}

/// Run the format command.
pub fn format(args: FormatArgs, ctx: &Context) -> Result<()> {
    let display = format_currency(Rupiah::new(args.amount));

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "amount": args.amount,
            "display": display,
        }));
    } else {
        println!("{}", display);
    }

    Ok(())
}
