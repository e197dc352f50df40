//! Interactive cart session.
//!
//! Reads one command per line from stdin and feeds it to a [`Storefront`]
//! whose notifications and handoff links print to the terminal.

use std::io::{self, Write};

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use naela_commerce::prelude::*;
use naela_observability::SessionId;
use tracing::info;

use super::SessionArgs;
use crate::context::Context;
use crate::output::{Output, TerminalChannel, TerminalSink};

type TerminalStorefront = Storefront<TerminalSink, TerminalChannel>;

const HELP: &str = "\
add <price> <qty> <title...>   add a product, e.g. `add 45K 2 Batik Tulis`
remove <pos>                   remove the row at position <pos>
cart                           show the cart
debug                          one-line cart summary
checkout                       review the order, fill the form and send it
fill <field> <value...>        set a form field (name, phone, email, address, city, postal_code, notes)
pay <method>                   choose payment: whatsapp, transfer, cod
submit                         send the order as currently filled
newsletter <email>             subscribe to the newsletter
help                           show this help
quit                           leave the session";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionLine {
    Dispatch(Command),
    ShowCart,
    Debug,
    Checkout,
    Help,
    Quit,
    Blank,
}

/// Parse a session input line.
pub fn parse_line(line: &str) -> Result<SessionLine, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let parsed = match verb.to_lowercase().as_str() {
        "" => SessionLine::Blank,
        "add" => {
            let mut words = rest.split_whitespace();
            let (price, quantity) = match (words.next(), words.next()) {
                (Some(price), Some(quantity)) => (price, quantity),
                _ => return Err("usage: add <price> <qty> <title...>".to_string()),
            };
            let title = words.collect::<Vec<_>>().join(" ");
            if title.is_empty() {
                return Err("usage: add <price> <qty> <title...>".to_string());
            }
            SessionLine::Dispatch(
                CatalogCard::new(title, price)
                    .with_quantity(quantity)
                    .into_command(),
            )
        }
        "remove" | "rm" => SessionLine::Dispatch(Command::RemoveItem {
            position: rest.to_string(),
        }),
        "cart" => SessionLine::ShowCart,
        "debug" => SessionLine::Debug,
        "checkout" => SessionLine::Checkout,
        "fill" => {
            let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = FormField::from_key(key)
                .ok_or_else(|| format!("unknown field `{}`", key))?;
            SessionLine::Dispatch(Command::FillForm {
                field,
                value: value.trim().to_string(),
            })
        }
        "pay" => {
            let method = rest.parse::<PaymentMethod>().map_err(|e| e.to_string())?;
            SessionLine::Dispatch(Command::SelectPayment { method })
        }
        "submit" => SessionLine::Dispatch(Command::SubmitCheckout),
        "newsletter" => SessionLine::Dispatch(Command::SubscribeNewsletter {
            email: rest.to_string(),
        }),
        "help" | "?" => SessionLine::Help,
        "quit" | "exit" => SessionLine::Quit,
        other => return Err(format!("unknown command `{}`, try `help`", other)),
    };

    Ok(parsed)
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let session = SessionId::generate();
    let span = session.span();
    let _guard = span.enter();

    let output = ctx.output.clone();
    let prompt = !args.no_prompt && output.is_interactive();
    let mut store = Storefront::new(
        ctx.config.storefront.clone(),
        TerminalSink::new(output.clone()),
        TerminalChannel::new(output.clone()),
    );

    info!(shop = %ctx.config.storefront.shop.name, "session started");
    output.header(&ctx.config.storefront.shop.name);
    output.info("Type `help` for commands.");

    let stdin = io::stdin();
    let mut buf = String::new();
    loop {
        if prompt {
            print!("> ");
            io::stdout().flush()?;
        }

        buf.clear();
        if stdin.read_line(&mut buf)? == 0 {
            break;
        }

        match parse_line(&buf) {
            Ok(SessionLine::Blank) => {}
            Ok(SessionLine::Help) => output.block(HELP),
            Ok(SessionLine::Quit) => break,
            Ok(SessionLine::ShowCart) => show_cart(&store, &output),
            Ok(SessionLine::Debug) => output.info(&store.cart().debug_summary()),
            Ok(SessionLine::Checkout) => checkout(&mut store, &output, prompt)?,
            Ok(SessionLine::Dispatch(command)) => {
                let outcome = store.dispatch(command);
                report(&store, &output, outcome);
            }
            Err(msg) => output.warn(&msg),
        }
    }

    info!(cart = %store.cart().debug_summary(), "session ended");
    Ok(())
}

fn show_cart(store: &TerminalStorefront, output: &Output) {
    let view = store.view();
    if output.is_json() {
        output.json(view);
        return;
    }
    output.header(&format!("Keranjang ({})", view.badge_count));
    output.block(&view.to_string());
}

fn report(store: &TerminalStorefront, output: &Output, outcome: Outcome) {
    match outcome {
        Outcome::Added { position } => {
            output.debug(&format!(
                "row {}, badge {}",
                position,
                store.view().badge_count
            ));
        }
        Outcome::Ignored => output.debug("nothing changed"),
        Outcome::Submitted { message, .. } => {
            output.header("Order message");
            output.block(message.as_str());
        }
        Outcome::CheckoutOpened(summary) => {
            output.header("Ringkasan Pesanan");
            output.block(&summary.to_string());
        }
        Outcome::Removed(_)
        | Outcome::FormUpdated
        | Outcome::Subscribed
        | Outcome::Rejected(_) => {}
    }
}

fn checkout(store: &mut TerminalStorefront, output: &Output, prompt: bool) -> Result<()> {
    let outcome = store.dispatch(Command::OpenCheckout);
    let opened = matches!(outcome, Outcome::CheckoutOpened(_));
    report(store, output, outcome);
    if !opened {
        return Ok(());
    }

    if prompt {
        for field in FormField::ALL {
            let value: String = Input::new()
                .with_prompt(field.label())
                .with_initial_text(store.form().get(field))
                .allow_empty(!field.is_required())
                .interact_text()?;
            store.dispatch(Command::FillForm { field, value });
        }

        let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
        let current = store.form().payment.unwrap_or_default();
        let default = PaymentMethod::ALL
            .iter()
            .position(|m| *m == current)
            .unwrap_or(0);
        let selection = Select::new()
            .with_prompt("Metode pembayaran")
            .items(&labels)
            .default(default)
            .interact()?;
        store.dispatch(Command::SelectPayment {
            method: PaymentMethod::ALL[selection],
        });

        let confirmed = Confirm::new()
            .with_prompt("Kirim pesanan?")
            .default(true)
            .interact()?;
        if !confirmed {
            output.warn("Checkout cancelled, cart kept");
            return Ok(());
        }
    }

    let outcome = store.dispatch(Command::SubmitCheckout);
    report(store, output, outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatched(line: &str) -> Command {
        match parse_line(line) {
            Ok(SessionLine::Dispatch(command)) => command,
            other => panic!("expected a command for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            dispatched("add 45K 2 Batik Tulis Parang"),
            Command::AddItem {
                image_ref: String::new(),
                title: "Batik Tulis Parang".to_string(),
                price_text: "45K".to_string(),
                quantity: "2".to_string(),
            }
        );
        assert!(parse_line("add 45K").is_err());
        assert!(parse_line("add 45K 2").is_err());
        assert!(parse_line("add").is_err());
    }

    #[test]
    fn test_parse_add_collapses_whitespace() {
        assert_eq!(
            dispatched("add 45K  2   Batik  Tulis"),
            Command::AddItem {
                image_ref: String::new(),
                title: "Batik Tulis".to_string(),
                price_text: "45K".to_string(),
                quantity: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_remove_keeps_raw_position() {
        assert_eq!(
            dispatched("remove abc"),
            Command::RemoveItem {
                position: "abc".to_string()
            }
        );
        assert_eq!(
            dispatched("rm"),
            Command::RemoveItem {
                position: String::new()
            }
        );
    }

    #[test]
    fn test_parse_fill() {
        assert_eq!(
            dispatched("fill address Jl. Malioboro 12"),
            Command::FillForm {
                field: FormField::Address,
                value: "Jl. Malioboro 12".to_string(),
            }
        );
        assert_eq!(
            dispatched("fill notes"),
            Command::FillForm {
                field: FormField::Notes,
                value: String::new(),
            }
        );
        assert!(parse_line("fill country Indonesia").is_err());
    }

    #[test]
    fn test_parse_pay() {
        assert_eq!(
            dispatched("pay transfer"),
            Command::SelectPayment {
                method: PaymentMethod::BankTransfer
            }
        );
        assert!(parse_line("pay bitcoin").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_line("  "), Ok(SessionLine::Blank));
        assert_eq!(parse_line("CART"), Ok(SessionLine::ShowCart));
        assert_eq!(parse_line("debug"), Ok(SessionLine::Debug));
        assert_eq!(parse_line("checkout"), Ok(SessionLine::Checkout));
        assert_eq!(parse_line("help"), Ok(SessionLine::Help));
        assert_eq!(parse_line("exit\n"), Ok(SessionLine::Quit));
        assert_eq!(dispatched("submit"), Command::SubmitCheckout);
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn test_session_lines_drive_checkout() {
        let mut store = Storefront::new(
            StorefrontConfig::default(),
            RecordingSink::new(),
            RecordingChannel::new(),
        );
        let script = [
            "add Rp10K 2 Batik Tulis",
            "add 5.000 1 Batik Cap",
            "remove 1",
            "fill name Siti",
            "fill phone 081234567890",
            "fill address Jl. Malioboro 12",
            "fill city Yogyakarta",
            "pay cod",
            "submit",
        ];
        let mut last = Outcome::Ignored;
        for line in script {
            if let Ok(SessionLine::Dispatch(command)) = parse_line(line) {
                last = store.dispatch(command);
            }
        }

        let Outcome::Submitted { message, .. } = last else {
            panic!("expected submit, got {:?}", last);
        };
        assert!(message.as_str().contains("1. Batik Tulis\n   2 × 10K = 20K"));
        assert!(!message.as_str().contains("Batik Cap"));
        assert_eq!(store.channel().links().len(), 1);
    }
}
