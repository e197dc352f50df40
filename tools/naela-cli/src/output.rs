//! Output formatting for the CLI.

use console::{style, Term};
use naela_commerce::checkout::{HandoffLink, MessagingChannel};
use naela_commerce::notify::{Notification, NotificationSink};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a block of text verbatim, indented.
    pub fn block(&self, text: &str) {
        if self.json {
            return;
        }
        for line in text.lines() {
            println!("  {}", line);
        }
    }

    /// Print a shopper notification, styled by whether it is a rejection.
    pub fn notification(&self, notification: &Notification) {
        if self.json {
            self.json(notification);
            return;
        }
        let text = notification.to_string();
        if notification.is_rejection() {
            println!("{}", style(text).red());
        } else {
            println!("{}", style(text).green());
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Whether stdout is an interactive terminal.
    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Notification sink that prints to the terminal.
pub struct TerminalSink {
    output: Output,
}

impl TerminalSink {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl NotificationSink for TerminalSink {
    fn notify(&mut self, notification: Notification) {
        self.output.notification(&notification);
    }
}

/// Messaging channel that prints the handoff link instead of opening it.
pub struct TerminalChannel {
    output: Output,
}

impl TerminalChannel {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl MessagingChannel for TerminalChannel {
    fn hand_off(&mut self, link: &HandoffLink) {
        self.output.header("Open to send the order");
        self.output.kv("link", link.as_str());
    }
}
