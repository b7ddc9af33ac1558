use std::io::Write;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;
use tracing::warn;

use business::domain::interaction::{ConfirmRequest, Dialogs, StatusSelection, Tone};
use business::domain::order::value_objects::{OrderStatus, PaymentStatus};

/// Answers given on the command line instead of interactively.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    /// Accept every confirmation without asking.
    pub assume_yes: bool,
    pub order_status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub delivery_date: Option<NaiveDateTime>,
}

type Input = Box<dyn AsyncBufRead + Unpin + Send>;

/// Dialogs answered on the terminal, or from [`Presets`] when given.
pub struct TerminalDialogs {
    presets: Presets,
    input: Mutex<Lines<Input>>,
}

impl TerminalDialogs {
    pub fn new(presets: Presets) -> Self {
        Self::with_input(presets, BufReader::new(tokio::io::stdin()))
    }

    pub fn with_input(presets: Presets, input: impl AsyncBufRead + Unpin + Send + 'static) -> Self {
        let input: Input = Box::new(input);
        Self {
            presets,
            input: Mutex::new(input.lines()),
        }
    }

    /// `None` once the input is closed.
    async fn ask(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        if let Err(err) = std::io::stdout().flush() {
            warn!("Could not flush the prompt: {}", err);
        }
        self.input.lock().await.next_line().await.ok().flatten()
    }

    /// Asks until the answer parses. A blank answer yields `blank`, so a
    /// `None` there dismisses the dialog.
    async fn ask_until<T: Copy + Send>(
        &self,
        prompt: &str,
        blank: Option<T>,
        parse: impl Fn(&str) -> Option<T> + Send + Sync,
    ) -> Option<T> {
        loop {
            let answer = self.ask(prompt).await?;
            let answer = answer.trim();
            if answer.is_empty() {
                return blank;
            }
            match parse(answer) {
                Some(value) => return Some(value),
                None => eprintln!("'{}' is not a valid answer, try again.", answer),
            }
        }
    }
}

#[async_trait]
impl Dialogs for TerminalDialogs {
    async fn confirm(&self, request: &ConfirmRequest) -> bool {
        if self.presets.assume_yes {
            return true;
        }
        let marker = match request.tone {
            Tone::Question => "?",
            Tone::Warning => "!",
        };
        println!("{} {}", marker, request.title);
        println!("  {}", request.text);
        let prompt = format!(
            "  [y] {} / [n] {}: ",
            request.confirm_label, request.cancel_label
        );
        self.ask(&prompt)
            .await
            .is_some_and(|answer| is_affirmative(&answer))
    }

    async fn select_statuses(&self, current: StatusSelection) -> Option<StatusSelection> {
        if self.presets.order_status.is_some() || self.presets.payment_status.is_some() {
            return Some(StatusSelection {
                order_status: self.presets.order_status.unwrap_or(current.order_status),
                payment_status: self.presets.payment_status.unwrap_or(current.payment_status),
            });
        }

        let order_status = self
            .ask_until(
                &format!("Order status [{}]: ", current.order_status),
                Some(current.order_status),
                parse_upper,
            )
            .await?;
        let payment_status = self
            .ask_until(
                &format!("Payment status [{}]: ", current.payment_status),
                Some(current.payment_status),
                parse_upper,
            )
            .await?;

        Some(StatusSelection {
            order_status,
            payment_status,
        })
    }

    async fn pick_delivery_date(&self) -> Option<NaiveDateTime> {
        if let Some(date) = self.presets.delivery_date {
            return Some(date);
        }
        self.ask_until("Delivery date (YYYY-MM-DD HH:MM): ", None, parse_delivery_date)
            .await
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn parse_upper<T: std::str::FromStr>(answer: &str) -> Option<T> {
    answer.trim().to_uppercase().parse().ok()
}

/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM[:SS]` or a bare date (midnight).
pub fn parse_delivery_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
