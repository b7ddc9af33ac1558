//! Ports towards the view layer: blocking dialogs and transient notifications.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::order::value_objects::{OrderStatus, PaymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Question,
    Warning,
}

/// Content of a yes/no confirmation describing what the action will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub text: String,
    pub tone: Tone,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmRequest {
    pub fn question(title: &str, text: &str, confirm_label: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            tone: Tone::Question,
            confirm_label: confirm_label.to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }

    pub fn warning(title: &str, text: &str, confirm_label: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            tone: Tone::Warning,
            confirm_label: confirm_label.to_string(),
            cancel_label: "Back".to_string(),
        }
    }
}

/// Pair of statuses edited together in the order status dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSelection {
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
}

#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Resolves to `true` only when the user accepted.
    async fn confirm(&self, request: &ConfirmRequest) -> bool;
    /// Shows both status pickers preselected with `current`. `None` when dismissed.
    async fn select_statuses(&self, current: StatusSelection) -> Option<StatusSelection>;
    /// Asks for a delivery date-time. `None` when dismissed.
    async fn pick_delivery_date(&self) -> Option<NaiveDateTime>;
}

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
