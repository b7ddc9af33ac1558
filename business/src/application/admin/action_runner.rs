use std::future::Future;
use std::sync::Arc;

use crate::domain::errors::GatewayError;
use crate::domain::interaction::{ConfirmRequest, Dialogs, Notifier};
use crate::domain::logger::Logger;
use crate::domain::shared::record::Record;

use super::collection::AdminCollection;

/// How an admin row action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation; nothing was sent.
    Dismissed,
    /// Nothing needed to change, so nothing was sent.
    Unchanged,
    Applied,
    /// The call failed; carries the message that was shown.
    Failed(String),
}

/// Texts for one row action.
#[derive(Debug, Clone)]
pub struct ActionMessages {
    pub confirm: ConfirmRequest,
    pub success: String,
    /// Shown when the failure carries no message of its own.
    pub failure: String,
}

/// Shared "confirm → call → patch-or-notify" protocol of the admin screens.
pub struct ActionRunner {
    pub dialogs: Arc<dyn Dialogs>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl ActionRunner {
    /// Asks for confirmation, runs `call`, and splices the returned record into
    /// `collection`. Failures leave the collection untouched.
    pub async fn run<R, F, Fut>(
        &self,
        collection: &AdminCollection<R>,
        messages: &ActionMessages,
        call: F,
    ) -> ActionOutcome
    where
        R: Record,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, GatewayError>>,
    {
        if !self.dialogs.confirm(&messages.confirm).await {
            self.logger
                .debug(&format!("Action dismissed: {}", messages.confirm.title));
            return ActionOutcome::Dismissed;
        }

        match call().await {
            Ok(record) => {
                self.logger
                    .info(&format!("{} (id {})", messages.success, record.id()));
                collection.replace(record);
                self.notifier.success(&messages.success);
                ActionOutcome::Applied
            }
            Err(err) => self.fail(&err, &messages.failure),
        }
    }

    /// Same protocol for deletions: on success the record leaves the collection.
    pub async fn run_delete<R, F, Fut>(
        &self,
        collection: &AdminCollection<R>,
        id: i64,
        messages: &ActionMessages,
        call: F,
    ) -> ActionOutcome
    where
        R: Record,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), GatewayError>>,
    {
        if !self.dialogs.confirm(&messages.confirm).await {
            self.logger
                .debug(&format!("Deletion of {} dismissed", id));
            return ActionOutcome::Dismissed;
        }

        match call().await {
            Ok(()) => {
                self.logger.info(&format!("Record {} deleted", id));
                collection.remove(id);
                self.notifier.success(&messages.success);
                ActionOutcome::Applied
            }
            Err(err) => self.fail(&err, &messages.failure),
        }
    }

    /// Reports a failed call and returns the outcome carrying the shown message.
    pub fn fail(&self, err: &GatewayError, fallback: &str) -> ActionOutcome {
        let message = err.message_or(fallback);
        self.logger.warn(&format!("Admin action failed: {}", message));
        self.notifier.error(&message);
        ActionOutcome::Failed(message)
    }
}
