use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::booking::gateway::BookingGateway;
use crate::domain::booking::model::Booking;
use crate::domain::interaction::{ConfirmRequest, Dialogs, Notifier};
use crate::domain::logger::Logger;
use crate::domain::session::model::Session;

use super::action_runner::{ActionMessages, ActionOutcome, ActionRunner};
use super::collection::{AdminCollection, CollectionSnapshot};

pub const LOGIN_REQUIRED: &str = "Please log in as an admin to manage bookings.";
const LOAD_FAILED: &str = "Could not load bookings.";

/// Booking management screen.
pub struct BookingController {
    session: Session,
    gateway: Arc<dyn BookingGateway>,
    runner: ActionRunner,
    collection: AdminCollection<Booking>,
    selected: watch::Sender<Option<Booking>>,
}

impl BookingController {
    pub fn new(
        session: Session,
        gateway: Arc<dyn BookingGateway>,
        dialogs: Arc<dyn Dialogs>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (selected, _) = watch::channel(None);
        Self {
            session,
            gateway,
            runner: ActionRunner {
                dialogs,
                notifier,
                logger,
            },
            collection: AdminCollection::new(),
            selected,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CollectionSnapshot<Booking>> {
        self.collection.subscribe()
    }

    pub fn snapshot(&self) -> CollectionSnapshot<Booking> {
        self.collection.snapshot()
    }

    pub fn set_page(&self, page: usize) {
        self.collection.set_page(page);
    }

    /// Booking opened with [`BookingController::view_details`], if any.
    pub fn selected(&self) -> Option<Booking> {
        self.selected.borrow().clone()
    }

    pub fn subscribe_selected(&self) -> watch::Receiver<Option<Booking>> {
        self.selected.subscribe()
    }

    pub async fn load(&self) {
        if !self.session.is_authenticated() {
            self.runner
                .logger
                .warn("Booking screen opened without a session");
            self.collection.set_failed(LOGIN_REQUIRED);
            return;
        }

        self.runner.logger.info("Loading bookings");
        match self.gateway.get_all(&self.session).await {
            Ok(bookings) => {
                self.runner
                    .logger
                    .info(&format!("Loaded {} bookings", bookings.len()));
                self.collection.set_ready(bookings);
            }
            Err(err) => {
                let message = err.message_or(LOAD_FAILED);
                self.runner
                    .logger
                    .error(&format!("Failed to load bookings: {}", message));
                self.collection.set_failed(&message);
                self.runner.notifier.error(&message);
            }
        }
    }

    pub async fn confirm(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::question(
                "Confirm booking",
                "Are you sure you want to confirm this booking?",
                "Confirm",
            ),
            success: "Booking confirmed.".to_string(),
            failure: "Could not confirm the booking.".to_string(),
        };
        self.runner
            .run(&self.collection, &messages, || {
                self.gateway.confirm(&self.session, id)
            })
            .await
    }

    pub async fn cancel(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::warning(
                "Cancel booking",
                "Are you sure you want to cancel this booking? It will move to Cancelled.",
                "Cancel booking",
            ),
            success: "Booking cancelled.".to_string(),
            failure: "Could not cancel the booking.".to_string(),
        };
        self.runner
            .run(&self.collection, &messages, || {
                self.gateway.cancel(&self.session, id)
            })
            .await
    }

    pub async fn approve_cancel(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::question(
                "Approve cancellation",
                "Approve the customer's cancellation request? The booking will move to Cancelled.",
                "Approve",
            ),
            success: "Cancellation approved. The booking is now Cancelled.".to_string(),
            failure: "Could not approve the cancellation.".to_string(),
        };
        let outcome = self
            .runner
            .run(&self.collection, &messages, || {
                self.gateway.approve_cancel(&self.session, id)
            })
            .await;
        self.refresh_selected(id);
        outcome
    }

    pub async fn reject_cancel(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::warning(
                "Reject cancellation",
                "Reject the customer's cancellation request? The booking will return to Confirmed.",
                "Reject",
            ),
            success: "Cancellation rejected. The booking is back to Confirmed.".to_string(),
            failure: "Could not reject the cancellation.".to_string(),
        };
        let outcome = self
            .runner
            .run(&self.collection, &messages, || {
                self.gateway.reject_cancel(&self.session, id)
            })
            .await;
        self.refresh_selected(id);
        outcome
    }

    pub async fn delete(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::warning(
                "Delete booking",
                "Are you sure you want to delete this booking?",
                "Delete",
            ),
            success: "Booking deleted.".to_string(),
            failure: "Could not delete the booking.".to_string(),
        };
        self.runner
            .run_delete(&self.collection, id, &messages, || {
                self.gateway.delete(&self.session, id)
            })
            .await
    }

    /// Fetches one booking fresh from the backend and opens it.
    pub async fn view_details(&self, id: i64) -> Option<Booking> {
        match self.gateway.get(&self.session, id).await {
            Ok(booking) => {
                self.selected.send_replace(Some(booking.clone()));
                Some(booking)
            }
            Err(err) => {
                self.runner
                    .fail(&err, "Could not load the booking details.");
                None
            }
        }
    }

    pub fn close_details(&self) {
        self.selected.send_replace(None);
    }

    // The details pane offers approve/reject too; keep it in step with the row.
    fn refresh_selected(&self, id: i64) {
        let open = self.selected.borrow().as_ref().map(|b| b.id) == Some(id);
        if open {
            self.selected.send_replace(self.collection.find(id));
        }
    }
}
