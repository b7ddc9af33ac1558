use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tokio::sync::watch;

use crate::domain::interaction::{ConfirmRequest, Dialogs, Notifier, StatusSelection};
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::{OrderStatus, PaymentStatus};
use crate::domain::session::model::Session;

use super::action_runner::{ActionMessages, ActionOutcome, ActionRunner};
use super::collection::{AdminCollection, CollectionSnapshot};

pub const LOGIN_REQUIRED: &str = "Please log in as an admin to manage orders.";
const LOAD_FAILED: &str = "Could not load orders.";
const STATUS_UPDATE_FAILED: &str = "Could not update the statuses.";

/// Order management screen.
pub struct OrderController {
    session: Session,
    gateway: Arc<dyn OrderGateway>,
    runner: ActionRunner,
    collection: AdminCollection<Order>,
}

impl OrderController {
    pub fn new(
        session: Session,
        gateway: Arc<dyn OrderGateway>,
        dialogs: Arc<dyn Dialogs>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            session,
            gateway,
            runner: ActionRunner {
                dialogs,
                notifier,
                logger,
            },
            collection: AdminCollection::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CollectionSnapshot<Order>> {
        self.collection.subscribe()
    }

    pub fn snapshot(&self) -> CollectionSnapshot<Order> {
        self.collection.snapshot()
    }

    pub fn set_page(&self, page: usize) {
        self.collection.set_page(page);
    }

    pub fn find(&self, id: i64) -> Option<Order> {
        self.collection.find(id)
    }

    pub async fn load(&self) {
        if !self.session.is_authenticated() {
            self.runner
                .logger
                .warn("Order screen opened without a session");
            self.collection.set_failed(LOGIN_REQUIRED);
            return;
        }

        self.runner.logger.info("Loading orders");
        match self.gateway.get_all(&self.session).await {
            Ok(orders) => {
                self.runner
                    .logger
                    .info(&format!("Loaded {} orders", orders.len()));
                self.collection.set_ready(orders);
            }
            Err(err) => {
                let message = err.message_or(LOAD_FAILED);
                self.runner
                    .logger
                    .error(&format!("Failed to load orders: {}", message));
                self.collection.set_failed(&message);
                self.runner.notifier.error(&message);
            }
        }
    }

    pub async fn confirm(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::question(
                "Confirm order",
                "Are you sure you want to confirm this order?",
                "Confirm",
            ),
            success: "Order confirmed.".to_string(),
            failure: "Could not confirm the order.".to_string(),
        };
        self.runner
            .run(&self.collection, &messages, || {
                self.gateway
                    .update_status(&self.session, id, OrderStatus::Confirmed)
            })
            .await
    }

    pub async fn cancel(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::warning(
                "Cancel order",
                "Are you sure you want to cancel this order?",
                "Cancel order",
            ),
            success: "Order cancelled.".to_string(),
            failure: "Could not cancel the order.".to_string(),
        };
        self.runner
            .run(&self.collection, &messages, || {
                self.gateway
                    .update_status(&self.session, id, OrderStatus::Cancelled)
            })
            .await
    }

    pub async fn request_cancel(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::warning(
                "Request cancellation",
                "Are you sure you want to request cancellation of this order?",
                "Request cancellation",
            ),
            success: "Cancellation requested.".to_string(),
            failure: "Could not request the cancellation.".to_string(),
        };
        self.runner
            .run(&self.collection, &messages, || {
                self.gateway.request_cancel(&self.session, id)
            })
            .await
    }

    pub async fn approve_cancel(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::question(
                "Approve cancellation",
                "Approve the customer's request to cancel this order?",
                "Approve",
            ),
            success: "Cancellation approved.".to_string(),
            failure: "Could not approve the cancellation.".to_string(),
        };
        self.runner
            .run(&self.collection, &messages, || {
                self.gateway.approve_cancel(&self.session, id)
            })
            .await
    }

    pub async fn reject_cancel(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::warning(
                "Reject cancellation",
                "Reject the customer's request to cancel this order?",
                "Reject",
            ),
            success: "Cancellation rejected.".to_string(),
            failure: "Could not reject the cancellation.".to_string(),
        };
        self.runner
            .run(&self.collection, &messages, || {
                self.gateway.reject_cancel(&self.session, id)
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> ActionOutcome {
        let messages = ActionMessages {
            confirm: ConfirmRequest::warning(
                "Delete order",
                "Are you sure you want to delete this order?",
                "Delete",
            ),
            success: "Order deleted.".to_string(),
            failure: "Could not delete the order.".to_string(),
        };
        self.runner
            .run_delete(&self.collection, id, &messages, || {
                self.gateway.delete(&self.session, id)
            })
            .await
    }

    /// Edits order and payment status from one dialog.
    ///
    /// Each field that differs from the last known value is sent on its own,
    /// order status first, and each answer overwrites the row. The first
    /// failure stops the sequence, so an earlier successful change stays.
    pub async fn update_statuses(&self, id: i64) -> ActionOutcome {
        let known = self.collection.find(id);
        let current = StatusSelection {
            order_status: known
                .as_ref()
                .map_or(OrderStatus::Confirmed, |o| o.order_status),
            payment_status: known
                .as_ref()
                .map_or(PaymentStatus::Pending, |o| o.payment_status),
        };

        let Some(chosen) = self.runner.dialogs.select_statuses(current).await else {
            return ActionOutcome::Dismissed;
        };

        let mut changed = false;

        if chosen.order_status != current.order_status {
            match self
                .gateway
                .update_status(&self.session, id, chosen.order_status)
                .await
            {
                Ok(order) => {
                    self.collection.replace(order);
                    self.runner.notifier.success(&format!(
                        "Order status updated to {}.",
                        chosen.order_status
                    ));
                    changed = true;
                }
                Err(err) => return self.runner.fail(&err, STATUS_UPDATE_FAILED),
            }
        }

        if chosen.payment_status != current.payment_status {
            match self
                .gateway
                .update_payment_status(&self.session, id, chosen.payment_status)
                .await
            {
                Ok(order) => {
                    self.collection.replace(order);
                    self.runner.notifier.success(&format!(
                        "Payment status updated to {}.",
                        chosen.payment_status
                    ));
                    changed = true;
                }
                Err(err) => return self.runner.fail(&err, STATUS_UPDATE_FAILED),
            }
        }

        if changed {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Unchanged
        }
    }

    /// Asks for a delivery date-time and sends it. Dates before now are
    /// refused locally.
    pub async fn update_delivery_date(&self, id: i64) -> ActionOutcome {
        let Some(delivery_date) = self.runner.dialogs.pick_delivery_date().await else {
            return ActionOutcome::Dismissed;
        };

        if let Err(err) = Self::check_delivery_date(delivery_date, Local::now().naive_local()) {
            let message = "The delivery time cannot be earlier than now.".to_string();
            self.runner
                .logger
                .warn(&format!("Rejected delivery date {}: {}", delivery_date, err));
            self.runner.notifier.error(&message);
            return ActionOutcome::Failed(message);
        }

        match self
            .gateway
            .update_delivery_date(&self.session, id, delivery_date)
            .await
        {
            Ok(order) => {
                self.collection.replace(order);
                self.runner
                    .notifier
                    .success("Delivery time updated.");
                ActionOutcome::Applied
            }
            Err(err) => self
                .runner
                .fail(&err, "Could not update the delivery time."),
        }
    }

    fn check_delivery_date(date: NaiveDateTime, now: NaiveDateTime) -> Result<(), OrderError> {
        if date < now {
            return Err(OrderError::DeliveryDateInPast);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::admin::collection::ScreenState;
    use crate::domain::errors::GatewayError;
    use crate::domain::order::value_objects::PaymentMethod;
    use crate::test_support::{
        MockDialog, MockNotify, MockOrderGw, accepting_dialogs, declining_dialogs, mock_logger,
        test_session,
    };
    use chrono::{Duration, NaiveDate};

    fn order(id: i64, order_status: OrderStatus, payment_status: PaymentStatus) -> Order {
        Order {
            id,
            fullname: "Le Van C".to_string(),
            email: Some("c@example.com".to_string()),
            phone_number: None,
            delivery_address: "12 Nguyen Hue".to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 5, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 0)),
            delivery_date: None,
            total_amount: 150_000.0,
            order_status,
            payment_status,
            payment_method: PaymentMethod::CashOnDelivery,
        }
    }

    fn quiet_notifier() -> MockNotify {
        let mut notifier = MockNotify::new();
        notifier.expect_success().returning(|_| ());
        notifier.expect_error().returning(|_| ());
        notifier
    }

    fn controller(
        session: Session,
        gateway: MockOrderGw,
        dialogs: MockDialog,
        notifier: MockNotify,
    ) -> OrderController {
        OrderController::new(
            session,
            Arc::new(gateway),
            Arc::new(dialogs),
            Arc::new(notifier),
            mock_logger(),
        )
    }

    fn gateway_with(orders: Vec<Order>) -> MockOrderGw {
        let mut gateway = MockOrderGw::new();
        gateway
            .expect_get_all()
            .times(1)
            .returning(move |_| Ok(orders.clone()));
        gateway
    }

    fn selecting(order_status: OrderStatus, payment_status: PaymentStatus) -> MockDialog {
        let mut dialogs = MockDialog::new();
        dialogs.expect_select_statuses().times(1).returning(move |_| {
            Some(StatusSelection {
                order_status,
                payment_status,
            })
        });
        dialogs
    }

    #[tokio::test]
    async fn should_fail_screen_without_calling_when_no_token() {
        let mut gateway = MockOrderGw::new();
        gateway.expect_get_all().never();
        let controller = controller(
            Session::anonymous(),
            gateway,
            accepting_dialogs(),
            quiet_notifier(),
        );

        controller.load().await;

        assert_eq!(
            controller.snapshot().state,
            ScreenState::Failed(LOGIN_REQUIRED.to_string())
        );
    }

    #[tokio::test]
    async fn should_confirm_pending_order_through_status_update() {
        let mut gateway = gateway_with(vec![order(1, OrderStatus::Pending, PaymentStatus::Pending)]);
        gateway
            .expect_update_status()
            .withf(|_, id, status| *id == 1 && *status == OrderStatus::Confirmed)
            .times(1)
            .returning(|_, id, status| Ok(order(id, status, PaymentStatus::Pending)));
        let controller = controller(test_session(), gateway, accepting_dialogs(), quiet_notifier());
        controller.load().await;

        assert_eq!(controller.confirm(1).await, ActionOutcome::Applied);
        assert_eq!(
            controller.find(1).map(|o| o.order_status),
            Some(OrderStatus::Confirmed)
        );
    }

    #[tokio::test]
    async fn should_not_call_when_confirmation_declined() {
        let mut gateway = gateway_with(vec![order(1, OrderStatus::Pending, PaymentStatus::Pending)]);
        gateway.expect_update_status().never();
        let controller = controller(test_session(), gateway, declining_dialogs(), quiet_notifier());
        controller.load().await;
        let before = controller.snapshot();

        assert_eq!(controller.cancel(1).await, ActionOutcome::Dismissed);
        assert_eq!(controller.snapshot(), before);
    }

    #[tokio::test]
    async fn should_keep_first_change_when_second_update_fails() {
        let mut gateway =
            gateway_with(vec![order(4, OrderStatus::Pending, PaymentStatus::Pending)]);
        gateway
            .expect_update_status()
            .times(1)
            .returning(|_, id, status| Ok(order(id, status, PaymentStatus::Pending)));
        gateway
            .expect_update_payment_status()
            .times(1)
            .returning(|_, _, _| Err(GatewayError::rejected(400, "Payment gateway unavailable")));
        let mut notifier = MockNotify::new();
        notifier.expect_success().times(1).returning(|_| ());
        notifier
            .expect_error()
            .withf(|message| message == "Payment gateway unavailable")
            .times(1)
            .returning(|_| ());
        let controller = controller(
            test_session(),
            gateway,
            selecting(OrderStatus::Confirmed, PaymentStatus::Paid),
            notifier,
        );
        controller.load().await;

        let outcome = controller.update_statuses(4).await;

        assert_eq!(
            outcome,
            ActionOutcome::Failed("Payment gateway unavailable".to_string())
        );
        let row = controller.find(4).unwrap();
        assert_eq!(row.order_status, OrderStatus::Confirmed);
        assert_eq!(row.payment_status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn should_skip_payment_call_when_order_status_update_fails() {
        let mut gateway =
            gateway_with(vec![order(4, OrderStatus::Confirmed, PaymentStatus::Pending)]);
        gateway
            .expect_update_status()
            .returning(|_, _, _| Err(GatewayError::unavailable("Connection refused")));
        gateway.expect_update_payment_status().never();
        let controller = controller(
            test_session(),
            gateway,
            selecting(OrderStatus::Shipping, PaymentStatus::Paid),
            quiet_notifier(),
        );
        controller.load().await;
        let before = controller.snapshot();

        let outcome = controller.update_statuses(4).await;

        assert!(matches!(outcome, ActionOutcome::Failed(_)));
        assert_eq!(controller.snapshot(), before);
    }

    #[tokio::test]
    async fn should_only_send_changed_fields() {
        let mut gateway =
            gateway_with(vec![order(4, OrderStatus::Confirmed, PaymentStatus::Pending)]);
        gateway.expect_update_status().never();
        gateway
            .expect_update_payment_status()
            .withf(|_, id, status| *id == 4 && *status == PaymentStatus::Paid)
            .times(1)
            .returning(|_, id, status| Ok(order(id, OrderStatus::Confirmed, status)));
        let controller = controller(
            test_session(),
            gateway,
            selecting(OrderStatus::Confirmed, PaymentStatus::Paid),
            quiet_notifier(),
        );
        controller.load().await;

        assert_eq!(controller.update_statuses(4).await, ActionOutcome::Applied);
        assert_eq!(
            controller.find(4).map(|o| o.payment_status),
            Some(PaymentStatus::Paid)
        );
    }

    #[tokio::test]
    async fn should_send_nothing_when_selection_unchanged() {
        let mut gateway =
            gateway_with(vec![order(4, OrderStatus::Shipping, PaymentStatus::Paid)]);
        gateway.expect_update_status().never();
        gateway.expect_update_payment_status().never();
        let controller = controller(
            test_session(),
            gateway,
            selecting(OrderStatus::Shipping, PaymentStatus::Paid),
            quiet_notifier(),
        );
        controller.load().await;

        assert_eq!(controller.update_statuses(4).await, ActionOutcome::Unchanged);
    }

    #[tokio::test]
    async fn should_preselect_current_statuses() {
        let gateway = gateway_with(vec![order(4, OrderStatus::Delivered, PaymentStatus::Refunded)]);
        let mut dialogs = MockDialog::new();
        dialogs
            .expect_select_statuses()
            .withf(|current| {
                current.order_status == OrderStatus::Delivered
                    && current.payment_status == PaymentStatus::Refunded
            })
            .times(1)
            .returning(|_| None);
        let controller = controller(test_session(), gateway, dialogs, quiet_notifier());
        controller.load().await;

        assert_eq!(controller.update_statuses(4).await, ActionOutcome::Dismissed);
    }

    #[tokio::test]
    async fn should_reject_delivery_date_in_the_past_without_calling() {
        let mut gateway =
            gateway_with(vec![order(4, OrderStatus::Confirmed, PaymentStatus::Pending)]);
        gateway.expect_update_delivery_date().never();
        let mut dialogs = MockDialog::new();
        dialogs
            .expect_pick_delivery_date()
            .returning(|| Some(Local::now().naive_local() - Duration::days(1)));
        let controller = controller(test_session(), gateway, dialogs, quiet_notifier());
        controller.load().await;

        let outcome = controller.update_delivery_date(4).await;

        assert!(matches!(outcome, ActionOutcome::Failed(_)));
        assert_eq!(controller.find(4).and_then(|o| o.delivery_date), None);
    }

    #[tokio::test]
    async fn should_store_returned_delivery_date() {
        let target = Local::now().naive_local() + Duration::days(2);
        let mut gateway =
            gateway_with(vec![order(4, OrderStatus::Confirmed, PaymentStatus::Pending)]);
        gateway
            .expect_update_delivery_date()
            .withf(move |_, id, date| *id == 4 && *date == target)
            .times(1)
            .returning(|_, id, date| {
                let mut updated = order(id, OrderStatus::Shipping, PaymentStatus::Pending);
                updated.delivery_date = Some(date);
                Ok(updated)
            });
        let mut dialogs = MockDialog::new();
        dialogs
            .expect_pick_delivery_date()
            .returning(move || Some(target));
        let controller = controller(test_session(), gateway, dialogs, quiet_notifier());
        controller.load().await;

        assert_eq!(controller.update_delivery_date(4).await, ActionOutcome::Applied);
        let row = controller.find(4).unwrap();
        assert_eq!(row.delivery_date, Some(target));
        assert_eq!(row.order_status, OrderStatus::Shipping);
    }

    #[tokio::test]
    async fn should_remove_cancelled_order_after_delete() {
        let mut gateway =
            gateway_with(vec![order(9, OrderStatus::Cancelled, PaymentStatus::Refunded)]);
        gateway.expect_delete().times(1).returning(|_, _| Ok(()));
        let controller = controller(test_session(), gateway, accepting_dialogs(), quiet_notifier());
        controller.load().await;

        assert_eq!(controller.delete(9).await, ActionOutcome::Applied);
        assert!(controller.snapshot().records.is_empty());
    }

    #[tokio::test]
    async fn should_request_cancel_through_dedicated_endpoint() {
        let mut gateway =
            gateway_with(vec![order(2, OrderStatus::Confirmed, PaymentStatus::Pending)]);
        gateway
            .expect_request_cancel()
            .times(1)
            .returning(|_, id| {
                Ok(order(id, OrderStatus::CancelRequested, PaymentStatus::Pending))
            });
        let controller = controller(test_session(), gateway, accepting_dialogs(), quiet_notifier());
        controller.load().await;

        assert_eq!(controller.request_cancel(2).await, ActionOutcome::Applied);
        assert_eq!(
            controller.find(2).map(|o| o.order_status),
            Some(OrderStatus::CancelRequested)
        );
    }

    #[test]
    fn should_accept_delivery_date_equal_to_now() {
        let now = Local::now().naive_local();
        assert!(OrderController::check_delivery_date(now, now).is_ok());
        assert_eq!(
            OrderController::check_delivery_date(now - Duration::minutes(1), now),
            Err(OrderError::DeliveryDateInPast)
        );
    }
}
