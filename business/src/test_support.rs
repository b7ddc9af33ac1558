//! Mocks of the ports shared by the application tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockall::mock;

use crate::domain::booking::gateway::BookingGateway;
use crate::domain::booking::model::Booking;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::model::Cart;
use crate::domain::errors::GatewayError;
use crate::domain::interaction::{ConfirmRequest, Dialogs, Notifier, StatusSelection};
use crate::domain::logger::Logger;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::{DirectOrderRequest, Order};
use crate::domain::order::value_objects::{OrderStatus, PaymentStatus};
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{Category, Product, ProductDraft, ProductType};
use crate::domain::session::model::Session;
use crate::domain::statistics::gateway::StatisticsGateway;
use crate::domain::statistics::model::{Summary, TopDish, TopUser};

mock! {
    pub CartGw {}

    #[async_trait]
    impl CartGateway for CartGw {
        async fn get(&self, session: &Session) -> Result<Cart, GatewayError>;
        async fn add(&self, session: &Session, product_id: i64, quantity: u32) -> Result<Cart, GatewayError>;
        async fn update(&self, session: &Session, product_id: i64, quantity: u32) -> Result<Cart, GatewayError>;
        async fn remove(&self, session: &Session, product_id: i64) -> Result<Cart, GatewayError>;
        async fn clear(&self, session: &Session) -> Result<(), GatewayError>;
    }
}

mock! {
    pub BookingGw {}

    #[async_trait]
    impl BookingGateway for BookingGw {
        async fn get_all(&self, session: &Session) -> Result<Vec<Booking>, GatewayError>;
        async fn get(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
        async fn confirm(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
        async fn cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
        async fn approve_cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
        async fn reject_cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
        async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError>;
    }
}

mock! {
    pub OrderGw {}

    #[async_trait]
    impl OrderGateway for OrderGw {
        async fn get_all(&self, session: &Session) -> Result<Vec<Order>, GatewayError>;
        async fn update_status(&self, session: &Session, id: i64, status: OrderStatus) -> Result<Order, GatewayError>;
        async fn update_payment_status(&self, session: &Session, id: i64, status: PaymentStatus) -> Result<Order, GatewayError>;
        async fn update_delivery_date(&self, session: &Session, id: i64, delivery_date: NaiveDateTime) -> Result<Order, GatewayError>;
        async fn request_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError>;
        async fn approve_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError>;
        async fn reject_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError>;
        async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError>;
        async fn create_direct(&self, session: &Session, request: &DirectOrderRequest) -> Result<Order, GatewayError>;
    }
}

mock! {
    pub ProductGw {}

    #[async_trait]
    impl ProductGateway for ProductGw {
        async fn get_all(&self, session: &Session) -> Result<Vec<Product>, GatewayError>;
        async fn get_by_id(&self, session: &Session, id: i64) -> Result<Product, GatewayError>;
        async fn search(&self, session: &Session, name: &str) -> Result<Vec<Product>, GatewayError>;
        async fn create(&self, session: &Session, draft: &ProductDraft) -> Result<Product, GatewayError>;
        async fn update(&self, session: &Session, id: i64, draft: &ProductDraft) -> Result<Product, GatewayError>;
        async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError>;
        async fn product_types(&self, session: &Session) -> Result<Vec<ProductType>, GatewayError>;
        async fn categories(&self, session: &Session) -> Result<Vec<Category>, GatewayError>;
    }
}

mock! {
    pub StatisticsGw {}

    #[async_trait]
    impl StatisticsGateway for StatisticsGw {
        async fn categories(&self, session: &Session) -> Result<Vec<Category>, GatewayError>;
        async fn product_types(&self, session: &Session) -> Result<Vec<ProductType>, GatewayError>;
        async fn top_dishes(&self, session: &Session, limit: u32) -> Result<Vec<TopDish>, GatewayError>;
        async fn recent_activities(&self, session: &Session, limit: u32) -> Result<Vec<String>, GatewayError>;
        async fn top_users(&self, session: &Session, limit: u32) -> Result<Vec<TopUser>, GatewayError>;
        async fn summary(&self, session: &Session) -> Result<Summary, GatewayError>;
    }
}

mock! {
    pub Dialog {}

    #[async_trait]
    impl Dialogs for Dialog {
        async fn confirm(&self, request: &ConfirmRequest) -> bool;
        async fn select_statuses(&self, current: StatusSelection) -> Option<StatusSelection>;
        async fn pick_delivery_date(&self) -> Option<NaiveDateTime>;
    }
}

mock! {
    pub Notify {}

    impl Notifier for Notify {
        fn success(&self, message: &str);
        fn error(&self, message: &str);
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn accepting_dialogs() -> MockDialog {
    let mut dialogs = MockDialog::new();
    dialogs.expect_confirm().returning(|_| true);
    dialogs
}

pub fn declining_dialogs() -> MockDialog {
    let mut dialogs = MockDialog::new();
    dialogs.expect_confirm().returning(|_| false);
    dialogs
}

pub fn test_session() -> Session {
    Session::authenticated("test-token")
}
