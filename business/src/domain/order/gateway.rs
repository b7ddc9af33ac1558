use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::errors::GatewayError;
use crate::domain::session::model::Session;

use super::model::{DirectOrderRequest, Order};
use super::value_objects::{OrderStatus, PaymentStatus};

/// Order endpoints. Every transition answers with the updated order.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn get_all(&self, session: &Session) -> Result<Vec<Order>, GatewayError>;
    async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: OrderStatus,
    ) -> Result<Order, GatewayError>;
    async fn update_payment_status(
        &self,
        session: &Session,
        id: i64,
        status: PaymentStatus,
    ) -> Result<Order, GatewayError>;
    async fn update_delivery_date(
        &self,
        session: &Session,
        id: i64,
        delivery_date: NaiveDateTime,
    ) -> Result<Order, GatewayError>;
    async fn request_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError>;
    async fn approve_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError>;
    async fn reject_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError>;
    async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError>;
    async fn create_direct(
        &self,
        session: &Session,
        request: &DirectOrderRequest,
    ) -> Result<Order, GatewayError>;
}
