use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::debug;

use business::domain::errors::GatewayError;
use business::domain::order::gateway::OrderGateway;
use business::domain::order::model::{DirectOrderRequest, Order};
use business::domain::order::value_objects::{OrderStatus, PaymentStatus};
use business::domain::session::model::Session;

use super::dto::{DirectOrderRequestDto, OrderDto};
use crate::client::{ApiClient, Query};
use crate::envelope::decode;
use crate::timestamp::format_timestamp;

pub struct OrderGatewayHttp {
    client: Arc<ApiClient>,
}

impl OrderGatewayHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn put(
        &self,
        session: &Session,
        id: i64,
        action: &str,
        query: Query<'_>,
    ) -> Result<Order, GatewayError> {
        debug!(id, action, "Order update");
        let path = format!("/admin/orders/{}/{}", id, action);
        let body = self.client.put_query(session.token(), &path, query).await?;
        Ok(decode::<OrderDto>(body, "order")?.into_domain())
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn get_all(&self, session: &Session) -> Result<Vec<Order>, GatewayError> {
        let body = self.client.get(session.token(), "/admin/orders").await?;
        let orders: Vec<OrderDto> = decode(body, "orders")?;
        Ok(orders.into_iter().map(OrderDto::into_domain).collect())
    }

    async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: OrderStatus,
    ) -> Result<Order, GatewayError> {
        self.put(session, id, "status", &[("status", status.to_string())])
            .await
    }

    async fn update_payment_status(
        &self,
        session: &Session,
        id: i64,
        status: PaymentStatus,
    ) -> Result<Order, GatewayError> {
        self.put(
            session,
            id,
            "payment-status",
            &[("paymentStatus", status.to_string())],
        )
        .await
    }

    async fn update_delivery_date(
        &self,
        session: &Session,
        id: i64,
        delivery_date: NaiveDateTime,
    ) -> Result<Order, GatewayError> {
        self.put(
            session,
            id,
            "delivery-date",
            &[("deliveryDate", format_timestamp(&delivery_date))],
        )
        .await
    }

    async fn request_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError> {
        self.put(session, id, "cancel", &[]).await
    }

    async fn approve_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError> {
        self.put(session, id, "approve-cancel", &[]).await
    }

    async fn reject_cancel(&self, session: &Session, id: i64) -> Result<Order, GatewayError> {
        self.put(session, id, "reject-cancel", &[]).await
    }

    async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError> {
        let path = format!("/admin/orders/{}", id);
        self.client.delete(session.token(), &path).await?;
        Ok(())
    }

    async fn create_direct(
        &self,
        session: &Session,
        request: &DirectOrderRequest,
    ) -> Result<Order, GatewayError> {
        debug!(product_id = request.product_id, "Placing direct order");
        let body = self
            .client
            .post_json(
                session.token(),
                "/orders/direct",
                &DirectOrderRequestDto::from(request),
            )
            .await?;
        Ok(decode::<OrderDto>(body, "order")?.into_domain())
    }
}
