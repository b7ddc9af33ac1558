use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::session::model::Session;

use super::model::Cart;

/// Remote cart endpoints. Every mutation answers with the full cart.
#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn get(&self, session: &Session) -> Result<Cart, GatewayError>;
    async fn add(
        &self,
        session: &Session,
        product_id: i64,
        quantity: u32,
    ) -> Result<Cart, GatewayError>;
    /// Sets the absolute quantity of a line.
    async fn update(
        &self,
        session: &Session,
        product_id: i64,
        quantity: u32,
    ) -> Result<Cart, GatewayError>;
    async fn remove(&self, session: &Session, product_id: i64) -> Result<Cart, GatewayError>;
    async fn clear(&self, session: &Session) -> Result<(), GatewayError>;
}
