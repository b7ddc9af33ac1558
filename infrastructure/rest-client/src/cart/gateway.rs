use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use business::domain::cart::gateway::CartGateway;
use business::domain::cart::model::Cart;
use business::domain::errors::GatewayError;
use business::domain::session::model::Session;

use super::dto::CartDto;
use crate::client::ApiClient;

pub struct CartGatewayHttp {
    client: Arc<ApiClient>,
}

impl CartGatewayHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartGateway for CartGatewayHttp {
    async fn get(&self, session: &Session) -> Result<Cart, GatewayError> {
        let body = self.client.get(session.token(), "/cart").await?;
        Ok(CartDto::from_body(body)?.into_domain())
    }

    async fn add(
        &self,
        session: &Session,
        product_id: i64,
        quantity: u32,
    ) -> Result<Cart, GatewayError> {
        debug!(product_id, quantity, "Adding to cart");
        let body = self
            .client
            .post_query(
                session.token(),
                "/cart/add",
                &[
                    ("productId", product_id.to_string()),
                    ("quantity", quantity.to_string()),
                ],
            )
            .await?;
        Ok(CartDto::from_body(body)?.into_domain())
    }

    async fn update(
        &self,
        session: &Session,
        product_id: i64,
        quantity: u32,
    ) -> Result<Cart, GatewayError> {
        debug!(product_id, quantity, "Updating cart quantity");
        let body = self
            .client
            .put_query(
                session.token(),
                "/cart/update",
                &[
                    ("productId", product_id.to_string()),
                    ("quantity", quantity.to_string()),
                ],
            )
            .await?;
        Ok(CartDto::from_body(body)?.into_domain())
    }

    async fn remove(&self, session: &Session, product_id: i64) -> Result<Cart, GatewayError> {
        let body = self
            .client
            .delete_query(
                session.token(),
                "/cart/remove",
                &[("productId", product_id.to_string())],
            )
            .await?;
        Ok(CartDto::from_body(body)?.into_domain())
    }

    async fn clear(&self, session: &Session) -> Result<(), GatewayError> {
        self.client.delete(session.token(), "/cart/clear").await?;
        Ok(())
    }
}
