use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::session::model::Session;

use super::model::{Category, Product, ProductDraft, ProductType};

#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn get_all(&self, session: &Session) -> Result<Vec<Product>, GatewayError>;
    async fn get_by_id(&self, session: &Session, id: i64) -> Result<Product, GatewayError>;
    async fn search(&self, session: &Session, name: &str) -> Result<Vec<Product>, GatewayError>;
    async fn create(&self, session: &Session, draft: &ProductDraft)
    -> Result<Product, GatewayError>;
    async fn update(
        &self,
        session: &Session,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<Product, GatewayError>;
    async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError>;
    async fn product_types(&self, session: &Session) -> Result<Vec<ProductType>, GatewayError>;
    async fn categories(&self, session: &Session) -> Result<Vec<Category>, GatewayError>;
}
