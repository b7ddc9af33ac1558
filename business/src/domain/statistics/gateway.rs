use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::product::model::{Category, ProductType};
use crate::domain::session::model::Session;

use super::model::{Summary, TopDish, TopUser};

#[async_trait]
pub trait StatisticsGateway: Send + Sync {
    async fn categories(&self, session: &Session) -> Result<Vec<Category>, GatewayError>;
    async fn product_types(&self, session: &Session) -> Result<Vec<ProductType>, GatewayError>;
    async fn top_dishes(&self, session: &Session, limit: u32)
    -> Result<Vec<TopDish>, GatewayError>;
    async fn recent_activities(
        &self,
        session: &Session,
        limit: u32,
    ) -> Result<Vec<String>, GatewayError>;
    async fn top_users(&self, session: &Session, limit: u32) -> Result<Vec<TopUser>, GatewayError>;
    async fn summary(&self, session: &Session) -> Result<Summary, GatewayError>;
}
