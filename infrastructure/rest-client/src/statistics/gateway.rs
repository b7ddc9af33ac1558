use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::product::model::{Category, ProductType};
use business::domain::session::model::Session;
use business::domain::statistics::gateway::StatisticsGateway;
use business::domain::statistics::model::{Summary, TopDish, TopUser};

use super::dto::{SummaryDto, TopDishDto, TopUserDto};
use crate::client::ApiClient;
use crate::envelope::decode;
use crate::product::dto::NamedDto;

pub struct StatisticsGatewayHttp {
    client: Arc<ApiClient>,
}

impl StatisticsGatewayHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatisticsGateway for StatisticsGatewayHttp {
    async fn categories(&self, session: &Session) -> Result<Vec<Category>, GatewayError> {
        let body = self
            .client
            .get(session.token(), "/statistics/categories")
            .await?;
        let categories: Vec<NamedDto> = decode(body, "categories")?;
        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn product_types(&self, session: &Session) -> Result<Vec<ProductType>, GatewayError> {
        let body = self
            .client
            .get(session.token(), "/statistics/product-types")
            .await?;
        let types: Vec<NamedDto> = decode(body, "productTypes")?;
        Ok(types.into_iter().map(ProductType::from).collect())
    }

    async fn top_dishes(
        &self,
        session: &Session,
        limit: u32,
    ) -> Result<Vec<TopDish>, GatewayError> {
        let body = self
            .client
            .get_with_query(
                session.token(),
                "/statistics/top-dishes",
                &[("limit", limit.to_string())],
            )
            .await?;
        let dishes: Vec<TopDishDto> = decode(body, "topDishes")?;
        Ok(dishes.into_iter().map(TopDishDto::into_domain).collect())
    }

    async fn recent_activities(
        &self,
        session: &Session,
        limit: u32,
    ) -> Result<Vec<String>, GatewayError> {
        let body = self
            .client
            .get_with_query(
                session.token(),
                "/statistics/recent-activities",
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(decode(body, "activities")?)
    }

    async fn top_users(&self, session: &Session, limit: u32) -> Result<Vec<TopUser>, GatewayError> {
        let body = self
            .client
            .get_with_query(
                session.token(),
                "/statistics/top-users",
                &[("limit", limit.to_string())],
            )
            .await?;
        let users: Vec<TopUserDto> = decode(body, "topUsers")?;
        Ok(users.into_iter().map(TopUserDto::into_domain).collect())
    }

    async fn summary(&self, session: &Session) -> Result<Summary, GatewayError> {
        let body = self
            .client
            .get(session.token(), "/statistics/summary")
            .await?;
        Ok(decode::<SummaryDto>(body, "summary")?.into_domain())
    }
}
