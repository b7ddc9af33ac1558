use std::sync::Arc;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Category, ProductType};
use crate::domain::session::model::Session;
use crate::domain::statistics::gateway::StatisticsGateway;
use crate::domain::statistics::model::{DashboardOverview, Summary, TopDish, TopUser};

pub const TOP_DISHES_LIMIT: u32 = 3;
pub const RECENT_ACTIVITIES_LIMIT: u32 = 7;
pub const TOP_USERS_LIMIT: u32 = 3;

/// Admin statistics dashboard.
pub struct Dashboard {
    pub session: Session,
    pub gateway: Arc<dyn StatisticsGateway>,
    pub logger: Arc<dyn Logger>,
}

impl Dashboard {
    pub async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.gateway.categories(&self.session).await
    }

    pub async fn product_types(&self) -> Result<Vec<ProductType>, GatewayError> {
        self.gateway.product_types(&self.session).await
    }

    pub async fn top_dishes(&self) -> Result<Vec<TopDish>, GatewayError> {
        self.gateway
            .top_dishes(&self.session, TOP_DISHES_LIMIT)
            .await
    }

    pub async fn recent_activities(&self) -> Result<Vec<String>, GatewayError> {
        self.gateway
            .recent_activities(&self.session, RECENT_ACTIVITIES_LIMIT)
            .await
    }

    pub async fn top_users(&self) -> Result<Vec<TopUser>, GatewayError> {
        self.gateway.top_users(&self.session, TOP_USERS_LIMIT).await
    }

    pub async fn summary(&self) -> Result<Summary, GatewayError> {
        self.gateway.summary(&self.session).await
    }

    /// Fetches every panel one after another; the first failure stops the rest.
    pub async fn load(&self) -> Result<DashboardOverview, GatewayError> {
        self.logger.info("Loading dashboard");
        let overview = self.load_panels().await.inspect_err(|err| {
            self.logger
                .error(&format!("Failed to load dashboard: {}", err))
        })?;

        self.logger.info(&format!(
            "Dashboard loaded: {} orders, revenue {}",
            overview.summary.total_orders, overview.summary.total_revenue
        ));
        Ok(overview)
    }

    async fn load_panels(&self) -> Result<DashboardOverview, GatewayError> {
        Ok(DashboardOverview {
            summary: self.summary().await?,
            top_dishes: self.top_dishes().await?,
            top_users: self.top_users().await?,
            recent_activities: self.recent_activities().await?,
            categories: self.categories().await?,
            product_types: self.product_types().await?,
        })
    }
}
