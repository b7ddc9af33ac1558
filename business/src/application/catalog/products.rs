use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{Category, Product, ProductDraft, ProductType};
use crate::domain::session::model::Session;

/// Product listing and admin product management.
pub struct ProductCatalog {
    pub session: Session,
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

impl ProductCatalog {
    pub async fn list(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.gateway.get_all(&self.session).await.map_err(|err| {
            if err.is_unauthorized() {
                self.logger.warn("Product list refused: login required");
                ProductError::LoginRequired
            } else {
                self.logger
                    .error(&format!("Failed to fetch products: {}", err));
                ProductError::Gateway(err)
            }
        })?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }

    pub async fn get(&self, id: i64) -> Result<Product, ProductError> {
        self.logger.info(&format!("Fetching product {}", id));
        Ok(self.gateway.get_by_id(&self.session, id).await?)
    }

    /// Blank names list the whole catalog.
    pub async fn search(&self, name: &str) -> Result<Vec<Product>, ProductError> {
        let name = name.trim();
        if name.is_empty() {
            return self.list().await;
        }
        self.logger
            .info(&format!("Searching products named '{}'", name));
        Ok(self.gateway.search(&self.session, name).await?)
    }

    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductError> {
        Self::validate(draft)?;
        let product = self.gateway.create(&self.session, draft).await?;
        self.logger
            .info(&format!("Product {} created", product.id));
        Ok(product)
    }

    pub async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, ProductError> {
        Self::validate(draft)?;
        let product = self.gateway.update(&self.session, id, draft).await?;
        self.logger.info(&format!("Product {} updated", id));
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProductError> {
        self.gateway.delete(&self.session, id).await?;
        self.logger.info(&format!("Product {} deleted", id));
        Ok(())
    }

    pub async fn product_types(&self) -> Result<Vec<ProductType>, ProductError> {
        Ok(self.gateway.product_types(&self.session).await?)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ProductError> {
        Ok(self.gateway.categories(&self.session).await?)
    }

    pub async fn best_sellers(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(products
            .into_iter()
            .filter(Product::is_best_seller)
            .collect())
    }

    fn validate(draft: &ProductDraft) -> Result<(), ProductError> {
        if draft.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        Ok(())
    }
}
