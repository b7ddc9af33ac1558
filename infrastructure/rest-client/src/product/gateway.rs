use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::{Category, Product, ProductDraft, ProductType};
use business::domain::session::model::Session;

use super::dto::{NamedDto, ProductDraftDto, ProductDto};
use crate::client::ApiClient;
use crate::envelope::decode;

pub struct ProductGatewayHttp {
    client: Arc<ApiClient>,
}

impl ProductGatewayHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn into_products(dtos: Vec<ProductDto>) -> Vec<Product> {
    dtos.into_iter().map(ProductDto::into_domain).collect()
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn get_all(&self, session: &Session) -> Result<Vec<Product>, GatewayError> {
        let body = self.client.get(session.token(), "/admin/products").await?;
        Ok(into_products(decode(body, "products")?))
    }

    async fn get_by_id(&self, session: &Session, id: i64) -> Result<Product, GatewayError> {
        let path = format!("/admin/products/{}", id);
        let body = self.client.get(session.token(), &path).await?;
        Ok(decode::<ProductDto>(body, "product")?.into_domain())
    }

    async fn search(&self, session: &Session, name: &str) -> Result<Vec<Product>, GatewayError> {
        let body = self
            .client
            .get_with_query(
                session.token(),
                "/admin/products/search",
                &[("name", name.to_string())],
            )
            .await?;
        Ok(into_products(decode(body, "products")?))
    }

    async fn create(
        &self,
        session: &Session,
        draft: &ProductDraft,
    ) -> Result<Product, GatewayError> {
        let body = self
            .client
            .post_json(session.token(), "/admin/products", &ProductDraftDto::from(draft))
            .await?;
        Ok(decode::<ProductDto>(body, "product")?.into_domain())
    }

    async fn update(
        &self,
        session: &Session,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<Product, GatewayError> {
        let path = format!("/admin/products/{}", id);
        let body = self
            .client
            .put_json(session.token(), &path, &ProductDraftDto::from(draft))
            .await?;
        Ok(decode::<ProductDto>(body, "product")?.into_domain())
    }

    async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError> {
        let path = format!("/admin/products/{}", id);
        self.client.delete(session.token(), &path).await?;
        Ok(())
    }

    async fn product_types(&self, session: &Session) -> Result<Vec<ProductType>, GatewayError> {
        let body = self.client.get(session.token(), "/product-types").await?;
        let types: Vec<NamedDto> = decode(body, "productTypes")?;
        Ok(types.into_iter().map(ProductType::from).collect())
    }

    async fn categories(&self, session: &Session) -> Result<Vec<Category>, GatewayError> {
        let body = self.client.get(session.token(), "/categories").await?;
        let categories: Vec<NamedDto> = decode(body, "categories")?;
        Ok(categories.into_iter().map(Category::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::test_server::{CannedResponse, TestServer};
    use serde_json::json;

    fn gateway(server: &TestServer) -> ProductGatewayHttp {
        ProductGatewayHttp::new(Arc::new(
            ApiClient::new(&ApiConfig::new(server.base_url())).unwrap(),
        ))
    }

    #[tokio::test]
    async fn should_unwrap_products_key() {
        let server = TestServer::start(vec![CannedResponse::json(
            200,
            json!({ "products": [
                { "id": 1, "name": "Phở bò", "price": 45000, "categoryName": "Bán chạy" },
                { "id": 2, "name": "Gỏi cuốn", "price": 30000 }
            ]}),
        )])
        .await;

        let products = gateway(&server)
            .get_all(&Session::authenticated("admin"))
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert!(products[0].is_best_seller());
        assert_eq!(products[1].category_name, None);
    }

    #[tokio::test]
    async fn should_encode_search_name() {
        let server = TestServer::start(vec![CannedResponse::json(200, json!({ "products": [] }))]).await;

        gateway(&server)
            .search(&Session::anonymous(), "bún chả")
            .await
            .unwrap();

        assert_eq!(
            server.request(0).await.path,
            "/api/admin/products/search?name=b%C3%BAn+ch%E1%BA%A3"
        );
    }

    #[tokio::test]
    async fn should_put_draft_and_unwrap_product_key() {
        let server = TestServer::start(vec![CannedResponse::json(
            200,
            json!({ "product": { "id": 9, "name": "Cơm tấm", "price": 40000 } }),
        )])
        .await;
        let draft = ProductDraft {
            name: "Cơm tấm".to_string(),
            price: 40_000.0,
            description: None,
            img: None,
            category_id: None,
            product_type_id: Some(2),
        };

        let product = gateway(&server)
            .update(&Session::authenticated("admin"), 9, &draft)
            .await
            .unwrap();

        let request = server.request(0).await;
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/api/admin/products/9");
        assert_eq!(request.json()["productTypeId"], json!(2));
        assert_eq!(product.name, "Cơm tấm");
    }

    #[tokio::test]
    async fn should_read_bare_categories() {
        let server = TestServer::start(vec![CannedResponse::json(
            200,
            json!([{ "id": 1, "name": "Bán chạy" }, { "id": 2, "name": "Món mới" }]),
        )])
        .await;

        let categories = gateway(&server).categories(&Session::anonymous()).await.unwrap();

        assert_eq!(categories[1], Category { id: 2, name: "Món mới".to_string() });
        assert_eq!(server.request(0).await.path, "/api/categories");
    }

    #[tokio::test]
    async fn should_keep_unauthorized_status() {
        let server = TestServer::start(vec![CannedResponse::empty(401)]).await;

        let err = gateway(&server).get_all(&Session::anonymous()).await.unwrap_err();

        assert!(err.is_unauthorized());
    }
}
