use serde::{Deserialize, Serialize};

use business::domain::product::model::{Category, Product, ProductDraft, ProductType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    pub description: Option<String>,
    pub img: Option<String>,
    pub category_name: Option<String>,
    pub product_type_name: Option<String>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            img: self.img,
            category_name: self.category_name,
            product_type_name: self.product_type_name,
        }
    }
}

/// `{id, name}` pair used for both categories and product types.
#[derive(Debug, Deserialize)]
pub struct NamedDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl From<NamedDto> for Category {
    fn from(dto: NamedDto) -> Self {
        Category {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<NamedDto> for ProductType {
    fn from(dto: NamedDto) -> Self {
        ProductType {
            id: dto.id,
            name: dto.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraftDto<'a> {
    pub name: &'a str,
    pub price: f64,
    pub description: Option<&'a str>,
    pub img: Option<&'a str>,
    pub category_id: Option<i64>,
    pub product_type_id: Option<i64>,
}

impl<'a> From<&'a ProductDraft> for ProductDraftDto<'a> {
    fn from(draft: &'a ProductDraft) -> Self {
        Self {
            name: draft.name.trim(),
            price: draft.price,
            description: draft.description.as_deref(),
            img: draft.img.as_deref(),
            category_id: draft.category_id,
            product_type_id: draft.product_type_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_draft_in_camel_case() {
        let draft = ProductDraft {
            name: " Cơm tấm ".to_string(),
            price: 40_000.0,
            description: None,
            img: Some("com-tam.jpg".to_string()),
            category_id: Some(1),
            product_type_id: Some(2),
        };

        let value = serde_json::to_value(ProductDraftDto::from(&draft)).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Cơm tấm",
                "price": 40000.0,
                "description": null,
                "img": "com-tam.jpg",
                "categoryId": 1,
                "productTypeId": 2
            })
        );
    }
}
