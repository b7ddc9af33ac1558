/// Category name the storefront uses for its best-seller shelf.
pub const BEST_SELLING_CATEGORY: &str = "bán chạy";

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub img: Option<String>,
    pub category_name: Option<String>,
    pub product_type_name: Option<String>,
}

impl Product {
    pub fn is_best_seller(&self) -> bool {
        self.category_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase() == BEST_SELLING_CATEGORY)
    }
}

/// Fields sent when creating or editing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub img: Option<String>,
    pub category_id: Option<i64>,
    pub product_type_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
}
