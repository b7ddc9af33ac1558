use crate::domain::product::model::{Category, ProductType};

/// A dish ranked by how many times it was ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct TopDish {
    pub product_id: i64,
    pub product_name: String,
    pub product_image: Option<String>,
    pub unit_price: f64,
    pub total_ordered: u64,
}

/// A customer ranked by spending. `orders` and `bookings` are the
/// backend's human-readable summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct TopUser {
    pub username: String,
    pub orders: String,
    pub bookings: String,
    pub total_spending: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_dishes: u64,
    pub total_users: u64,
    pub total_bookings: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_product_types: u64,
}

/// Everything the admin dashboard shows at once.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub summary: Summary,
    pub top_dishes: Vec<TopDish>,
    pub top_users: Vec<TopUser>,
    pub recent_activities: Vec<String>,
    pub categories: Vec<Category>,
    pub product_types: Vec<ProductType>,
}
