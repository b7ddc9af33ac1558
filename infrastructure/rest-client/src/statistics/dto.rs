use serde::Deserialize;

use business::domain::statistics::model::{Summary, TopDish, TopUser};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDishDto {
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    pub product_image: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub total_ordered: u64,
}

impl TopDishDto {
    pub fn into_domain(self) -> TopDish {
        TopDish {
            product_id: self.product_id,
            product_name: self.product_name,
            product_image: self.product_image,
            unit_price: self.unit_price,
            total_ordered: self.total_ordered,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUserDto {
    pub username: String,
    #[serde(default)]
    pub orders: String,
    #[serde(default)]
    pub bookings: String,
    #[serde(default)]
    pub total_spending: f64,
}

impl TopUserDto {
    pub fn into_domain(self) -> TopUser {
        TopUser {
            username: self.username,
            orders: self.orders,
            bookings: self.bookings,
            total_spending: self.total_spending,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryDto {
    pub total_dishes: u64,
    pub total_users: u64,
    pub total_bookings: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_product_types: u64,
}

impl SummaryDto {
    pub fn into_domain(self) -> Summary {
        Summary {
            total_dishes: self.total_dishes,
            total_users: self.total_users,
            total_bookings: self.total_bookings,
            total_orders: self.total_orders,
            total_revenue: self.total_revenue,
            total_product_types: self.total_product_types,
        }
    }
}
