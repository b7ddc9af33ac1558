use chrono::NaiveDateTime;

use crate::domain::shared::record::Record;

use super::value_objects::{OrderStatus, PaymentMethod, PaymentStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub fullname: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub delivery_address: String,
    pub order_date: Option<NaiveDateTime>,
    pub delivery_date: Option<NaiveDateTime>,
    pub total_amount: f64,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
}

impl Record for Order {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A single-product order placed without going through the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectOrderRequest {
    pub product_id: i64,
    pub quantity: u32,
    pub fullname: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
}
