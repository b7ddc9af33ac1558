use serde::{Deserialize, Serialize};

use business::domain::order::model::{DirectOrderRequest, Order};
use business::domain::order::value_objects::{OrderStatus, PaymentMethod, PaymentStatus};

use crate::timestamp::parse_timestamp;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    #[serde(default)]
    pub fullname: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub delivery_address: String,
    pub order_date: Option<String>,
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
}

impl OrderDto {
    pub fn into_domain(self) -> Order {
        Order {
            id: self.id,
            fullname: self.fullname,
            email: self.email,
            phone_number: self.phone_number,
            delivery_address: self.delivery_address,
            order_date: self.order_date.as_deref().and_then(parse_timestamp),
            delivery_date: self.delivery_date.as_deref().and_then(parse_timestamp),
            total_amount: self.total_amount,
            order_status: self.order_status,
            payment_status: self.payment_status,
            payment_method: self.payment_method,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectOrderRequestDto<'a> {
    pub product_id: i64,
    pub quantity: u32,
    pub fullname: &'a str,
    pub phone_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    pub delivery_address: &'a str,
    pub payment_method: PaymentMethod,
}

impl<'a> From<&'a DirectOrderRequest> for DirectOrderRequestDto<'a> {
    fn from(request: &'a DirectOrderRequest) -> Self {
        Self {
            product_id: request.product_id,
            quantity: request.quantity,
            fullname: &request.fullname,
            phone_number: &request.phone_number,
            email: request.email.as_deref(),
            delivery_address: &request.delivery_address,
            payment_method: request.payment_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_map_wire_order() {
        let dto: OrderDto = serde_json::from_value(json!({
            "id": 12,
            "fullname": "Le Van C",
            "deliveryAddress": "12 Nguyen Hue",
            "orderDate": "2025-05-01T12:00:00",
            "deliveryDate": null,
            "totalAmount": 150000,
            "orderStatus": "SHIPPING",
            "paymentStatus": "PAID",
            "paymentMethod": "ONLINE_PAYMENT"
        }))
        .unwrap();

        let order = dto.into_domain();

        assert_eq!(order.order_status, OrderStatus::Shipping);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.delivery_date, None);
        assert!(order.order_date.is_some());
        assert_eq!(order.email, None);
    }

    #[test]
    fn should_serialize_direct_order_in_camel_case() {
        let request = DirectOrderRequest {
            product_id: 5,
            quantity: 2,
            fullname: "Le Van C".to_string(),
            phone_number: "0987654321".to_string(),
            email: None,
            delivery_address: "12 Nguyen Hue".to_string(),
            payment_method: PaymentMethod::CashOnDelivery,
        };

        let value = serde_json::to_value(DirectOrderRequestDto::from(&request)).unwrap();

        assert_eq!(
            value,
            json!({
                "productId": 5,
                "quantity": 2,
                "fullname": "Le Van C",
                "phoneNumber": "0987654321",
                "deliveryAddress": "12 Nguyen Hue",
                "paymentMethod": "CASH_ON_DELIVERY"
            })
        );
    }
}
