use serde::Deserialize;
use serde_json::Value;

use business::domain::cart::model::{Cart, CartItem};

use crate::envelope::unwrap_envelope;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    pub product_image: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartDto {
    pub cart_items: Vec<CartItemDto>,
    pub total_price: Option<f64>,
}

impl CartItemDto {
    pub fn into_domain(self) -> CartItem {
        CartItem {
            id: self.id,
            product_id: self.product_id,
            name: self.product_name,
            image: self.product_image,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl CartDto {
    /// Reads a cart from any of the envelopes the backend uses. A body with
    /// neither items nor total is an empty cart.
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        match unwrap_envelope(body, "cart") {
            Value::Null => Ok(Self::default()),
            value => serde_json::from_value(value)
                .map_err(|err| ApiError::Decode(format!("Unexpected cart payload: {}", err))),
        }
    }

    pub fn into_domain(self) -> Cart {
        Cart::new(
            self.cart_items
                .into_iter()
                .map(CartItemDto::into_domain)
                .collect(),
            self.total_price.unwrap_or(0.0),
        )
    }
}
