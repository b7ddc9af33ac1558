#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("order.delivery_date_in_past")]
    DeliveryDateInPast,
}
