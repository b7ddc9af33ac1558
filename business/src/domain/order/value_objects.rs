use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
    CancelRequested,
}

impl OrderStatus {
    /// Row actions offered for an order in this status. The backend still
    /// decides whether a transition is legal.
    pub fn allowed_actions(&self) -> Vec<OrderAction> {
        let mut actions = vec![OrderAction::ViewDetails];
        match self {
            OrderStatus::Pending => {
                actions.push(OrderAction::Confirm);
                actions.push(OrderAction::Cancel);
            }
            OrderStatus::CancelRequested => {
                actions.push(OrderAction::ApproveCancel);
                actions.push(OrderAction::RejectCancel);
            }
            OrderStatus::Cancelled => actions.push(OrderAction::Delete),
            OrderStatus::Confirmed | OrderStatus::Shipping | OrderStatus::Delivered => {
                actions.push(OrderAction::UpdateStatuses);
                actions.push(OrderAction::UpdateDeliveryDate);
            }
        }
        actions
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Confirmed => write!(f, "CONFIRMED"),
            OrderStatus::Shipping => write!(f, "SHIPPING"),
            OrderStatus::Delivered => write!(f, "DELIVERED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
            OrderStatus::CancelRequested => write!(f, "CANCEL_REQUESTED"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "SHIPPING" => Ok(OrderStatus::Shipping),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            "CANCEL_REQUESTED" => Ok(OrderStatus::CancelRequested),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Paid => write!(f, "PAID"),
            PaymentStatus::Failed => write!(f, "FAILED"),
            PaymentStatus::Refunded => write!(f, "REFUNDED"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PaymentStatus::Pending),
            "PAID" => Ok(PaymentStatus::Paid),
            "FAILED" => Ok(PaymentStatus::Failed),
            "REFUNDED" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CashOnDelivery,
    OnlinePayment,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CashOnDelivery => write!(f, "CASH_ON_DELIVERY"),
            PaymentMethod::OnlinePayment => write!(f, "ONLINE_PAYMENT"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH_ON_DELIVERY" => Ok(PaymentMethod::CashOnDelivery),
            "ONLINE_PAYMENT" => Ok(PaymentMethod::OnlinePayment),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    ViewDetails,
    Confirm,
    Cancel,
    ApproveCancel,
    RejectCancel,
    Delete,
    UpdateStatuses,
    UpdateDeliveryDate,
}
