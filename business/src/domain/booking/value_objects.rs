use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    CancelRequested,
}

impl BookingStatus {
    /// Row actions offered for a booking in this status. The backend still
    /// decides whether a transition is legal.
    pub fn allowed_actions(&self) -> Vec<BookingAction> {
        let mut actions = vec![BookingAction::ViewDetails];
        match self {
            BookingStatus::Pending => {
                actions.push(BookingAction::Confirm);
                actions.push(BookingAction::Cancel);
            }
            BookingStatus::CancelRequested => {
                actions.push(BookingAction::ApproveCancel);
                actions.push(BookingAction::RejectCancel);
            }
            BookingStatus::Confirmed | BookingStatus::Cancelled => {}
        }
        actions.push(BookingAction::Delete);
        actions
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "PENDING"),
            BookingStatus::Confirmed => write!(f, "CONFIRMED"),
            BookingStatus::Cancelled => write!(f, "CANCELLED"),
            BookingStatus::CancelRequested => write!(f, "CANCEL_REQUESTED"),
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "CANCEL_REQUESTED" => Ok(BookingStatus::CancelRequested),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Dining area. Values the client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingArea {
    Indoor,
    Vip,
    Outdoor,
    Terrace,
    Other(String),
}

impl std::fmt::Display for BookingArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingArea::Indoor => write!(f, "indoor"),
            BookingArea::Vip => write!(f, "vip"),
            BookingArea::Outdoor => write!(f, "outdoor"),
            BookingArea::Terrace => write!(f, "terrace"),
            BookingArea::Other(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<&str> for BookingArea {
    fn from(s: &str) -> Self {
        match s {
            "indoor" => BookingArea::Indoor,
            "vip" => BookingArea::Vip,
            "outdoor" => BookingArea::Outdoor,
            "terrace" => BookingArea::Terrace,
            other => BookingArea::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    ViewDetails,
    Confirm,
    Cancel,
    ApproveCancel,
    RejectCancel,
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_offer_confirm_and_cancel_when_pending() {
        let actions = BookingStatus::Pending.allowed_actions();

        assert!(actions.contains(&BookingAction::Confirm));
        assert!(actions.contains(&BookingAction::Cancel));
        assert!(!actions.contains(&BookingAction::ApproveCancel));
    }

    #[test]
    fn should_offer_approve_and_reject_when_cancel_requested() {
        let actions = BookingStatus::CancelRequested.allowed_actions();

        assert!(actions.contains(&BookingAction::ApproveCancel));
        assert!(actions.contains(&BookingAction::RejectCancel));
        assert!(!actions.contains(&BookingAction::Confirm));
    }

    #[test]
    fn should_always_offer_details_and_delete() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::CancelRequested,
        ] {
            let actions = status.allowed_actions();
            assert!(actions.contains(&BookingAction::ViewDetails));
            assert!(actions.contains(&BookingAction::Delete));
        }
    }

    #[test]
    fn should_round_trip_status_through_display() {
        let parsed: BookingStatus = BookingStatus::CancelRequested.to_string().parse().unwrap();
        assert_eq!(parsed, BookingStatus::CancelRequested);
    }

    #[test]
    fn should_keep_unknown_area_verbatim() {
        assert_eq!(BookingArea::from("vip"), BookingArea::Vip);
        assert_eq!(
            BookingArea::from("rooftop"),
            BookingArea::Other("rooftop".to_string())
        );
        assert_eq!(BookingArea::from("rooftop").to_string(), "rooftop");
    }
}
