use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::shared::record::Record;

use super::value_objects::{BookingArea, BookingStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub booking_date: NaiveDate,
    /// Time of day exactly as the backend formats it (`18:30` or `18:30:00`).
    pub booking_time: String,
    pub number_of_guests: u32,
    pub area: BookingArea,
    pub special_requests: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub username: Option<String>,
    pub status: BookingStatus,
}

impl Record for Booking {
    fn id(&self) -> i64 {
        self.id
    }
}
