use chrono::NaiveDate;
use serde::Deserialize;

use business::domain::booking::model::Booking;
use business::domain::booking::value_objects::{BookingArea, BookingStatus};

use crate::timestamp::parse_timestamp;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub booking_date: NaiveDate,
    #[serde(default)]
    pub booking_time: String,
    #[serde(default)]
    pub number_of_guests: u32,
    #[serde(default)]
    pub area: String,
    pub special_requests: Option<String>,
    pub created_at: Option<String>,
    pub username: Option<String>,
    pub status: BookingStatus,
}

impl BookingDto {
    pub fn into_domain(self) -> Booking {
        Booking {
            id: self.id,
            full_name: self.full_name,
            phone_number: self.phone_number,
            booking_date: self.booking_date,
            booking_time: self.booking_time,
            number_of_guests: self.number_of_guests,
            area: BookingArea::from(self.area.as_str()),
            special_requests: self.special_requests.filter(|s| !s.trim().is_empty()),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            username: self.username,
            status: self.status,
        }
    }
}
