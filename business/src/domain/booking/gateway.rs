use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::session::model::Session;

use super::model::Booking;

/// Admin booking endpoints. Transitions answer with the updated booking.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn get_all(&self, session: &Session) -> Result<Vec<Booking>, GatewayError>;
    async fn get(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
    async fn confirm(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
    async fn cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
    async fn approve_cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
    async fn reject_cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError>;
    async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError>;
}
