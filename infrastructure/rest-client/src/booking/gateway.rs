use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use business::domain::booking::gateway::BookingGateway;
use business::domain::booking::model::Booking;
use business::domain::errors::GatewayError;
use business::domain::session::model::Session;

use super::dto::BookingDto;
use crate::client::ApiClient;
use crate::envelope::decode;

pub struct BookingGatewayHttp {
    client: Arc<ApiClient>,
}

impl BookingGatewayHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn transition(
        &self,
        session: &Session,
        id: i64,
        action: &str,
    ) -> Result<Booking, GatewayError> {
        debug!(id, action, "Booking transition");
        let path = format!("/admin/bookings/{}/{}", id, action);
        let body = self.client.put_query(session.token(), &path, &[]).await?;
        Ok(decode::<BookingDto>(body, "booking")?.into_domain())
    }
}

#[async_trait]
impl BookingGateway for BookingGatewayHttp {
    async fn get_all(&self, session: &Session) -> Result<Vec<Booking>, GatewayError> {
        let body = self.client.get(session.token(), "/admin/bookings").await?;
        let bookings: Vec<BookingDto> = decode(body, "bookings")?;
        Ok(bookings.into_iter().map(BookingDto::into_domain).collect())
    }

    async fn get(&self, session: &Session, id: i64) -> Result<Booking, GatewayError> {
        let path = format!("/admin/bookings/{}", id);
        let body = self.client.get(session.token(), &path).await?;
        Ok(decode::<BookingDto>(body, "booking")?.into_domain())
    }

    async fn confirm(&self, session: &Session, id: i64) -> Result<Booking, GatewayError> {
        self.transition(session, id, "confirm").await
    }

    async fn cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError> {
        self.transition(session, id, "cancel").await
    }

    async fn approve_cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError> {
        self.transition(session, id, "approve-cancel").await
    }

    async fn reject_cancel(&self, session: &Session, id: i64) -> Result<Booking, GatewayError> {
        self.transition(session, id, "reject-cancel").await
    }

    async fn delete(&self, session: &Session, id: i64) -> Result<(), GatewayError> {
        let path = format!("/admin/bookings/{}", id);
        self.client.delete(session.token(), &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::test_server::{CannedResponse, TestServer};
    use business::domain::booking::value_objects::BookingStatus;
    use serde_json::{Value, json};

    fn booking_json(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "fullName": "Nguyen Van A",
            "phoneNumber": "0912345678",
            "bookingDate": "2025-06-01",
            "bookingTime": "19:00",
            "numberOfGuests": 2,
            "area": "vip",
            "status": status
        })
    }

    fn gateway(server: &TestServer) -> BookingGatewayHttp {
        BookingGatewayHttp::new(Arc::new(
            ApiClient::new(&ApiConfig::new(server.base_url())).unwrap(),
        ))
    }

    #[tokio::test]
    async fn should_list_bare_array() {
        let server = TestServer::start(vec![CannedResponse::json(
            200,
            json!([booking_json(1, "PENDING"), booking_json(2, "CONFIRMED")]),
        )])
        .await;

        let bookings = gateway(&server)
            .get_all(&Session::authenticated("admin"))
            .await
            .unwrap();

        assert_eq!(bookings.len(), 2);
        assert_eq!(server.request(0).await.path, "/api/admin/bookings");
    }

    #[tokio::test]
    async fn should_list_wrapped_array() {
        let server = TestServer::start(vec![CannedResponse::json(
            200,
            json!({ "bookings": [booking_json(1, "PENDING")] }),
        )])
        .await;

        let bookings = gateway(&server).get_all(&Session::anonymous()).await.unwrap();

        assert_eq!(bookings[0].id, 1);
    }

    #[tokio::test]
    async fn should_put_transition_and_return_updated_booking() {
        let server = TestServer::start(vec![CannedResponse::json(
            200,
            json!({ "data": booking_json(7, "CONFIRMED") }),
        )])
        .await;

        let booking = gateway(&server)
            .confirm(&Session::authenticated("admin"), 7)
            .await
            .unwrap();

        let request = server.request(0).await;
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/api/admin/bookings/7/confirm");
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn should_use_dashed_paths_for_cancel_requests() {
        let server = TestServer::start(vec![
            CannedResponse::json(200, booking_json(7, "CANCELLED")),
            CannedResponse::json(200, booking_json(7, "CONFIRMED")),
        ])
        .await;
        let gateway = gateway(&server);
        let session = Session::authenticated("admin");

        gateway.approve_cancel(&session, 7).await.unwrap();
        gateway.reject_cancel(&session, 7).await.unwrap();

        assert_eq!(server.request(0).await.path, "/api/admin/bookings/7/approve-cancel");
        assert_eq!(server.request(1).await.path, "/api/admin/bookings/7/reject-cancel");
        assert_eq!(server.request_count().await, 2);
    }

    #[tokio::test]
    async fn should_delete_by_id() {
        let server = TestServer::start(vec![CannedResponse::empty(200)]).await;

        gateway(&server)
            .delete(&Session::authenticated("admin"), 4)
            .await
            .unwrap();

        let request = server.request(0).await;
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/api/admin/bookings/4");
    }

    #[tokio::test]
    async fn should_report_unexpected_payload() {
        let server = TestServer::start(vec![CannedResponse::text(200, "OK")]).await;

        let err = gateway(&server)
            .get(&Session::anonymous(), 1)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
