use tracing::{info, warn};
use crate::api::ApiClient;
use crate::models::reservation::{ReservationRequest, ReservationResponse};

impl ApiClient {
    pub async fn create_reservation(
        &self,
        reservation: &ReservationRequest,
        token: &str,
    ) -> anyhow::Result<ReservationResponse> {
        let request = self
            .post(&["reservations"])
            .bearer_auth(token)
            .json(reservation);

        match self.send_json::<ReservationResponse>(request).await {
            Ok(created) => {
                info!("Created reservation {} at place: {}", created.id, created.place_id);
                Ok(created)
            }
            Err(e) => {
                warn!("Failed to create reservation at place: {}, due to: {}", reservation.place_id, e);
                Err(e.into())
            }
        }
    }
}
