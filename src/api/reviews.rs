use tracing::{info, warn};
use crate::api::ApiClient;
use crate::models::review::NewReview;

impl ApiClient {
    /// Posts a review; the response body, if any, is ignored.
    pub async fn create_review(
        &self,
        new_review: &NewReview,
        token: &str,
    ) -> anyhow::Result<()> {
        let request = self
            .post(&["review", "new"])
            .bearer_auth(token)
            .json(new_review);

        match self.send(request).await {
            Ok(_) => {
                info!("Created review for place: {}", new_review.place_id);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to create review for place: {}, due to: {}", new_review.place_id, e);
                Err(e.into())
            }
        }
    }
}
