use tracing::warn;
use crate::api::ApiClient;
use crate::models::promotion::Promotion;

impl ApiClient {
    pub async fn get_promotions_by_place(
        &self,
        place_id: &str,
        token: &str,
    ) -> anyhow::Result<Vec<Promotion>> {
        let request = self
            .get(&["promotions", "place", place_id])
            .bearer_auth(token);

        match self.send_json::<Vec<Promotion>>(request).await {
            Ok(promotions) => Ok(promotions),
            Err(e) => {
                warn!("Failed to retrieve promotions for place with id: {}, due to: {}", place_id, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use crate::api::tests::client_for;
    use crate::helpers::mock_backend::MockBackend;

    #[tokio::test]
    async fn promotions_are_fetched_with_bearer_token() {
        let backend = MockBackend::start().await;
        backend.reply(
            Method::GET,
            "/promotions/place/5",
            StatusCode::OK,
            Some(json!([{
                "id": 9,
                "description": "Happy hour",
                "discount": 20.0,
                "startDate": "2024-03-01",
                "endDate": "2024-03-31",
                "placeName": "Bar Nacional",
                "imageUrl": null
            }])),
        );
        let (client, _) = client_for(&backend.url());

        let promotions = client.get_promotions_by_place("5", "jwt-123").await.unwrap();

        assert_eq!(promotions.len(), 1);
        assert_eq!(promotions[0].place_name.as_deref(), Some("Bar Nacional"));
        assert_eq!(promotions[0].image_url, None);
        let request = backend.only_request();
        assert_eq!(request.path, "/promotions/place/5");
        assert_eq!(request.authorization.as_deref(), Some("Bearer jwt-123"));
    }

    #[tokio::test]
    async fn rejected_token_is_an_error() {
        let backend = MockBackend::start().await;
        backend.reply(Method::GET, "/promotions/place/5", StatusCode::FORBIDDEN, None);
        let (client, _) = client_for(&backend.url());

        let err = client.get_promotions_by_place("5", "expired").await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<reqwest::Error>().unwrap().status(),
            Some(reqwest::StatusCode::FORBIDDEN)
        );
    }
}
