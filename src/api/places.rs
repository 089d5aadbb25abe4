use serde_json::json;
use tracing::{debug, warn};
use crate::api::ApiClient;
use crate::models::place::Place;

impl ApiClient {
    pub async fn get_all_places_for_map(&self) -> anyhow::Result<Vec<Place>> {
        let places_res = self
            .send_json::<Vec<Place>>(self.get(&["map", "places"]))
            .await;

        match places_res {
            Ok(places) => {
                debug!("Retrieved {} places for the map", places.len());
                Ok(places)
            }
            Err(e) => {
                warn!("Failed to retrieve places for the map due to: {}", e);
                Err(e.into())
            }
        }
    }

    pub async fn get_place_by_id(
        &self,
        id: &str,
    ) -> anyhow::Result<Place> {
        let place_res = self
            .send_json::<Place>(self.get(&["places", id]))
            .await;

        match place_res {
            Ok(place) => {
                debug!("Retrieved place with id: {}", id);
                Ok(place)
            }
            Err(e) => {
                warn!("Failed to retrieve place with id: {}, due to: {}", id, e);
                Err(e.into())
            }
        }
    }

    pub async fn get_place_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Place> {
        let place_res = self
            .send_json::<Place>(self.get(&["places", "name", name]))
            .await;

        match place_res {
            Ok(place) => {
                debug!("Retrieved place with name: {}", name);
                Ok(place)
            }
            Err(e) => {
                warn!("Failed to retrieve place with name: {}, due to: {}", name, e);
                Err(e.into())
            }
        }
    }

    pub async fn get_nearby_places(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<Vec<Place>> {
        let request = self
            .get(&["places", "nearby"])
            .query(&[("latitude", latitude), ("longitude", longitude)]);

        match self.send_json::<Vec<Place>>(request).await {
            Ok(places) => Ok(places),
            Err(e) => {
                warn!("Failed to retrieve places near ({}, {}) due to: {}", latitude, longitude, e);
                Err(e.into())
            }
        }
    }

    /// Likes the place, or removes the like if the user already gave one.
    /// Returns the place as it stands afterwards.
    pub async fn toggle_like(
        &self,
        id: &str,
        token: &str,
    ) -> anyhow::Result<Place> {
        let request = self
            .post(&["places", id, "like"])
            .bearer_auth(token)
            .json(&json!({}));

        match self.send_json::<Place>(request).await {
            Ok(place) => Ok(place),
            Err(e) => {
                warn!("Failed to toggle like for place with id: {}, due to: {}", id, e);
                Err(e.into())
            }
        }
    }
}
