use anyhow::bail;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use crate::models::auth::{GoogleLoginResponse, LoginResponse};
use crate::repositories::auth_storage::AuthStorage;

pub mod auth;
pub mod places;
pub mod promotions;
pub mod reservations;
pub mod reviews;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Thin client over the places REST backend.
///
/// Every operation is exactly one HTTP request. Transport failures and non-2xx
/// statuses are logged and handed back as the untouched `reqwest::Error`, so
/// callers that care can `downcast_ref::<reqwest::Error>()` for the status.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    storage: AuthStorage,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        storage: AuthStorage,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            bail!("API url {} cannot carry a path", base_url);
        }

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            storage,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn storage(&self) -> &AuthStorage {
        &self.storage
    }

    pub fn stored_session(&self) -> anyhow::Result<Option<LoginResponse>> {
        self.storage.stored_session()
    }

    /// `logout` leaves local storage untouched; callers drop the session here.
    pub fn clear_session(&self) -> anyhow::Result<()> {
        self.storage.clear_session()
    }

    /// Base URL plus the given path segments, each percent-encoded.
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
    ) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn get(&self, segments: &[&str]) -> RequestBuilder {
        self.http.get(self.endpoint(segments))
    }

    pub(crate) fn post(&self, segments: &[&str]) -> RequestBuilder {
        self.http.post(self.endpoint(segments))
    }

    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
    ) -> reqwest::Result<Response> {
        request.send().await?.error_for_status()
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> reqwest::Result<T> {
        self.send(request).await?.json::<T>().await
    }
}

/// Account operations the views depend on.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
        has_place: bool,
    ) -> anyhow::Result<LoginResponse>;

    async fn login_with_google(
        &self,
        token: &str,
    ) -> anyhow::Result<GoogleLoginResponse>;
}

#[async_trait]
impl AccountApi for ApiClient {
    async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
        has_place: bool,
    ) -> anyhow::Result<LoginResponse> {
        ApiClient::register(self, email, name, password, has_place).await
    }

    async fn login_with_google(
        &self,
        token: &str,
    ) -> anyhow::Result<GoogleLoginResponse> {
        ApiClient::login_with_google(self, token).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use super::*;
    use crate::repositories::local_storage_repo::MemoryStore;

    pub fn client_for(base_url: &str) -> (ApiClient, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(base_url, AuthStorage::new(store.clone())).unwrap();
        (client, store)
    }

    #[test]
    fn endpoint_appends_encoded_segments() {
        let (client, _) = client_for("http://localhost:8080");
        assert_eq!(
            client.endpoint(&["places", "42"]).as_str(),
            "http://localhost:8080/places/42"
        );
        assert_eq!(
            client.endpoint(&["places", "name", "Café Central/2"]).as_str(),
            "http://localhost:8080/places/name/Caf%C3%A9%20Central%2F2"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let (client, _) = client_for("http://example.com/api/");
        assert_eq!(
            client.endpoint(&["map", "places"]).as_str(),
            "http://example.com/api/map/places"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        let store = Arc::new(MemoryStore::new());
        assert!(ApiClient::new("not a url", AuthStorage::new(store.clone())).is_err());
        assert!(ApiClient::new("mailto:someone@example.com", AuthStorage::new(store)).is_err());
    }
}
