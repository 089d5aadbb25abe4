use std::sync::Arc;
use tracing::{debug, warn};
use crate::models::auth::{AuthUser, LoginResponse};
use crate::repositories::local_storage_repo::KeyValueStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const AUTH_USER_KEY: &str = "authUser";

/// The authenticated session as kept in local storage: the raw token under
/// `authToken` and the JSON encoded profile under `authUser`.
#[derive(Clone)]
pub struct AuthStorage {
    store: Arc<dyn KeyValueStore>,
}

impl AuthStorage {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            store
        }
    }

    pub fn persist_session(
        &self,
        session: &LoginResponse,
    ) -> anyhow::Result<()> {
        let user = serde_json::to_string(&session.user)?;
        // A token is only ever stored next to its user.
        self.store.set_item(AUTH_USER_KEY, &user)?;
        if let Err(e) = self.store.set_item(AUTH_TOKEN_KEY, &session.token) {
            warn!("Failed to store token for user: {}, due to: {}", session.user.email, e);
            self.store.remove_item(AUTH_USER_KEY)?;
            return Err(e);
        }
        debug!("Stored session for user: {}", session.user.email);
        Ok(())
    }

    /// Returns `None` unless both keys are present.
    pub fn stored_session(&self) -> anyhow::Result<Option<LoginResponse>> {
        let token = self.store.get_item(AUTH_TOKEN_KEY)?;
        let user = self.store.get_item(AUTH_USER_KEY)?;

        match (token, user) {
            (Some(token), Some(user)) => {
                let user: AuthUser = serde_json::from_str(&user)?;
                Ok(Some(LoginResponse { token, user }))
            }
            _ => Ok(None),
        }
    }

    pub fn clear_session(&self) -> anyhow::Result<()> {
        let res = self
            .store
            .remove_item(AUTH_TOKEN_KEY)
            .and_then(|_| self.store.remove_item(AUTH_USER_KEY));
        if let Err(e) = &res {
            warn!("Failed to clear stored session due to: {}", e);
        }
        res
    }
}
