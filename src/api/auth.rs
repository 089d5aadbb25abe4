use serde_json::json;
use tracing::{info, warn};
use crate::api::ApiClient;
use crate::models::auth::{
    GoogleLoginRequest, GoogleLoginResponse, LoginRequest, LoginResponse, Role, SignInRequest,
};

impl ApiClient {
    /// Logs in and stores the returned token and user in local storage.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> anyhow::Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let login_res = self
            .send_json::<LoginResponse>(self.post(&["auth", "login"]).json(&body))
            .await;

        match login_res {
            Ok(session) => {
                self.storage.persist_session(&session)?;
                info!("Logged in as: {}", session.user.email);
                Ok(session)
            }
            Err(e) => {
                warn!("Failed to log in user: {}, due to: {}", email, e);
                Err(e.into())
            }
        }
    }

    /// Signs up as `OWNER` when `has_place` is set, `USER` otherwise, and
    /// stores the resulting session like `login` does.
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
        has_place: bool,
    ) -> anyhow::Result<LoginResponse> {
        let body = SignInRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            role: Role::from_has_place(has_place),
        };

        let register_res = self
            .send_json::<LoginResponse>(self.post(&["auth", "signin"]).json(&body))
            .await;

        match register_res {
            Ok(session) => {
                self.storage.persist_session(&session)?;
                info!("Registered user: {} as {}", session.user.email, body.role.as_str());
                Ok(session)
            }
            Err(e) => {
                warn!("Failed to register user: {}, due to: {}", email, e);
                Err(e.into())
            }
        }
    }

    /// Verifies a Google credential. Nothing is stored.
    pub async fn login_with_google(
        &self,
        token: &str,
    ) -> anyhow::Result<GoogleLoginResponse> {
        let body = GoogleLoginRequest {
            token: token.to_string(),
        };

        let google_res = self
            .send_json::<GoogleLoginResponse>(self.post(&["auth", "google"]).json(&body))
            .await;

        match google_res {
            Ok(res) => Ok(res),
            Err(e) => {
                warn!("Failed to log in with Google due to: {}", e);
                Err(e.into())
            }
        }
    }

    /// Invalidates the token server side. Local storage is left as is.
    pub async fn logout(
        &self,
        token: &str,
    ) -> anyhow::Result<()> {
        let logout_res = self
            .send(self.post(&["auth", "logout"]).bearer_auth(token).json(&json!({})))
            .await;

        match logout_res {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("Failed to log out due to: {}", e);
                Err(e.into())
            }
        }
    }
}
