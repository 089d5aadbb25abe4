use tracing::{info, warn};
use crate::api::AccountApi;
use crate::views::Route;

pub const GOOGLE_ERROR_MESSAGE: &str = "Error al iniciar sesión con Google.";

/// Third party sign in shown under the register form.
#[derive(Clone, Debug, Default)]
pub struct GoogleAuth {
    error: String,
}

impl GoogleAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    /// Returns the route to go to once the credential checks out.
    pub async fn sign_in<A: AccountApi + ?Sized>(
        &mut self,
        api: &A,
        credential: &str,
    ) -> Option<Route> {
        self.error.clear();

        match api.login_with_google(credential).await {
            Ok(res) if res.valid => {
                if let Some(user) = &res.user {
                    info!("Google sign in accepted for: {}", user.email);
                }
                Some(Route::Home)
            }
            Ok(_) => {
                warn!("Google credential was rejected by the backend");
                self.error = GOOGLE_ERROR_MESSAGE.to_string();
                None
            }
            Err(e) => {
                warn!("Google sign in failed due to: {}", e);
                self.error = GOOGLE_ERROR_MESSAGE.to_string();
                None
            }
        }
    }
}
