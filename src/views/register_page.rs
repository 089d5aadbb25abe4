use tracing::{debug, info, warn};
use crate::api::AccountApi;
use crate::models::auth::Role;
use crate::views::Route;

pub const REGISTER_ERROR_MESSAGE: &str = "Error en el registro. Por favor, intente nuevamente.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Email,
    Name,
    Password,
}

/// What native form validation would refuse before submitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormViolation {
    Required(FormField),
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Registration succeeded and the page hands over to `Route`.
    Navigate(Route),
    /// Validation stopped the submit; nothing was sent.
    Blocked(Vec<FormViolation>),
    /// The request failed; the page now shows its error message.
    Failed,
}

/// Form state of the sign up page.
#[derive(Clone, Debug, Default)]
pub struct RegisterPage {
    email: String,
    name: String,
    password: String,
    show_password: bool,
    has_place: bool,
    error: String,
}

impl RegisterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Backs the "Yes" / "No" buttons.
    pub fn set_has_place(&mut self, has_place: bool) {
        self.has_place = has_place;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn has_place(&self) -> bool {
        self.has_place
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn visibility_toggle_label(&self) -> &'static str {
        if self.show_password {
            "Ocultar"
        } else {
            "Mostrar"
        }
    }

    pub fn role(&self) -> Role {
        Role::from_has_place(self.has_place)
    }

    pub fn error(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    pub fn validate(&self) -> Vec<FormViolation> {
        let mut violations = Vec::new();

        if self.email.is_empty() {
            violations.push(FormViolation::Required(FormField::Email));
        } else if !looks_like_email(&self.email) {
            violations.push(FormViolation::InvalidEmail);
        }
        if self.name.is_empty() {
            violations.push(FormViolation::Required(FormField::Name));
        }
        if self.password.is_empty() {
            violations.push(FormViolation::Required(FormField::Password));
        }

        violations
    }

    /// Submits the form through `api`. Any failure collapses into
    /// `REGISTER_ERROR_MESSAGE`; the underlying error is only logged.
    pub async fn submit<A: AccountApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> SubmitOutcome {
        self.error.clear();

        let violations = self.validate();
        if !violations.is_empty() {
            debug!("Register form blocked by: {:?}", violations);
            return SubmitOutcome::Blocked(violations);
        }

        debug!("Submitting registration for: {} as {}", self.email, self.role().as_str());
        let register_res = api
            .register(&self.email, &self.name, &self.password, self.has_place)
            .await;

        match register_res {
            Ok(session) => {
                info!("Register successful for: {}", session.user.email);
                SubmitOutcome::Navigate(Route::Home)
            }
            Err(e) => {
                warn!("Register failed due to: {}", e);
                self.error = REGISTER_ERROR_MESSAGE.to_string();
                SubmitOutcome::Failed
            }
        }
    }
}

/// Close to what an `<input type="email">` accepts: one `@` with something on
/// each side and no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
