use std::sync::Arc;
use anyhow::{anyhow, bail};
use clap::Subcommand;
use serde::Serialize;
use tracing::info;
use crate::api::ApiClient;
use crate::config::Config;
use crate::models::reservation::ReservationRequest;
use crate::models::review::NewReview;
use crate::repositories::auth_storage::AuthStorage;
use crate::repositories::local_storage_repo::FileStore;
use crate::views::register_page::{RegisterPage, SubmitOutcome};

pub const PASSWORD_ENV: &str = "EAT_WHERE_LA_PASSWORD";

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Log in with email and password and keep the session.
    Login {
        #[clap(long)]
        email: String,
        /// Read from the environment when the flag is left out.
        #[clap(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: String,
    },
    /// Create an account through the register form.
    Register {
        #[clap(long)]
        email: String,
        #[clap(long)]
        name: String,
        /// Read from the environment when the flag is left out.
        #[clap(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: String,
        /// Sign up as the owner of a place.
        #[clap(long)]
        has_place: bool,
    },
    /// Verify a Google credential.
    Google {
        #[clap(long)]
        token: String,
    },
    /// Invalidate the session server side and forget it locally.
    Logout {
        #[clap(long)]
        token: Option<String>,
    },
    /// Print the session kept in local storage.
    Session,
    MapPlaces,
    Place {
        #[clap(long)]
        id: String,
    },
    PlaceByName {
        #[clap(long)]
        name: String,
    },
    Nearby {
        #[clap(long, allow_negative_numbers = true)]
        latitude: f64,
        #[clap(long, allow_negative_numbers = true)]
        longitude: f64,
    },
    Like {
        #[clap(long)]
        id: String,
        #[clap(long)]
        token: Option<String>,
    },
    Promotions {
        #[clap(long)]
        place_id: String,
        #[clap(long)]
        token: Option<String>,
    },
    Reserve {
        #[clap(long)]
        place_id: i64,
        #[clap(long)]
        date: String,
        #[clap(long)]
        people: u32,
        #[clap(long)]
        token: Option<String>,
    },
    Review {
        #[clap(long)]
        place_id: i64,
        #[clap(long)]
        rating: f64,
        #[clap(long)]
        comment: String,
        #[clap(long)]
        token: Option<String>,
    },
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let storage = AuthStorage::new(Arc::new(FileStore::new(&config.auth_storage_path)));
    let client = ApiClient::new(&config.api_url, storage)?;
    info!("Using API at: {} ({})", client.base_url(), config.environment);

    execute(&client, config.command).await
}

pub async fn execute(
    client: &ApiClient,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => print_json(&client.login(&email, &password).await?),
        Command::Register { email, name, password, has_place } => {
            let mut page = RegisterPage::new();
            page.set_email(email);
            page.set_name(name);
            page.set_password(password);
            page.set_has_place(has_place);

            match page.submit(client).await {
                SubmitOutcome::Navigate(route) => {
                    println!("Registered, continue at {}", route.path());
                    Ok(())
                }
                SubmitOutcome::Blocked(violations) => bail!("Form is incomplete: {:?}", violations),
                SubmitOutcome::Failed => Err(anyhow!(page.error().unwrap_or_default().to_string())),
            }
        }
        Command::Google { token } => print_json(&client.login_with_google(&token).await?),
        Command::Logout { token } => {
            let token = resolve_token(client, token)?;
            client.logout(&token).await?;
            client.clear_session()?;
            println!("Logged out");
            Ok(())
        }
        Command::Session => print_json(&client.stored_session()?),
        Command::MapPlaces => print_json(&client.get_all_places_for_map().await?),
        Command::Place { id } => print_json(&client.get_place_by_id(&id).await?),
        Command::PlaceByName { name } => print_json(&client.get_place_by_name(&name).await?),
        Command::Nearby { latitude, longitude } => {
            print_json(&client.get_nearby_places(latitude, longitude).await?)
        }
        Command::Like { id, token } => {
            let token = resolve_token(client, token)?;
            print_json(&client.toggle_like(&id, &token).await?)
        }
        Command::Promotions { place_id, token } => {
            let token = resolve_token(client, token)?;
            print_json(&client.get_promotions_by_place(&place_id, &token).await?)
        }
        Command::Reserve { place_id, date, people, token } => {
            let token = resolve_token(client, token)?;
            let reservation = ReservationRequest {
                place_id,
                date,
                number_of_people: people,
            };
            print_json(&client.create_reservation(&reservation, &token).await?)
        }
        Command::Review { place_id, rating, comment, token } => {
            let token = resolve_token(client, token)?;
            let new_review = NewReview {
                comment,
                rating,
                place_id,
            };
            client.create_review(&new_review, &token).await?;
            println!("Review created");
            Ok(())
        }
    }
}

/// An explicit `--token` wins over the stored session.
fn resolve_token(
    client: &ApiClient,
    token: Option<String>,
) -> anyhow::Result<String> {
    if let Some(token) = token {
        return Ok(token);
    }
    match client.stored_session()? {
        Some(session) => Ok(session.token),
        None => bail!("No token given and no stored session, log in first"),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use super::*;
    use crate::api::tests::client_for;
    use crate::helpers::mock_backend::MockBackend;

    fn session_json() -> serde_json::Value {
        json!({
            "token": "stored-token",
            "user": { "email": "ana@example.com", "name": "Ana", "role": "USER" }
        })
    }

    #[tokio::test]
    async fn authenticated_command_without_token_sends_nothing() {
        let backend = MockBackend::start().await;
        let (client, _) = client_for(&backend.url());

        let res = execute(&client, Command::Like { id: "1".to_string(), token: None }).await;

        assert!(res.is_err());
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn stored_session_token_is_used_when_flag_missing() {
        let backend = MockBackend::start().await;
        backend.reply(Method::POST, "/auth/login", StatusCode::OK, Some(session_json()));
        backend.reply(Method::POST, "/review/new", StatusCode::OK, None);
        let (client, _) = client_for(&backend.url());

        execute(&client, Command::Login { email: "ana@example.com".into(), password: "secret".into() })
            .await
            .unwrap();
        execute(
            &client,
            Command::Review { place_id: 3, rating: 4.0, comment: "Bien".into(), token: None },
        )
        .await
        .unwrap();

        let requests = backend.requests();
        assert_eq!(requests[1].authorization.as_deref(), Some("Bearer stored-token"));
    }

    #[tokio::test]
    async fn logout_command_clears_local_session() {
        let backend = MockBackend::start().await;
        backend.reply(Method::POST, "/auth/login", StatusCode::OK, Some(session_json()));
        backend.reply(Method::POST, "/auth/logout", StatusCode::OK, None);
        let (client, _) = client_for(&backend.url());
        client.login("ana@example.com", "secret").await.unwrap();

        execute(&client, Command::Logout { token: None }).await.unwrap();

        assert_eq!(backend.requests()[1].authorization.as_deref(), Some("Bearer stored-token"));
        assert_eq!(client.stored_session().unwrap(), None);
    }

    #[tokio::test]
    async fn register_command_reports_form_error() {
        let backend = MockBackend::start().await;
        backend.reply(Method::POST, "/auth/signin", StatusCode::CONFLICT, None);
        let (client, _) = client_for(&backend.url());

        let err = execute(
            &client,
            Command::Register {
                email: "ana@example.com".into(),
                name: "Ana".into(),
                password: "secret".into(),
                has_place: false,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), crate::views::register_page::REGISTER_ERROR_MESSAGE);
    }
}
