use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config, error,
    error::SearchError,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AuthState, Token},
    utils, warning,
};

/// Runs the complete OAuth 2.0 authorization-code flow against Spotify.
///
/// The flow:
/// 1. Generates a random `state` value for CSRF protection
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits for the callback handler to exchange the code for a token
/// 5. Persists the token for future `search` runs
///
/// Unlike a PKCE flow this grant uses the registered client secret, sent as
/// a Basic header on the token endpoint only. The secret never appears in
/// the browser-visible URL.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe state shared with the callback handler,
///   carrying the expected `state` value in and the token out
///
/// # Error Handling
///
/// - Browser launch failures print the URL for manual navigation
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthState>>>) {
    let csrf_state = utils::generate_state();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope(),
        state = csrf_state
    );

    // Store the expected state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthState {
            csrf_state: csrf_state.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t.clone());
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state for a completed token with a 60-second timeout.
///
/// Runs concurrently with the callback handler that populates the token
/// after a successful code exchange. Returns `None` when the timeout is
/// reached without a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthState>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(auth_state) = lock.as_ref() {
            if let Some(token) = &auth_state.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Basic authorization header value for the token endpoint, built from the
/// registered client ID and secret.
pub fn basic_authorization() -> String {
    let credentials = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Exchanges an authorization code for an access token.
///
/// Final step of the authorization-code grant: posts the code together with
/// the redirect URI and the Basic client header to the token endpoint. The
/// code is single-use and short-lived, so the exchange happens immediately
/// in the callback handler.
pub async fn exchange_code(code: &str) -> Result<Token, SearchError> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", basic_authorization())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may omit the refresh token from the response; in that case the
/// previous one stays valid and is carried over.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, String> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", basic_authorization())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or(refresh_token)
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
