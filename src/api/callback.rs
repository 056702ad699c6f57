use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::AuthState, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthState>>>>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        warning!("Authorization denied: {}", error);
        return Html("<h4>Authorization denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut auth_state) = state.as_mut() else {
        return Html("<h4>No authorization in progress.</h4>");
    };

    // Reject redirects that don't echo the state we sent out
    if params.get("state") != Some(&auth_state.csrf_state) {
        warning!("State mismatch on OAuth callback");
        return Html("<h4>State mismatch.</h4>");
    }

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            auth_state.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
