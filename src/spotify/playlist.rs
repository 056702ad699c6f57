use std::time::Duration;

use reqwest::Client;

use crate::{
    config,
    error::SearchError,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUser,
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Resolves the identity of the user the bearer token acts for.
pub async fn current_user(token: &str) -> Result<CurrentUser, SearchError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<CurrentUser>().await?)
}

/// Creates a playlist on the user's account.
///
/// The visibility policy is fixed: public and non-collaborative, the same
/// policy the listing service has always applied.
///
/// # Arguments
///
/// * `user_id` - Owner of the new playlist, from [`current_user`]
/// * `name` - Playlist name, typically embedding the search parameters
/// * `description` - Free-form playlist description
/// * `token` - Valid access token with playlist-modify scope
pub async fn create(
    user_id: &str,
    name: &str,
    description: &str,
    token: &str,
) -> Result<CreatePlaylistResponse, SearchError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: true,
        collaborative: false,
    };

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<CreatePlaylistResponse>().await?)
}

/// Submits the full track URI list to a playlist in one batch call.
///
/// No chunking and no verification that every URI was accepted; a failure
/// here leaves the already-created playlist empty or partially populated,
/// which the caller reports together with the playlist URI so the user can
/// remediate manually.
pub async fn add_tracks(
    playlist_id: &str,
    uris: Vec<String>,
    token: &str,
) -> Result<AddTracksResponse, SearchError> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let body = AddTracksRequest { uris };

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<AddTracksResponse>().await?)
}
