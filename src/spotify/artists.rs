use std::time::Duration;

use reqwest::Client;

use crate::{
    config,
    error::SearchError,
    types::{ArtistSearchResponse, CatalogArtist, TopTracksResponse, Track},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Searches the catalog for an artist matching a performer's display name.
///
/// The search is Spotify's own fuzzy match; this function takes the top
/// candidate. Zero results is a normal outcome (`Ok(None)`) - plenty of
/// local acts have no catalog presence - and only transport or HTTP
/// failures are errors.
///
/// # Arguments
///
/// * `name` - Performer display name as reported by the events provider
/// * `token` - Valid access token for Spotify API authentication
pub async fn search_artist(name: &str, token: &str) -> Result<Option<CatalogArtist>, SearchError> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(&api_url)
        .query(&[("q", name), ("type", "artist")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<ArtistSearchResponse>().await?;

    // TODO: prefer an exact name match over the top fuzzy candidate.
    Ok(res.artists.items.into_iter().next())
}

/// Fetches an artist's top tracks.
///
/// The first entry is what the pipeline uses as the representative track;
/// an empty list means the artist exists in the catalog without playable
/// top tracks and is, again, not an error.
///
/// # Arguments
///
/// * `artist_id` - Spotify ID of the artist
/// * `token` - Valid access token for Spotify API authentication
pub async fn get_top_tracks(artist_id: &str, token: &str) -> Result<Vec<Track>, SearchError> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks",
        uri = &config::spotify_apiurl(),
        id = artist_id
    );

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(&api_url)
        .query(&[("market", "US")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<TopTracksResponse>().await?;
    Ok(res.tracks)
}
