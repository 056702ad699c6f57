use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Shared state between the auth command and the OAuth callback handler.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub csrf_state: String,
    pub token: Option<Token>,
}

// --- SeatGeek wire types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub datetime_local: String,
    pub venue: Venue,
    pub performers: Vec<Performer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub extended_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
    pub id: u64,
    pub short_name: String,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

// --- Spotify wire types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<CatalogArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub uri: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

// --- Domain types ---

/// Best-effort Spotify match for one concert performer. Absent catalog fields
/// mean "no match", never a failure.
#[derive(Debug, Clone)]
pub struct ResolvedPerformer {
    pub performer_id: u64,
    pub display_name: String,
    pub genre_summary: String,
    pub artist_id: Option<String>,
    pub top_track_id: Option<String>,
}

/// One (event, performer) pairing joined with its resolver output.
#[derive(Debug, Clone)]
pub struct ListingRow {
    pub datetime_local: chrono::NaiveDateTime,
    pub date_local: String,
    pub time_local: String,
    pub event_id: u64,
    pub event_title: String,
    pub performer: String,
    pub genre_summary: String,
    pub venue_name: String,
    pub venue_id: u64,
    pub venue_address: String,
    pub track_uri: Option<String>,
}

#[derive(Tabled)]
pub struct ListingTableRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Time")]
    pub time: String,
    #[tabled(rename = "Event")]
    pub event: String,
    #[tabled(rename = "Performer")]
    pub performer: String,
    #[tabled(rename = "Genre(s)")]
    pub genres: String,
    #[tabled(rename = "Venue")]
    pub venue: String,
    #[tabled(rename = "Address")]
    pub address: String,
}

impl From<&ListingRow> for ListingTableRow {
    fn from(row: &ListingRow) -> Self {
        ListingTableRow {
            date: row.date_local.clone(),
            time: row.time_local.clone(),
            event: row.event_title.clone(),
            performer: row.performer.clone(),
            genres: row.genre_summary.clone(),
            venue: row.venue_name.clone(),
            address: row.venue_address.clone(),
        }
    }
}
