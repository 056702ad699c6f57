//! # Spotify Integration Module
//!
//! Interface to the Spotify Web API covering everything the pipeline needs:
//! user authentication, artist search, top-track lookup, and playlist
//! management. It abstracts away the HTTP requests and the OAuth flow and
//! hands typed results to the pipeline layer.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow: builds the authorization
//!   URL, receives the code on the local callback server, and exchanges it
//!   (with the client secret in a Basic header) for a bearer token.
//! - [`artists`] - Catalog lookups: artist search by display name and
//!   top-tracks by artist ID. Zero matches is a valid outcome, not an error.
//! - [`playlist`] - Identity resolution, playlist creation, and batch track
//!   submission on behalf of the authenticated user.
//!
//! ## API Coverage
//!
//! - `GET /search?type=artist` - Artist search by performer name
//! - `GET /artists/{id}/top-tracks` - Representative track lookup
//! - `GET /me` - Current-user identity
//! - `POST /users/{user_id}/playlists` - Create playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks
//! - `POST /api/token` - Code exchange and token refresh
//!
//! ## Error Handling
//!
//! Catalog and playlist calls return [`crate::error::SearchError`]; a
//! non-success status or transport failure maps to `RequestFailed`. No
//! automatic retries; each request carries a deadline.

pub mod artists;
pub mod auth;
pub mod playlist;
