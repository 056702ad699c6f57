//! # Resolution Pipeline Module
//!
//! The core of the application: takes the raw event list from SeatGeek and
//! produces the human-facing concert listing plus the ordered track set for
//! the playlist.
//!
//! - [`resolver`] - matches each distinct performer against the Spotify
//!   catalog (artist search, then top tracks), fanned out concurrently with
//!   per-performer error isolation. One bad lookup yields a missing-track
//!   row, never an aborted search.
//! - [`assembler`] - joins events, performers, and resolver output into one
//!   row per (event, performer) pairing, derives display date/time fields,
//!   sorts chronologically, and extracts the playable track URIs.
//!
//! All entities here are request-scoped values; nothing is cached or shared
//! between runs.

pub mod assembler;
pub mod resolver;
