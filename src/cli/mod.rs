//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the API
//! clients, the resolution pipeline, and terminal output (colored status
//! macros, progress bars, tabled listings).
//!
//! ## Commands
//!
//! - [`auth`] - Runs the Spotify OAuth authorization-code flow and caches
//!   the resulting token.
//! - [`search`] - The whole concert-to-playlist run: normalize input, fetch
//!   events, resolve performers, print the listing, publish the playlist.
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (argument handling, output)
//!     ↓
//! Pipeline Layer (resolver, assembler)
//!     ↓
//! API Layer (SeatGeek, Spotify)
//!     ↓
//! Network Layer (HTTP requests)
//! ```

mod auth;
mod search;

pub use auth::auth;
pub use search::search;
