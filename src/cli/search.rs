use std::collections::HashSet;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    error::SearchError,
    info,
    management::TokenManager,
    pipeline::{assembler, resolver},
    seatgeek, spotify, success,
    types::{ListingTableRow, Performer},
    utils, warning,
};

/// Runs a full concert-to-playlist search.
///
/// Validates the zipcode, normalizes the date range, fetches concerts from
/// SeatGeek, resolves every distinct performer against Spotify, prints the
/// listing table, and publishes a playlist of the resolved top tracks.
pub async fn search(zipcode: String, daterange: String, radius: u32, max_results: u32) {
    if !utils::is_valid_zipcode(&zipcode) {
        error!("{} is not a valid US zipcode", zipcode);
    }

    let (date1, date2) = utils::process_daterange(&daterange);

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run listenlocal auth\n Error: {}",
                e
            );
        }
    };
    let token = token_mgr.get_valid_token().await;

    info!("Searching concerts near {} ({})...", zipcode, daterange);
    let events = match seatgeek::events::search_events(
        &zipcode,
        &date1,
        date2.as_deref(),
        radius,
        max_results,
    )
    .await
    {
        Ok(events) => events,
        Err(SearchError::NoResultsFound) => {
            info!("We didn't find any concerts near {} :-(", zipcode);
            return;
        }
        Err(e) => {
            error!("Concert search failed: {}", e);
        }
    };

    let performers: Vec<Performer> = events
        .iter()
        .flat_map(|event| event.performers.iter().cloned())
        .collect();
    let unique_count = performers
        .iter()
        .map(|p| p.id)
        .collect::<HashSet<_>>()
        .len();

    let pb = ProgressBar::new(unique_count as u64);
    pb.set_message("Matching performers on Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:40.blue}] {pos}/{len} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let resolved = resolver::resolve_performers(&performers, &token, &pb).await;
    pb.finish_and_clear();

    let (rows, track_uris) = assembler::assemble(&events, &resolved);

    if rows.is_empty() {
        info!("Found events but no listed performers.");
    } else {
        let table_rows: Vec<ListingTableRow> = rows.iter().map(ListingTableRow::from).collect();
        println!("{}", Table::new(table_rows));
    }

    publish(&zipcode, daterange.trim(), track_uris, &token).await;
}

/// Creates the playlist and submits the track list in one batch.
///
/// A failure after creation leaves the playlist behind; the warning carries
/// its URI so the user can retry or clean up by hand.
async fn publish(zipcode: &str, daterange: &str, track_uris: Vec<String>, token: &str) {
    let user = match spotify::playlist::current_user(token).await {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to resolve Spotify user: {}", e);
        }
    };

    let playlist_name = format!("Concerts near {} {}", zipcode, daterange);
    let description = "Top tracks from artists playing near you. Created by listenlocal.";

    let playlist =
        match spotify::playlist::create(&user.id, &playlist_name, description, token).await {
            Ok(playlist) => playlist,
            Err(e) => {
                error!("Failed to create playlist: {}", e);
            }
        };

    if track_uris.is_empty() {
        info!(
            "No playable tracks were resolved; playlist {} is empty.",
            playlist.name
        );
    } else {
        let count = track_uris.len();
        match spotify::playlist::add_tracks(&playlist.id, track_uris, token).await {
            Ok(_) => success!("Added {} tracks to {}", count, playlist.name),
            Err(e) => {
                warning!(
                    "Failed to add tracks to playlist {} ({}): {}",
                    playlist.name,
                    playlist.uri,
                    e
                );
            }
        }
    }

    success!("Playlist created: {}", playlist.uri);
    info!("Play it here: {}", utils::embed_url(&playlist.uri));
}
