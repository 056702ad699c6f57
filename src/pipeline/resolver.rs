use std::{collections::HashMap, sync::Arc};

use indicatif::ProgressBar;
use tokio::sync::Semaphore;

use crate::{
    error::SearchError,
    spotify,
    types::{Performer, ResolvedPerformer},
    utils, warning,
};

/// Upper bound on in-flight Spotify lookups during the fan-out.
const MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Resolves every distinct performer to a Spotify artist and representative
/// top track.
///
/// Performers are deduplicated by ID first, so an act playing several shows
/// in the window costs one lookup pair, not one per event. Lookups run as
/// concurrent tasks bounded by a semaphore; a transport failure in one task
/// degrades that performer to an absent catalog match instead of failing
/// the batch.
///
/// # Arguments
///
/// * `performers` - All performer records from the event list, duplicates allowed
/// * `token` - Valid access token for Spotify API authentication
/// * `pb` - Progress bar advanced once per completed lookup
///
/// # Returns
///
/// Map from performer ID to its resolution. Every input performer has an
/// entry; absent `artist_id`/`top_track_id` fields mean no catalog match.
pub async fn resolve_performers(
    performers: &[Performer],
    token: &str,
    pb: &ProgressBar,
) -> HashMap<u64, ResolvedPerformer> {
    let mut unique: Vec<Performer> = Vec::new();
    let mut seen: std::collections::HashSet<u64> = std::collections::HashSet::new();
    for performer in performers {
        if seen.insert(performer.id) {
            unique.push(performer.clone());
        }
    }

    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_LOOKUPS));
    let mut handles = Vec::new();

    for performer in unique {
        let token = token.to_string();
        let semaphore = Arc::clone(&semaphore);
        let pb = pb.clone();
        let handle = tokio::spawn(async move {
            // Unwrap is fine: the semaphore is never closed.
            let _permit = semaphore.acquire_owned().await.unwrap();
            let resolved = resolve_one(&performer, &token).await;
            pb.inc(1);
            resolved
        });
        handles.push(handle);
    }

    let mut resolved: HashMap<u64, ResolvedPerformer> = HashMap::new();
    for handle in handles {
        match handle.await {
            Ok(performer) => {
                resolved.insert(performer.performer_id, performer);
            }
            Err(e) => {
                warning!("Task join error: {}", e);
            }
        }
    }

    resolved
}

async fn resolve_one(performer: &Performer, token: &str) -> ResolvedPerformer {
    let (artist_id, top_track_id) = match lookup_artist_track(&performer.short_name, token).await {
        Ok(ids) => ids,
        Err(e) => {
            warning!("Spotify lookup failed for {}: {}", performer.short_name, e);
            (None, None)
        }
    };

    ResolvedPerformer {
        performer_id: performer.id,
        display_name: performer.short_name.clone(),
        genre_summary: utils::genre_summary(performer.genres.as_deref()),
        artist_id,
        top_track_id,
    }
}

/// One fan-out call pair: artist search, then top tracks for the first
/// candidate. No match and no top tracks are both valid partial outcomes.
async fn lookup_artist_track(
    name: &str,
    token: &str,
) -> Result<(Option<String>, Option<String>), SearchError> {
    let Some(artist) = spotify::artists::search_artist(name, token).await? else {
        return Ok((None, None));
    };

    let tracks = spotify::artists::get_top_tracks(&artist.id, token).await?;
    let top_track_id = tracks.into_iter().next().map(|t| t.id);

    Ok((Some(artist.id), top_track_id))
}
