use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;

use crate::{
    types::{Event, ListingRow, ResolvedPerformer},
    utils, warning,
};

/// Joins events and resolver output into the final listing and track set.
///
/// Produces one row per (event, performer) pairing, so a performer playing
/// two shows in the window keeps both listing entries; only the resolver
/// lookups were deduplicated. Rows are sorted ascending by the event's
/// local datetime, then performer name. The track set holds the URI of each
/// resolved top track in row order, first occurrence wins, so that same
/// twice-booked performer contributes a single playlist track.
///
/// A missing track is an absent field on the row, never a stringified null.
///
/// Events whose `datetime_local` does not parse are skipped with a warning;
/// the provider has never emitted anything but `YYYY-MM-DDTHH:MM:SS` here.
pub fn assemble(
    events: &[Event],
    resolved: &HashMap<u64, ResolvedPerformer>,
) -> (Vec<ListingRow>, Vec<String>) {
    let mut rows: Vec<ListingRow> = Vec::new();

    for event in events {
        let datetime_local =
            match NaiveDateTime::parse_from_str(&event.datetime_local, "%Y-%m-%dT%H:%M:%S") {
                Ok(dt) => dt,
                Err(e) => {
                    warning!(
                        "Skipping event {}: bad datetime {:?}: {}",
                        event.id,
                        event.datetime_local,
                        e
                    );
                    continue;
                }
            };

        for performer in &event.performers {
            let (genre_summary, track_uri) = match resolved.get(&performer.id) {
                Some(r) => (
                    r.genre_summary.clone(),
                    r.top_track_id.as_deref().map(utils::track_uri),
                ),
                None => (utils::genre_summary(performer.genres.as_deref()), None),
            };

            rows.push(ListingRow {
                datetime_local,
                date_local: datetime_local.format("%b %d %Y").to_string(),
                time_local: datetime_local.format("%I:%M%p").to_string(),
                event_id: event.id,
                event_title: event.title.clone(),
                performer: performer.short_name.clone(),
                genre_summary,
                venue_name: event.venue.name.clone(),
                venue_id: event.venue.id,
                venue_address: venue_address(event),
                track_uri,
            });
        }
    }

    utils::sort_listing_rows(&mut rows);

    let mut seen: HashSet<String> = HashSet::new();
    let mut track_uris: Vec<String> = Vec::new();
    for row in &rows {
        if let Some(uri) = &row.track_uri {
            if seen.insert(uri.clone()) {
                track_uris.push(uri.clone());
            }
        }
    }

    (rows, track_uris)
}

fn venue_address(event: &Event) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(address) = event.venue.address.as_deref() {
        if !address.is_empty() {
            parts.push(address);
        }
    }
    if let Some(extended) = event.venue.extended_address.as_deref() {
        if !extended.is_empty() {
            parts.push(extended);
        }
    }
    parts.join(", ")
}
