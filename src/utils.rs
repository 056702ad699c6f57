use rand::{Rng, distr::Alphanumeric};

use crate::types::{Genre, ListingRow};

/// Splits a datepicker range string into a start date and an optional end
/// date. `"2019-01-22 to 2019-01-29"` yields both, a lone date yields
/// `(date, None)`. The tokens are not validated here; the form layer rejects
/// malformed input before this runs.
pub fn process_daterange(daterange: &str) -> (String, Option<String>) {
    let daterange = daterange.trim();
    match daterange.split_once(" to ") {
        Some((date1, date2)) => (date1.to_string(), Some(date2.to_string())),
        None => (daterange.to_string(), None),
    }
}

/// Checks for a 5-digit US zipcode, optionally with a +4 extension.
pub fn is_valid_zipcode(zipcode: &str) -> bool {
    let (head, tail) = match zipcode.split_once('-') {
        Some((head, tail)) => (head, Some(tail)),
        None => (zipcode, None),
    };

    let five = head.len() == 5 && head.chars().all(|c| c.is_ascii_digit());
    match tail {
        Some(plus4) => five && plus4.len() == 4 && plus4.chars().all(|c| c.is_ascii_digit()),
        None => five,
    }
}

/// Comma-joins genre names; "NA" when the performer carries no genre tags.
pub fn genre_summary(genres: Option<&[Genre]>) -> String {
    match genres {
        Some(genres) if !genres.is_empty() => genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => "NA".to_string(),
    }
}

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}

/// Converts a Spotify URI into the embeddable play-button URL, e.g.
/// `spotify:album:1DFixLWuPkv3KT3TnV35m3` becomes
/// `https://open.spotify.com/embed/album/1DFixLWuPkv3KT3TnV35m3`.
pub fn embed_url(uri: &str) -> String {
    let path = uri.split(':').skip(1).collect::<Vec<_>>().join("/");
    format!("https://open.spotify.com/embed/{}", path)
}

/// Random `state` value for the OAuth authorization request.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn sort_listing_rows(rows: &mut Vec<ListingRow>) {
    // The formatted date column ("Jan 22 2019") is not lexically ordered, so
    // sort on the parsed datetime the rows carry.
    rows.sort_by(|a, b| {
        a.datetime_local
            .cmp(&b.datetime_local)
            .then_with(|| a.performer.cmp(&b.performer))
    });
}
