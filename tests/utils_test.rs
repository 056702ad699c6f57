use listenlocal::types::{Genre, ListingRow};
use listenlocal::utils::*;

// Helper function to create a minimal listing row for sort tests
fn create_test_row(datetime: &str, performer: &str) -> ListingRow {
    let datetime_local =
        chrono::NaiveDateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M:%S").unwrap();
    ListingRow {
        datetime_local,
        date_local: datetime_local.format("%b %d %Y").to_string(),
        time_local: datetime_local.format("%I:%M%p").to_string(),
        event_id: 1,
        event_title: "Test Event".to_string(),
        performer: performer.to_string(),
        genre_summary: "NA".to_string(),
        venue_name: "Test Venue".to_string(),
        venue_id: 10,
        venue_address: "123 Main St".to_string(),
        track_uri: None,
    }
}

#[test]
fn test_process_daterange_single_date() {
    let (date1, date2) = process_daterange("2019-01-22");
    assert_eq!(date1, "2019-01-22");
    assert_eq!(date2, None);
}

#[test]
fn test_process_daterange_range() {
    let (date1, date2) = process_daterange("2019-01-22 to 2019-01-29");
    assert_eq!(date1, "2019-01-22");
    assert_eq!(date2, Some("2019-01-29".to_string()));
}

#[test]
fn test_process_daterange_trims_whitespace() {
    let (date1, date2) = process_daterange("  2019-01-22  ");
    assert_eq!(date1, "2019-01-22");
    assert_eq!(date2, None);

    let (date1, date2) = process_daterange(" 2019-01-22 to 2019-01-29 ");
    assert_eq!(date1, "2019-01-22");
    assert_eq!(date2, Some("2019-01-29".to_string()));
}

#[test]
fn test_is_valid_zipcode() {
    assert!(is_valid_zipcode("19130"));
    assert!(is_valid_zipcode("19130-1234"));

    assert!(!is_valid_zipcode("1913"));
    assert!(!is_valid_zipcode("191300"));
    assert!(!is_valid_zipcode("1913o"));
    assert!(!is_valid_zipcode("19130-123"));
    assert!(!is_valid_zipcode("19130-12345"));
    assert!(!is_valid_zipcode("19130-123a"));
    assert!(!is_valid_zipcode(""));
    assert!(!is_valid_zipcode("-1234"));
}

#[test]
fn test_genre_summary_joins_names() {
    let genres = vec![
        Genre {
            name: "Hip-Hop".to_string(),
        },
        Genre {
            name: "Rap".to_string(),
        },
    ];
    assert_eq!(genre_summary(Some(&genres)), "Hip-Hop, Rap");
}

#[test]
fn test_genre_summary_missing_is_na() {
    assert_eq!(genre_summary(None), "NA");
    assert_eq!(genre_summary(Some(&[])), "NA");
}

#[test]
fn test_track_uri_format() {
    assert_eq!(track_uri("xyz"), "spotify:track:xyz");
}

#[test]
fn test_embed_url() {
    assert_eq!(
        embed_url("spotify:album:1DFixLWuPkv3KT3TnV35m3"),
        "https://open.spotify.com/embed/album/1DFixLWuPkv3KT3TnV35m3"
    );
    assert_eq!(
        embed_url("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"),
        "https://open.spotify.com/embed/playlist/37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 16 alphanumeric characters
    assert_eq!(state.len(), 16);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated values should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_sort_listing_rows_chronological() {
    let mut rows = vec![
        create_test_row("2019-02-01T20:00:00", "Band C"),
        create_test_row("2019-01-22T19:00:00", "Band A"),
        create_test_row("2019-01-22T21:30:00", "Band B"),
    ];

    sort_listing_rows(&mut rows);

    assert_eq!(rows[0].performer, "Band A");
    assert_eq!(rows[1].performer, "Band B");
    assert_eq!(rows[2].performer, "Band C");
}

#[test]
fn test_sort_listing_rows_is_not_lexical_on_formatted_date() {
    // "Feb 01 2019" < "Jan 22 2019" lexically; chronological order must win.
    let mut rows = vec![
        create_test_row("2019-02-01T20:00:00", "Later"),
        create_test_row("2019-01-22T20:00:00", "Earlier"),
    ];

    sort_listing_rows(&mut rows);

    assert_eq!(rows[0].performer, "Earlier");
    assert_eq!(rows[1].performer, "Later");
}

#[test]
fn test_sort_listing_rows_same_datetime_by_performer() {
    let mut rows = vec![
        create_test_row("2019-01-22T20:00:00", "Zeta"),
        create_test_row("2019-01-22T20:00:00", "Alpha"),
    ];

    sort_listing_rows(&mut rows);

    assert_eq!(rows[0].performer, "Alpha");
    assert_eq!(rows[1].performer, "Zeta");
}
