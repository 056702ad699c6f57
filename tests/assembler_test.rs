use std::collections::HashMap;

use listenlocal::pipeline::assembler::assemble;
use listenlocal::types::{Event, Genre, Performer, ResolvedPerformer, Venue};

// Helper function to create a test event
fn create_test_event(id: u64, datetime: &str, performers: Vec<Performer>) -> Event {
    Event {
        id,
        title: format!("Event {}", id),
        datetime_local: datetime.to_string(),
        venue: Venue {
            id: 100 + id,
            name: "The Fillmore".to_string(),
            address: Some("29 E Allen St".to_string()),
            extended_address: Some("Philadelphia, PA 19123".to_string()),
        },
        performers,
    }
}

fn create_test_performer(id: u64, name: &str, genre: Option<&str>) -> Performer {
    Performer {
        id,
        short_name: name.to_string(),
        genres: genre.map(|g| {
            vec![Genre {
                name: g.to_string(),
            }]
        }),
    }
}

fn create_resolution(
    performer: &Performer,
    artist_id: Option<&str>,
    track_id: Option<&str>,
) -> ResolvedPerformer {
    ResolvedPerformer {
        performer_id: performer.id,
        display_name: performer.short_name.clone(),
        genre_summary: performer
            .genres
            .as_ref()
            .map(|genres| {
                genres
                    .iter()
                    .map(|g| g.name.clone())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "NA".to_string()),
        artist_id: artist_id.map(str::to_string),
        top_track_id: track_id.map(str::to_string),
    }
}

#[test]
fn test_assemble_one_row_per_event_performer_pair() {
    let jay = create_test_performer(1, "Jay-Z", Some("Hip-Hop"));
    let events = vec![
        create_test_event(10, "2019-01-22T20:00:00", vec![jay.clone()]),
        // Same performer at a second show; both rows must survive.
        create_test_event(11, "2019-01-23T20:00:00", vec![jay.clone()]),
    ];
    let mut resolved = HashMap::new();
    resolved.insert(jay.id, create_resolution(&jay, Some("abc"), Some("xyz")));

    let (rows, track_uris) = assemble(&events, &resolved);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].event_id, 10);
    assert_eq!(rows[1].event_id, 11);

    // One performer, one playlist track, even across two shows.
    assert_eq!(track_uris, vec!["spotify:track:xyz".to_string()]);
}

#[test]
fn test_assemble_row_fields() {
    let jay = create_test_performer(1, "Jay-Z", Some("Hip-Hop"));
    let events = vec![create_test_event(10, "2019-01-22T20:00:00", vec![jay.clone()])];
    let mut resolved = HashMap::new();
    resolved.insert(jay.id, create_resolution(&jay, Some("abc"), Some("xyz")));

    let (rows, track_uris) = assemble(&events, &resolved);

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.date_local, "Jan 22 2019");
    assert_eq!(row.time_local, "08:00PM");
    assert_eq!(row.event_title, "Event 10");
    assert_eq!(row.performer, "Jay-Z");
    assert_eq!(row.genre_summary, "Hip-Hop");
    assert_eq!(row.venue_name, "The Fillmore");
    assert_eq!(row.venue_address, "29 E Allen St, Philadelphia, PA 19123");
    assert_eq!(row.track_uri, Some("spotify:track:xyz".to_string()));
    assert_eq!(track_uris, vec!["spotify:track:xyz".to_string()]);
}

#[test]
fn test_assemble_missing_track_is_absent_not_stringified() {
    let local_act = create_test_performer(2, "Basement Band", None);
    let events = vec![create_test_event(
        10,
        "2019-01-22T20:00:00",
        vec![local_act.clone()],
    )];
    let mut resolved = HashMap::new();
    resolved.insert(local_act.id, create_resolution(&local_act, None, None));

    let (rows, track_uris) = assemble(&events, &resolved);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].track_uri, None);
    assert_eq!(rows[0].genre_summary, "NA");
    assert!(track_uris.is_empty());
}

#[test]
fn test_assemble_artist_without_top_tracks() {
    let act = create_test_performer(3, "Obscure Act", Some("Noise"));
    let events = vec![create_test_event(10, "2019-01-22T20:00:00", vec![act.clone()])];
    let mut resolved = HashMap::new();
    // Catalog match exists but the artist has no top tracks.
    resolved.insert(act.id, create_resolution(&act, Some("def"), None));

    let (rows, track_uris) = assemble(&events, &resolved);

    assert_eq!(rows[0].track_uri, None);
    assert!(track_uris.is_empty());
}

#[test]
fn test_assemble_sorted_for_any_input_permutation() {
    let a = create_test_performer(1, "A", None);
    let b = create_test_performer(2, "B", None);
    let c = create_test_performer(3, "C", None);
    let events = vec![
        create_test_event(10, "2019-01-25T21:00:00", vec![c.clone()]),
        create_test_event(11, "2019-01-22T19:00:00", vec![a.clone()]),
        create_test_event(12, "2019-01-22T23:00:00", vec![b.clone()]),
    ];
    let resolved: HashMap<u64, ResolvedPerformer> = [&a, &b, &c]
        .iter()
        .map(|p| (p.id, create_resolution(p, None, None)))
        .collect();

    // Every permutation of the event list yields the same sorted listing.
    let permutations: Vec<Vec<usize>> = vec![
        vec![0, 1, 2],
        vec![0, 2, 1],
        vec![1, 0, 2],
        vec![1, 2, 0],
        vec![2, 0, 1],
        vec![2, 1, 0],
    ];
    for perm in permutations {
        let shuffled: Vec<_> = perm.iter().map(|&i| events[i].clone()).collect();
        let (rows, _) = assemble(&shuffled, &resolved);
        let order: Vec<&str> = rows.iter().map(|r| r.performer.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        for pair in rows.windows(2) {
            assert!(pair[0].datetime_local <= pair[1].datetime_local);
        }
    }
}

#[test]
fn test_assemble_track_set_in_row_order() {
    let a = create_test_performer(1, "A", None);
    let b = create_test_performer(2, "B", None);
    let events = vec![
        create_test_event(10, "2019-01-23T20:00:00", vec![b.clone()]),
        create_test_event(11, "2019-01-22T20:00:00", vec![a.clone()]),
    ];
    let mut resolved = HashMap::new();
    resolved.insert(a.id, create_resolution(&a, Some("aid"), Some("ta")));
    resolved.insert(b.id, create_resolution(&b, Some("bid"), Some("tb")));

    let (_, track_uris) = assemble(&events, &resolved);

    // A plays first chronologically, so its track comes first.
    assert_eq!(
        track_uris,
        vec!["spotify:track:ta".to_string(), "spotify:track:tb".to_string()]
    );
}

#[test]
fn test_assemble_event_without_performers() {
    let events = vec![create_test_event(10, "2019-01-22T20:00:00", vec![])];
    let resolved = HashMap::new();

    let (rows, track_uris) = assemble(&events, &resolved);

    assert!(rows.is_empty());
    assert!(track_uris.is_empty());
}

#[test]
fn test_assemble_skips_unparseable_datetime() {
    let a = create_test_performer(1, "A", None);
    let events = vec![
        create_test_event(10, "not-a-datetime", vec![a.clone()]),
        create_test_event(11, "2019-01-22T20:00:00", vec![a.clone()]),
    ];
    let mut resolved = HashMap::new();
    resolved.insert(a.id, create_resolution(&a, None, None));

    let (rows, _) = assemble(&events, &resolved);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event_id, 11);
}
