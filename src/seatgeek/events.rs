use std::time::Duration;

use reqwest::Client;

use crate::{
    config,
    error::SearchError,
    types::{Event, EventsResponse},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Searches SeatGeek for concerts near a zipcode within a date window.
///
/// The window runs from `date1` at 00:00:00 to `date2` at 23:00:00 local
/// venue time. When `date2` is absent the window covers the single day
/// `date1`. The upper bound is 23:00, not end of day; the listing service
/// has always cut the window there and downstream consumers expect it.
///
/// # Arguments
///
/// * `zipcode` - US zipcode to search around (validated by the caller)
/// * `date1` - First day of the window, `YYYY-MM-DD`
/// * `date2` - Optional last day of the window, defaults to `date1`
/// * `radius` - Search radius in miles
/// * `per_page` - Maximum number of events to return
///
/// # Returns
///
/// - `Ok(Vec<Event>)` - At least one event in the window
/// - `Err(SearchError::NoResultsFound)` - The provider answered with zero events
/// - `Err(SearchError::RequestFailed)` - Non-2xx status or transport failure
///
/// A single failed or empty call surfaces immediately; there is no retry
/// policy at this layer.
pub async fn search_events(
    zipcode: &str,
    date1: &str,
    date2: Option<&str>,
    radius: u32,
    per_page: u32,
) -> Result<Vec<Event>, SearchError> {
    let datetime_gte = format!("{}T00:00:00", date1);
    let datetime_lte = format!("{}T23:00:00", date2.unwrap_or(date1));

    let api_url = format!("{uri}/events", uri = &config::seatgeek_apiurl());

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(&api_url)
        .query(&[
            ("client_id", config::seatgeek_client_id().as_str()),
            ("geoip", zipcode),
            ("type", "concert"),
            ("per_page", &per_page.to_string()),
            ("range", &format!("{}mi", radius)),
            ("datetime_local.gte", &datetime_gte),
            ("datetime_local.lte", &datetime_lte),
        ])
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<EventsResponse>().await?;
    if res.events.is_empty() {
        return Err(SearchError::NoResultsFound);
    }

    Ok(res.events)
}
