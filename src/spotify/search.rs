use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{SearchResponse, Track},
    warning,
};

/// Searches for tracks via the Spotify Web API.
///
/// Issues `GET /search?q={query}&type=track&limit={limit}` with bearer
/// authentication and normalizes the items into [`Track`] values in the
/// order the API returned them. That order matters downstream: the matcher
/// breaks score ties in favor of earlier candidates.
///
/// # Rate Limiting
///
/// A 429 response is retried after the `Retry-After` delay when it is at
/// most 120 seconds; longer delays produce a warning and the error is
/// propagated. Transient 502 responses are retried after 10 seconds.
pub async fn search_tracks(
    query: &str,
    limit: u32,
    token: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", &limit.to_string()),
            ])
            .bearer_auth(token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => {
                // check for retry-after header
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = resp
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(0);
                    if retry_after <= 120 {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again later.",
                        retry_after
                    );
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<SearchResponse>().await?;
        return Ok(json.tracks.items.into_iter().map(Track::from).collect());
    }
}
