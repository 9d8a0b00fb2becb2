use reqwest::Client;
use serde_json::json;

use crate::{
    config,
    types::{PathfinderResponse, PathfinderTrack, Track},
    utils,
};

// Persisted query hash of the web player's "searchDesktop" operation.
const SEARCH_OPERATION: &str = "searchDesktop";
const SEARCH_QUERY_HASH: &str = "d9f785900f0710b31c07818d617f4f7600c1e21217e80f5b043d1e78d74e6026";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Searches for tracks via the GraphQL endpoint of Spotify's web player.
///
/// Posts the `searchDesktop` persisted query to the pathfinder endpoint with
/// the headers of a desktop browser session. A bearer token is optional:
/// without one the request runs as the anonymous web player. This path does
/// not belong to the documented API and may break when Spotify changes their
/// frontend.
pub async fn search_tracks(
    term: &str,
    limit: u32,
    bearer: Option<&str>,
) -> Result<Vec<Track>, reqwest::Error> {
    let payload = json!({
        "variables": {
            "searchTerm": term,
            "offset": 0,
            "limit": limit,
            "numberOfTopResults": 5,
            "includeAudiobooks": true,
            "includeArtistHasConcertsField": false,
            "includePreReleases": true,
            "includeLocalConcertsField": false,
            "includeAuthors": true,
        },
        "operationName": SEARCH_OPERATION,
        "extensions": {
            "persistedQuery": {
                "version": 1,
                "sha256Hash": SEARCH_QUERY_HASH,
            }
        }
    });

    let client = Client::new();
    let mut request = client
        .post(&config::spotify_pathfinder_url())
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/json")
        .header("Accept-Language", "en-US,en;q=0.9")
        .header("Origin", "https://open.spotify.com")
        .header("Referer", "https://open.spotify.com/")
        .json(&payload);

    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?.error_for_status()?;
    let json = response.json::<PathfinderResponse>().await?;

    let items = json
        .data
        .and_then(|d| d.search_v2.tracks_v2)
        .map(|t| t.items)
        .unwrap_or_default();

    Ok(items
        .into_iter()
        .filter_map(|wrapper| wrapper.item)
        .map(to_track)
        .collect())
}

// The GraphQL shape nests the useful fields; flatten into the common type.
fn to_track(track: PathfinderTrack) -> Track {
    let id = utils::extract_track_id(&track.uri).unwrap_or_default();
    let artist_names = track
        .artists
        .items
        .into_iter()
        .map(|a| a.profile.name)
        .collect();

    Track {
        id,
        name: track.name,
        uri: track.uri,
        artist_names,
        duration_ms: track
            .duration
            .map(|d| d.total_milliseconds)
            .unwrap_or_default(),
    }
}
