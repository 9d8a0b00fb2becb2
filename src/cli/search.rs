use std::path::PathBuf;

use tabled::Table;

use crate::{
    error,
    management::TokenManager,
    spotify, success,
    types::{Track, TrackTableRow},
    utils, warning,
};

/// Searches for tracks and prints them as a table.
///
/// With `scrape` the query goes to the web player's GraphQL endpoint, which
/// works without authentication; otherwise the Web API is used and a cached
/// token is required. Passing `export` additionally writes the results to a
/// text or CSV file.
pub async fn search(query: String, limit: u32, scrape: bool, export: Option<PathBuf>) {
    let tracks = fetch_tracks(&query, limit, scrape).await;

    if tracks.is_empty() {
        warning!("No tracks found for '{}'.", query);
        return;
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            artists: t.artist_names.join(", "),
            name: t.name.clone(),
            duration: utils::format_duration(t.duration_ms),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);

    if let Some(path) = export {
        match utils::export_tracks(&path, &tracks).await {
            Ok(()) => success!("Exported {} tracks to {}", tracks.len(), path.display()),
            Err(e) => warning!("Failed to export tracks: {}", e),
        }
    }
}

/// Runs the query against the selected search provider.
pub async fn fetch_tracks(query: &str, limit: u32, scrape: bool) -> Vec<Track> {
    if scrape {
        // The GraphQL endpoint accepts anonymous requests; attach a token
        // only when one is already cached.
        let token = match TokenManager::load().await {
            Ok(mut mgr) => Some(mgr.get_valid_token().await),
            Err(_) => None,
        };

        match spotify::pathfinder::search_tracks(query, limit, token.as_deref()).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Search failed: {}", e);
                Vec::new()
            }
        }
    } else {
        let mut token_mgr = match TokenManager::load().await {
            Ok(manager) => manager,
            Err(e) => {
                error!(
                    "Failed to load token. Please run spoplcli auth\n Error: {}",
                    e
                );
            }
        };
        let token = token_mgr.get_valid_token().await;

        match spotify::search::search_tracks(query, limit, &token).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Search failed: {}", e);
                Vec::new()
            }
        }
    }
}
