use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::{MatchCacheManager, TokenManager},
    matcher, spotify, success,
    types::{SearchTarget, Track},
    utils, warning,
};

// Candidates fetched per song; the scorer only needs the top results.
const SEARCH_LIMIT: u32 = 3;

// The add-tracks endpoint accepts at most 100 URIs per request.
const ADD_TRACKS_CHUNK_SIZE: usize = 100;

/// Creates a playlist from a song list file.
///
/// Reads the file, resolves every `Artist - Title` line to a track via
/// search and the match scorer, then creates the playlist and adds the
/// matched tracks in chunks. Previously resolved songs are served from the
/// local match cache unless `force` is set.
pub async fn playlist(
    name: String,
    file: PathBuf,
    description: Option<String>,
    public: bool,
    force: bool,
    export: Option<PathBuf>,
) {
    let content = match async_fs::read_to_string(&file).await {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read song list {}: {}", file.display(), e);
        }
    };

    let targets = utils::parse_song_list(&content);
    if targets.is_empty() {
        error!("Song list {} contains no usable entries.", file.display());
    }
    info!("Loaded {} songs from {}", targets.len(), file.display());

    match spotify::playlist::exists(&name).await {
        Ok(true) => {
            info!("Playlist {} already exists", name);
            return;
        }
        Ok(false) => {}
        Err(e) => {
            warning!("Failed to check if playlist exists: {}", e);
        }
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run spoplcli auth\n Error: {}",
                e
            );
        }
    };

    let mut match_cache = MatchCacheManager::load().await.unwrap_or_default();

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut matched_tracks: Vec<Track> = Vec::new();
    let mut misses: Vec<SearchTarget> = Vec::new();

    for (idx, target) in targets.iter().enumerate() {
        pb.set_message(format!(
            "Resolving {}/{}: {} - {}",
            idx + 1,
            targets.len(),
            target.artist_name,
            target.song_title
        ));

        if !force {
            if let Some(track) = match_cache.get(target) {
                matched_tracks.push(track.clone());
                continue;
            }
        }

        let token = token_mgr.get_valid_token().await;
        let term = utils::build_search_term(target);

        let candidates = match spotify::search::search_tracks(&term, SEARCH_LIMIT, &token).await {
            Ok(candidates) => candidates,
            Err(e) => {
                pb.println(format!("Search failed for '{}': {}", term, e));
                misses.push(target.clone());
                continue;
            }
        };

        match matcher::select_best_match(target, &candidates) {
            Some(track) => {
                match_cache.insert(target, track.clone());
                matched_tracks.push(track.clone());
            }
            None => misses.push(target.clone()),
        }
    }

    pb.finish_and_clear();

    if let Err(e) = match_cache.persist().await {
        warning!("Failed to persist match cache: {}", e);
    }

    success!("Matched {}/{} songs.", matched_tracks.len(), targets.len());
    for miss in &misses {
        warning!(
            "No good match for '{}' by '{}'.",
            miss.song_title,
            miss.artist_name
        );
    }

    utils::remove_duplicate_tracks(&mut matched_tracks);

    if matched_tracks.is_empty() {
        error!("No tracks matched; playlist was not created.");
    }

    if let Some(path) = &export {
        match utils::export_tracks(path, &matched_tracks).await {
            Ok(()) => success!(
                "Exported {} tracks to {}",
                matched_tracks.len(),
                path.display()
            ),
            Err(e) => warning!("Failed to export tracks: {}", e),
        }
    }

    let created =
        match spotify::playlist::create(name, description.unwrap_or_default(), public).await {
            Ok(created) => created,
            Err(e) => {
                error!("Failed to create playlist: {}", e);
            }
        };

    let uris: Vec<String> = matched_tracks.iter().map(|t| t.uri.clone()).collect();
    for chunk in uris.chunks(ADD_TRACKS_CHUNK_SIZE) {
        match spotify::playlist::add_tracks(created.id.clone(), chunk.to_vec()).await {
            Ok(_) => success!("Added {} tracks to {}", chunk.len(), created.name),
            Err(e) => warning!("Failed to add tracks: {}", e),
        }
    }

    success!(
        "Playlist ready: https://open.spotify.com/playlist/{}",
        created.id
    );
}
