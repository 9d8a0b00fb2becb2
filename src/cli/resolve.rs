use crate::{
    info, matcher, success,
    types::SearchTarget,
    utils, warning,
};

// Candidates fetched per resolution; the first few results carry all the
// signal the scorer needs.
const SEARCH_LIMIT: u32 = 3;

/// Resolves a single song/artist pair to its best-matching track.
///
/// Fetches a handful of candidates for the combined search term and picks
/// the highest-scoring one; prints the winner with its score, or a warning
/// when nothing scores high enough.
pub async fn resolve(song: String, artist: String, scrape: bool) {
    let target = SearchTarget {
        song_title: song,
        artist_name: artist,
    };

    let term = utils::build_search_term(&target);
    info!("Searching for '{}'...", term);

    let candidates = super::search::fetch_tracks(&term, SEARCH_LIMIT, scrape).await;

    match matcher::select_best_match(&target, &candidates) {
        Some(track) => {
            let score = matcher::score_candidate(&target, track);
            success!(
                "Matched '{}' by {} (score {})",
                track.name,
                track.artist_names.join(", "),
                score
            );
            if let Some(url) = utils::track_url(track) {
                info!("{}", url);
            }
        }
        None => {
            warning!(
                "No good match for '{}' by '{}'.",
                target.song_title,
                target.artist_name
            );
        }
    }
}
