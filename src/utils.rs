use std::{collections::HashSet, path::Path};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{SearchTarget, Track};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Parses a song list file into search targets.
///
/// One song per line in `Artist - Title` form, split on the first ` - `
/// (titles contain the separator far more often than artist names do).
/// Blank lines, `#` comments and lines without a separator are skipped.
pub fn parse_song_list(content: &str) -> Vec<SearchTarget> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (artist, song) = line.split_once(" - ")?;
            let artist = artist.trim();
            let song = song.trim();
            if artist.is_empty() || song.is_empty() {
                return None;
            }
            Some(SearchTarget {
                song_title: song.to_string(),
                artist_name: artist.to_string(),
            })
        })
        .collect()
}

/// Builds the free-text search term for a target, artist first.
pub fn build_search_term(target: &SearchTarget) -> String {
    format!("{} {}", target.artist_name, target.song_title)
}

pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_uris = HashSet::new();
    tracks.retain(|track| seen_uris.insert(track.uri.clone()));
}

/// Formats a track duration from milliseconds to `M:SS`.
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

/// Extracts a Spotify track ID from a `spotify:track:` URI or an
/// `open.spotify.com/track/` URL.
pub fn extract_track_id(uri_or_url: &str) -> Option<String> {
    if let Some(id) = uri_or_url.strip_prefix("spotify:track:") {
        return Some(id.to_string());
    }
    if let Some((_, rest)) = uri_or_url.split_once("open.spotify.com/track/") {
        let id = rest.split('?').next().unwrap_or(rest);
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }
    None
}

/// Returns the public web URL of a track, when its URI can be resolved.
pub fn track_url(track: &Track) -> Option<String> {
    extract_track_id(&track.uri).map(|id| format!("https://open.spotify.com/track/{}", id))
}

pub fn format_tracks_text(tracks: &[Track]) -> String {
    let mut out = String::new();
    out.push_str("Spotify Track List\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for track in tracks {
        out.push_str(&format!("Track: {}\n", track.name));
        out.push_str(&format!("Artist(s): {}\n", track.artist_names.join(", ")));
        out.push_str(&format!(
            "Duration: {}\n",
            format_duration(track.duration_ms)
        ));
        if let Some(url) = track_url(track) {
            out.push_str(&format!("Spotify URL: {}\n", url));
        }
        out.push_str(&"-".repeat(30));
        out.push('\n');
    }

    out
}

pub fn format_tracks_csv(tracks: &[Track]) -> String {
    let mut out = String::from("Track Name,Artist(s),Duration,Spotify URL\n");

    for track in tracks {
        let row = [
            track.name.clone(),
            track.artist_names.join(", "),
            format_duration(track.duration_ms),
            track_url(track).unwrap_or_default(),
        ];
        let row: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

// Quote a CSV field when it contains a comma, quote or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Writes a track list to `path`, as CSV for a `.csv` extension and plain
/// text otherwise.
pub async fn export_tracks(path: &Path, tracks: &[Track]) -> Result<(), String> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let content = if is_csv {
        format_tracks_csv(tracks)
    } else {
        format_tracks_text(tracks)
    };

    async_fs::write(path, content)
        .await
        .map_err(|e| e.to_string())
}
