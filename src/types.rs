use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// A user-supplied song to resolve against the Spotify catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTarget {
    pub song_title: String,
    pub artist_name: String,
}

/// A track candidate returned by one of the search providers.
///
/// Both the Web API and the GraphQL endpoint are normalized into this shape
/// before matching, caching or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artist_names: Vec<String>,
    pub duration_ms: u64,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub artists: String,
    pub name: String,
    pub duration: String,
}

// --- Web API search ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTrack {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<ApiArtist>,
    #[serde(default)]
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiArtist {
    pub name: String,
}

impl From<ApiTrack> for Track {
    fn from(t: ApiTrack) -> Self {
        Track {
            id: t.id,
            name: t.name,
            uri: t.uri,
            artist_names: t.artists.into_iter().map(|a| a.name).collect(),
            duration_ms: t.duration_ms,
        }
    }
}

// --- GraphQL (pathfinder) search ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderResponse {
    pub data: Option<PathfinderData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderData {
    #[serde(rename = "searchV2")]
    pub search_v2: PathfinderSearch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderSearch {
    #[serde(rename = "tracksV2")]
    pub tracks_v2: Option<PathfinderTracks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderTracks {
    pub items: Vec<PathfinderTrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderTrackItem {
    pub item: Option<PathfinderTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderTrack {
    pub name: String,
    pub uri: String,
    pub artists: PathfinderArtists,
    #[serde(rename = "trackDuration")]
    pub duration: Option<PathfinderDuration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderArtists {
    pub items: Vec<PathfinderArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderArtist {
    pub profile: PathfinderArtistProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderArtistProfile {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfinderDuration {
    #[serde(rename = "totalMilliseconds")]
    pub total_milliseconds: u64,
}

// --- User and playlist operations ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}
