use std::{collections::HashMap, path::PathBuf};

use crate::types::{SearchTarget, Track};

/// Cache of already-resolved search targets.
///
/// Repeated playlist runs over the same song list skip the search and match
/// step for every target that was resolved before. Entries are keyed by the
/// lowercased target, so the cache tolerates casing changes in the song list.
pub struct MatchCacheManager {
    matches: HashMap<String, Track>,
}

impl MatchCacheManager {
    pub fn new() -> Self {
        Self {
            matches: HashMap::new(),
        }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let matches: HashMap<String, Track> =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { matches })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.matches).map_err(|e| e.to_string())?;
        async_fs::write(&path, json).await.map_err(|e| e.to_string())
    }

    pub fn get(&self, target: &SearchTarget) -> Option<&Track> {
        self.matches.get(&Self::key(target))
    }

    pub fn insert(&mut self, target: &SearchTarget, track: Track) {
        self.matches.insert(Self::key(target), track);
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    fn key(target: &SearchTarget) -> String {
        format!(
            "{}|{}",
            target.artist_name.to_lowercase(),
            target.song_title.to_lowercase()
        )
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spoplcli/cache/matches.json");
        path
    }
}

impl Default for MatchCacheManager {
    fn default() -> Self {
        Self::new()
    }
}
