use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config, error,
    management::TokenManager,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUser, GetUserPlaylistsResponse,
    },
};

/// Returns the authenticated user, needed for playlist creation.
pub async fn current_user() -> Result<CurrentUser, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let mut token_mgr = load_token_manager().await;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match check_response(response) {
            Ok(Some(valid_response)) => valid_response,
            Ok(None) => {
                sleep(Duration::from_secs(10)).await;
                continue; // retry
            }
            Err(err) => return Err(err),
        };

        let json = response.json::<CurrentUser>().await?;
        return Ok(json);
    }
}

/// Checks whether the user already owns a playlist with the given name.
pub async fn exists(name: &str) -> Result<bool, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    );

    let mut token_mgr = load_token_manager().await;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match check_response(response) {
            Ok(Some(valid_response)) => valid_response,
            Ok(None) => {
                sleep(Duration::from_secs(10)).await;
                continue; // retry
            }
            Err(err) => return Err(err),
        };

        let json = response.json::<GetUserPlaylistsResponse>().await?;
        return Ok(json.items.iter().any(|p| p.name == name));
    }
}

/// Creates a playlist for the authenticated user.
pub async fn create(
    name: String,
    description: String,
    public: bool,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let user = current_user().await?;
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user.id
    );

    let body = CreatePlaylistRequest {
        name,
        description,
        public,
        collaborative: false,
    };

    let mut token_mgr = load_token_manager().await;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await;

        let response = match check_response(response) {
            Ok(Some(valid_response)) => valid_response,
            Ok(None) => {
                sleep(Duration::from_secs(10)).await;
                continue; // retry
            }
            Err(err) => return Err(err),
        };

        let json = response.json::<CreatePlaylistResponse>().await?;
        return Ok(json);
    }
}

/// Adds track URIs to a playlist.
///
/// The Spotify API accepts at most 100 URIs per request; callers chunk
/// accordingly.
pub async fn add_tracks(
    playlist_id: String,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let body = AddTracksRequest { uris };

    let mut token_mgr = load_token_manager().await;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await;

        let response = match check_response(response) {
            Ok(Some(valid_response)) => valid_response,
            Ok(None) => {
                sleep(Duration::from_secs(10)).await;
                continue; // retry
            }
            Err(err) => return Err(err),
        };

        let json = response.json::<AddTracksResponse>().await?;
        return Ok(json);
    }
}

async fn load_token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run spoplcli auth\n Error: {}",
                e
            );
        }
    }
}

// Ok(Some(_)) is a usable response, Ok(None) asks the caller to retry.
fn check_response(
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<Option<reqwest::Response>, reqwest::Error> {
    match response {
        Ok(resp) => match resp.error_for_status() {
            Ok(valid_response) => Ok(Some(valid_response)),
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        return Ok(None); // retry
                    }
                }
                Err(err) // propagate other errors
            }
        },
        Err(err) => Err(err), // network or reqwest error
    }
}
