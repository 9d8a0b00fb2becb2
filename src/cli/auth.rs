use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::PkceToken};

/// Runs the interactive authentication flow for the `auth` subcommand.
///
/// Delegates to [`spotify::auth::auth`], which starts the local callback
/// server, opens the browser and persists the obtained token.
pub async fn auth(state: Arc<Mutex<Option<PkceToken>>>) {
    spotify::auth::auth(state).await;
}
