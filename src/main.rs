use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spoplcli::{cli, config, error, types::PkceToken};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Search tracks and print the results
    Search(SearchOptions),

    /// Resolve a single song/artist pair to its best matching track
    Resolve(ResolveOptions),

    #[clap(about = "Create a playlist from a song list file")]
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text search query (e.g. "Paradisio Bailando")
    pub query: String,

    /// Maximum number of results
    #[clap(long, default_value_t = 10)]
    pub limit: u32,

    /// Use the unofficial GraphQL endpoint instead of the Web API
    #[clap(long)]
    pub scrape: bool,

    /// Export results to a file (.txt or .csv)
    #[clap(long)]
    pub export: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Song title to resolve
    #[clap(long)]
    pub song: String,

    /// Artist name to resolve
    #[clap(long)]
    pub artist: String,

    /// Use the unofficial GraphQL endpoint instead of the Web API
    #[clap(long)]
    pub scrape: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Name of the playlist to create
    #[clap(long)]
    pub name: String,

    /// Song list file, one "Artist - Title" per line
    #[clap(long)]
    pub file: PathBuf,

    /// Playlist description
    #[clap(long)]
    pub description: Option<String>,

    /// Create the playlist as public
    #[clap(long)]
    pub public: bool,

    /// Ignore the local match cache and search everything again
    #[clap(long)]
    pub force: bool,

    /// Export matched tracks to a file (.txt or .csv)
    #[clap(long)]
    pub export: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Search(opt) => cli::search(opt.query, opt.limit, opt.scrape, opt.export).await,
        Command::Resolve(opt) => cli::resolve(opt.song, opt.artist, opt.scrape).await,
        Command::Playlist(opt) => {
            cli::playlist(
                opt.name,
                opt.file,
                opt.description,
                opt.public,
                opt.force,
                opt.export,
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
