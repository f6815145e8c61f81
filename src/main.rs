use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moviefav::{cli, config, warning};

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
    /// List popular movies
    Popular(PageOptions),

    /// Search movies by title
    Search(SearchOptions),

    /// Show a movie with its recommendations
    Detail(MovieOptions),

    /// Add a movie to favorites, or remove it if it already is one
    Favorite(MovieOptions),

    /// List favorite movies
    Favorites,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PageOptions {
    /// Result page to show, starting at 1
    #[clap(long)]
    pub page: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Title to search for
    pub query: String,

    /// Result page to show, starting at 1
    #[clap(long)]
    pub page: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct MovieOptions {
    /// TMDB movie id
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file, using process environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Popular(opt) => cli::popular(opt.page).await,
        Command::Search(opt) => cli::search(opt.query, opt.page).await,
        Command::Detail(opt) => cli::detail(opt.id).await,
        Command::Favorite(opt) => cli::favorite(opt.id).await,
        Command::Favorites => cli::favorites().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
