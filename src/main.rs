use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use scsearch::{cli, config, error};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the search proxy
    Serve(ServeOptions),

    /// Exchange client credentials and print token metadata
    Token,

    /// Search tracks from the terminal
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind (overrides SERVER_ADDRESS)
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Search tracks from the terminal")]
pub struct SearchOptions {
    /// Search text
    pub query: String,

    /// Number of tracks per page (1-50)
    #[clap(long)]
    pub limit: Option<i64>,

    /// 1-based page number
    #[clap(long, conflicts_with = "offset")]
    pub page: Option<i64>,

    /// Explicit offset into the result list
    #[clap(long)]
    pub offset: Option<i64>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Serve(opt) => cli::serve(config, opt.addr).await,
        Command::Token => cli::token(config).await,
        Command::Search(opt) => {
            cli::search(config, opt.query, opt.limit, opt.page, opt.offset).await
        }
        Command::Completions(_) => {}
    }
}
